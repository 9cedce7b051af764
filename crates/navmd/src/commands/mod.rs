//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod transform;
mod walk;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use transform::TransformArgs;

use navmd_config::TransformConfig;
use navmd_document::DualViewOptions;

/// Map the loaded transform section onto document pass options.
fn dual_options(transform: &TransformConfig) -> DualViewOptions {
    DualViewOptions {
        flag: transform.flag.clone(),
        static_label: transform.static_label.clone(),
        dynamic_label: transform.dynamic_label.clone(),
    }
}
