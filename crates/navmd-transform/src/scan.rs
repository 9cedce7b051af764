//! Declaration scanner.
//!
//! Walks the top-level statement list and finds the declarations the
//! transform rewrites: navigator constructions and the root wrap call.
//! Scanning never mutates the program.

use navmd_syntax::{Comment, Expr, ObjectLit, Program, Stmt};

use crate::consts::{NAVIGATOR_PREFIX, NAVIGATOR_SUFFIX, STATIC_ROOT_FACTORY};

/// One recognized `const X = create*Navigator({ ... })` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorDescriptor {
    /// The declared identifier; becomes the function component name.
    pub component_name: String,
    /// The construction function, e.g. `createNativeStackNavigator`.
    pub factory: String,
    /// The single object-literal argument.
    pub config: ObjectLit,
    /// Index of the declaration in the statement list.
    pub index: usize,
    /// Comments attached above the declaration.
    pub leading: Vec<Comment>,
    pub blank_before: bool,
}

/// A `const X = createStaticNavigation(LastNavigator)` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWrap {
    pub index: usize,
    /// The navigator identifier passed to the wrap call.
    pub navigator: String,
    pub blank_before: bool,
}

/// Result of scanning one program.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub navigators: Vec<NavigatorDescriptor>,
    pub root_wrap: Option<RootWrap>,
}

/// Whether a callee name matches the navigator construction pattern.
pub fn is_navigator_factory(name: &str) -> bool {
    name.len() > NAVIGATOR_PREFIX.len() + NAVIGATOR_SUFFIX.len()
        && name.starts_with(NAVIGATOR_PREFIX)
        && name.ends_with(NAVIGATOR_SUFFIX)
}

/// Scan a program for navigator declarations and a root wrap usage.
///
/// The root wrap is only recognized when it references the last declared
/// navigator; a wrap of anything else is left alone.
pub fn scan(program: &Program) -> ScanResult {
    let mut result = ScanResult::default();
    let mut wrap_candidate: Option<RootWrap> = None;

    for (index, stmt) in program.stmts.iter().enumerate() {
        let Stmt::Var(var) = stmt else { continue };
        let Expr::Call(call) = &var.init else {
            continue;
        };

        if is_navigator_factory(&call.callee) {
            let [Expr::Object(config)] = call.args.as_slice() else {
                continue;
            };
            result.navigators.push(NavigatorDescriptor {
                component_name: var.name.clone(),
                factory: call.callee.clone(),
                config: config.clone(),
                index,
                leading: var.leading.clone(),
                blank_before: var.blank_before,
            });
        } else if call.callee == STATIC_ROOT_FACTORY {
            let [Expr::Ident(navigator)] = call.args.as_slice() else {
                continue;
            };
            wrap_candidate = Some(RootWrap {
                index,
                navigator: navigator.clone(),
                blank_before: var.blank_before,
            });
        }
    }

    if let Some(wrap) = wrap_candidate {
        let wraps_last = result
            .navigators
            .last()
            .is_some_and(|nav| nav.component_name == wrap.navigator);
        if wraps_last {
            result.root_wrap = Some(wrap);
        }
    }

    result
}
