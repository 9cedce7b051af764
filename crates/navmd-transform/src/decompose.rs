//! Configuration decomposer.
//!
//! Takes one navigator's configuration object literal apart into screens,
//! groups and navigator-level properties, normalizing the three equivalent
//! screen declaration shapes into one record. Decomposition is total:
//! an entry whose shape is not recognized is skipped, never fatal.

use std::collections::HashSet;

use navmd_syntax::{Comment, Expr, ObjectLit, Property};
use tracing::debug;

use crate::comments::{Anchor, CommentTracker, Position, is_region_end};
use crate::consts::{GROUPS_KEY, LINKING_FIELD, SCREEN_CONFIG_HELPER, SCREEN_FIELD, SCREENS_KEY};

/// One screen, regardless of how it was declared.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    /// The rendered component expression.
    pub component: Expr,
    /// Remaining descriptor fields, in source order.
    pub extras: Vec<(String, Expr)>,
}

/// A named collection of screens sharing navigator-level options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupConfig {
    pub screens: Vec<(String, ScreenConfig)>,
    pub props: Vec<(String, Expr)>,
}

/// The fully decomposed form of one navigator's configuration.
///
/// All lists preserve source order; screen names are unique within their
/// owning scope (duplicates are dropped).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedNavigatorConfig {
    pub screens: Vec<(String, ScreenConfig)>,
    pub groups: Vec<(String, GroupConfig)>,
    pub props: Vec<(String, Expr)>,
}

/// Decompose a configuration object, recording attached comments.
pub fn decompose(config: &ObjectLit, tracker: &mut CommentTracker) -> ParsedNavigatorConfig {
    let mut parsed = ParsedNavigatorConfig::default();

    for (prop, (leading, trailing)) in config.props.iter().zip(effective_comments(&config.props)) {
        match prop.key.as_str() {
            SCREENS_KEY => {
                // the key itself has no output counterpart; its comments
                // are tracked best-effort and dropped if nothing matches
                let anchor = Anchor::Prop(SCREENS_KEY.to_owned());
                tracker.record_all(&leading, &anchor, Position::Leading);
                tracker.record_all(&trailing, &anchor, Position::Trailing);
                if let Expr::Object(screens) = &prop.value {
                    decompose_screens(screens, tracker, &mut parsed.screens);
                } else {
                    debug!(key = SCREENS_KEY, "screen map is not an object literal, skipping");
                }
            }
            GROUPS_KEY => {
                let anchor = Anchor::Prop(GROUPS_KEY.to_owned());
                tracker.record_all(&leading, &anchor, Position::Leading);
                tracker.record_all(&trailing, &anchor, Position::Trailing);
                if let Expr::Object(groups) = &prop.value {
                    decompose_groups(groups, tracker, &mut parsed.groups);
                } else {
                    debug!(key = GROUPS_KEY, "group map is not an object literal, skipping");
                }
            }
            key => {
                let anchor = Anchor::Prop(key.to_owned());
                tracker.record_all(&leading, &anchor, Position::Leading);
                tracker.record_all(&trailing, &anchor, Position::Trailing);
                parsed.props.push((key.to_owned(), prop.value.clone()));
            }
        }
    }

    parsed
}

fn decompose_screens(
    screens: &ObjectLit,
    tracker: &mut CommentTracker,
    out: &mut Vec<(String, ScreenConfig)>,
) {
    let mut seen: HashSet<String> = HashSet::new();

    for (prop, (leading, trailing)) in screens.props.iter().zip(effective_comments(&screens.props))
    {
        let name = prop.key.clone();
        if !seen.insert(name.clone()) {
            debug!(screen = %name, "duplicate screen name, skipping");
            continue;
        }
        let Some(screen) = normalize_screen(&prop.value, tracker, &name) else {
            debug!(screen = %name, "unrecognized screen shape, skipping");
            continue;
        };

        let anchor = Anchor::Screen(name.clone());
        tracker.record_all(&leading, &anchor, Position::Leading);
        tracker.record_all(&trailing, &anchor, Position::Trailing);
        out.push((name, screen));
    }
}

fn decompose_groups(
    groups: &ObjectLit,
    tracker: &mut CommentTracker,
    out: &mut Vec<(String, GroupConfig)>,
) {
    let mut seen: HashSet<String> = HashSet::new();

    for (prop, (leading, trailing)) in groups.props.iter().zip(effective_comments(&groups.props)) {
        let name = prop.key.clone();
        if !seen.insert(name.clone()) {
            debug!(group = %name, "duplicate group name, skipping");
            continue;
        }
        let Expr::Object(body) = &prop.value else {
            debug!(group = %name, "group entry is not an object literal, skipping");
            continue;
        };

        let anchor = Anchor::Group(name.clone());
        tracker.record_all(&leading, &anchor, Position::Leading);
        tracker.record_all(&trailing, &anchor, Position::Trailing);

        let mut group = GroupConfig::default();
        for (entry, (entry_leading, entry_trailing)) in
            body.props.iter().zip(effective_comments(&body.props))
        {
            if entry.key == SCREENS_KEY {
                let entry_anchor = Anchor::Prop(SCREENS_KEY.to_owned());
                tracker.record_all(&entry_leading, &entry_anchor, Position::Leading);
                tracker.record_all(&entry_trailing, &entry_anchor, Position::Trailing);
                if let Expr::Object(screens) = &entry.value {
                    decompose_screens(screens, tracker, &mut group.screens);
                }
            } else {
                let entry_anchor = Anchor::Prop(entry.key.clone());
                tracker.record_all(&entry_leading, &entry_anchor, Position::Leading);
                tracker.record_all(&entry_trailing, &entry_anchor, Position::Trailing);
                group.props.push((entry.key.clone(), entry.value.clone()));
            }
        }
        out.push((name, group));
    }
}

/// Normalize the three screen declaration shapes into one record.
///
/// - a bare identifier is the rendered component with no extras;
/// - an object literal contributes its `screen` field as the component and
///   everything else as extras (`linking` is dropped);
/// - a `createScreenConfig(...)` call is unwrapped one level.
fn normalize_screen(
    value: &Expr,
    tracker: &mut CommentTracker,
    screen_name: &str,
) -> Option<ScreenConfig> {
    match value {
        Expr::Ident(_) => Some(ScreenConfig {
            component: value.clone(),
            extras: Vec::new(),
        }),
        Expr::Object(descriptor) => screen_from_descriptor(descriptor, tracker, screen_name),
        Expr::Call(call) if call.callee == SCREEN_CONFIG_HELPER => match call.args.as_slice() {
            [Expr::Object(descriptor)] => screen_from_descriptor(descriptor, tracker, screen_name),
            [component @ Expr::Ident(_)] => Some(ScreenConfig {
                component: component.clone(),
                extras: Vec::new(),
            }),
            _ => None,
        },
        _ => None,
    }
}

fn screen_from_descriptor(
    descriptor: &ObjectLit,
    tracker: &mut CommentTracker,
    screen_name: &str,
) -> Option<ScreenConfig> {
    let component = descriptor.get(SCREEN_FIELD)?.clone();
    let mut extras = Vec::new();

    for (prop, (leading, trailing)) in descriptor
        .props
        .iter()
        .zip(effective_comments(&descriptor.props))
    {
        if prop.key == LINKING_FIELD {
            // no dynamic-form equivalent; the field and its comments go
            continue;
        }
        // the `screen` field becomes the `component` attribute
        let attr_name = if prop.key == SCREEN_FIELD {
            "component".to_owned()
        } else {
            extras.push((prop.key.clone(), prop.value.clone()));
            prop.key.clone()
        };
        let anchor = Anchor::ScreenProp {
            screen: screen_name.to_owned(),
            prop: attr_name,
        };
        tracker.record_all(&leading, &anchor, Position::Leading);
        tracker.record_all(&trailing, &anchor, Position::Trailing);
    }

    Some(ScreenConfig { component, extras })
}

/// Resolve the effective leading/trailing comments per property.
///
/// Applies the region-end heuristic: a leading comment ending in `-end`
/// actually closes the region opened at the *previous* property, so it is
/// reclassified as that property's trailing comment.
fn effective_comments(props: &[Property]) -> Vec<(Vec<Comment>, Vec<Comment>)> {
    let mut resolved: Vec<(Vec<Comment>, Vec<Comment>)> = props
        .iter()
        .map(|p| (Vec::new(), p.trailing.clone()))
        .collect();

    for (idx, prop) in props.iter().enumerate() {
        for comment in &prop.leading {
            if idx > 0 && is_region_end(comment) {
                resolved[idx - 1].1.push(comment.clone());
            } else {
                resolved[idx].0.push(comment.clone());
            }
        }
    }

    resolved
}
