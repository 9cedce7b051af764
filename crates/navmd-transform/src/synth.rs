//! Code synthesizer.
//!
//! Builds the dynamic form of a navigator from its decomposed
//! configuration: a zero-argument construction binding plus a function
//! component returning a Navigator/Group/Screen markup tree.

use std::collections::HashMap;

use navmd_syntax::{
    CallExpr, Expr, FunctionComponent, JsxAttr, JsxBlock, JsxElement, Stmt, VarDecl,
};

use crate::consts::{NAVIGATOR_PREFIX, NAVIGATOR_SUFFIX, ROOT_CONTAINER};
use crate::decompose::{GroupConfig, ParsedNavigatorConfig, ScreenConfig};
use crate::scan::{NavigatorDescriptor, RootWrap};

/// Allocates short constant names, de-duplicating kind collisions.
///
/// The first navigator of a kind gets the plain short name; later ones
/// get a deterministic letter suffix ("StackA", "StackB", ...). Scoped
/// to one transform pass, never shared across documents.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counts: HashMap<String, u32>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, factory: &str) -> String {
        let base = short_name(factory);
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;
        match *count {
            1 => base,
            n => {
                let suffix = char::from(b'A' + u8::try_from(n - 2).unwrap_or(25).min(25));
                format!("{base}{suffix}")
            }
        }
    }
}

/// Derive the short constant name from a construction function name.
///
/// Strips the fixed prefix and suffix, then keeps the trailing
/// capitalized word, so `createNativeStackNavigator` and
/// `createStackNavigator` both shorten to `Stack`.
pub fn short_name(factory: &str) -> String {
    let kind = factory.strip_prefix(NAVIGATOR_PREFIX).unwrap_or(factory);
    let kind = kind.strip_suffix(NAVIGATOR_SUFFIX).unwrap_or(kind);
    match kind.rfind(|c: char| c.is_ascii_uppercase()) {
        Some(start) => kind[start..].to_owned(),
        None if kind.is_empty() => "Navigator".to_owned(),
        None => kind.to_owned(),
    }
}

/// The statements synthesized for one navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedNavigator {
    /// The short constant bound to the zero-argument construction.
    pub const_name: String,
    /// The construction binding followed by the function component.
    pub stmts: Vec<Stmt>,
}

/// Synthesize the dynamic form of one navigator.
pub fn synthesize(
    descriptor: &NavigatorDescriptor,
    parsed: &ParsedNavigatorConfig,
    names: &mut NameAllocator,
) -> SynthesizedNavigator {
    let const_name = names.allocate(&descriptor.factory);

    let binding = Stmt::Var(VarDecl {
        exported: false,
        kind: "const".to_owned(),
        name: const_name.clone(),
        init: Expr::Call(CallExpr {
            callee: descriptor.factory.clone(),
            args: Vec::new(),
        }),
        leading: descriptor.leading.clone(),
        trailing: Vec::new(),
        blank_before: descriptor.blank_before,
    });

    let mut navigator = JsxElement::new(format!("{const_name}.Navigator"));
    for (name, value) in &parsed.props {
        navigator.attrs.push(attr(name, value));
    }
    for (name, group) in &parsed.groups {
        navigator
            .children
            .push(group_element(&const_name, name, group));
    }
    for (name, screen) in &parsed.screens {
        navigator
            .children
            .push(screen_element(&const_name, name, screen));
    }

    let component = Stmt::Function(FunctionComponent {
        name: descriptor.component_name.clone(),
        body: navigator,
        leading: Vec::new(),
        blank_before: true,
    });

    SynthesizedNavigator {
        const_name,
        stmts: vec![binding, component],
    }
}

/// Build the root-container statement replacing a wrap declaration.
pub fn root_container(wrap: &RootWrap, navigator_component: &str) -> Stmt {
    let mut container = JsxElement::new(ROOT_CONTAINER);
    container
        .children
        .push(JsxElement::new(navigator_component));
    Stmt::Jsx(JsxBlock {
        element: container,
        blank_before: wrap.blank_before,
    })
}

fn group_element(const_name: &str, name: &str, group: &GroupConfig) -> JsxElement {
    let mut element = JsxElement::new(format!("{const_name}.Group"));
    element.attrs.push(JsxAttr::string("key", name));
    for (prop, value) in &group.props {
        element.attrs.push(attr(prop, value));
    }
    for (screen_name, screen) in &group.screens {
        element
            .children
            .push(screen_element(const_name, screen_name, screen));
    }
    element
}

fn screen_element(const_name: &str, name: &str, screen: &ScreenConfig) -> JsxElement {
    let mut element = JsxElement::new(format!("{const_name}.Screen"));
    element.attrs.push(JsxAttr::string("name", name));
    element
        .attrs
        .push(JsxAttr::expr("component", screen.component.clone()));
    for (prop, value) in &screen.extras {
        element.attrs.push(attr(prop, value));
    }
    element
}

/// String literals become plain string attributes, anything else an
/// expression container.
fn attr(name: &str, value: &Expr) -> JsxAttr {
    match value {
        Expr::Str(lit) => JsxAttr::string(name, lit.value.clone()),
        other => JsxAttr::expr(name, other.clone()),
    }
}
