//! Renderer resolution and dispatch.
//!
//! Every element resolves its label renderer and element renderer through
//! the same fallback chain: the element's own override, then the schema's
//! type-keyed renderer, then the wildcard `"*"` entry. When nothing
//! resolves the output is the empty string, never an error.

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::FormContext;
use crate::schema::ElementDef;

/// The registry key matched when no type-specific renderer exists.
pub const WILDCARD: &str = "*";

/// Turns one element (and the current value/error state) into markup.
///
/// Renderers receive the element name, its definition, and a read-only
/// [`FormContext`]. The engine emits whatever the renderer returns without
/// altering or escaping it. Plain functions with the matching signature
/// implement this trait automatically:
///
/// ```
/// use formwork::{ElementDef, FormContext};
///
/// fn submit_button(name: &str, element: &ElementDef, _form: &FormContext<'_>) -> String {
///     format!(r#"<button type="submit" name="{name}">{}</button>"#, element.label)
/// }
/// ```
pub trait Renderer: Send + Sync {
    /// Produces markup for the named element.
    fn render(&self, name: &str, element: &ElementDef, form: &FormContext<'_>) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&str, &ElementDef, &FormContext<'_>) -> String + Send + Sync,
{
    fn render(&self, name: &str, element: &ElementDef, form: &FormContext<'_>) -> String {
        self(name, element, form)
    }
}

/// Extra css classes injected when batch-rendering a list of elements,
/// e.g. grid-column sizing. Applied to a copy of each element's class
/// fields; the stored schema is never mutated.
#[derive(Debug, Clone, Default)]
pub struct LayoutHints {
    /// Appended to each element's label class.
    pub label_class: String,
    /// Appended to each element's element class.
    pub element_class: String,
}

impl LayoutHints {
    /// Creates layout hints for labels and elements.
    pub fn new(label_class: impl Into<String>, element_class: impl Into<String>) -> Self {
        Self {
            label_class: label_class.into(),
            element_class: element_class.into(),
        }
    }

    /// No extra classes.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Walks the resolution chain: override, then type key, then wildcard.
pub(crate) fn resolve<'a>(
    override_renderer: Option<&'a Arc<dyn Renderer>>,
    registry: &'a HashMap<String, Arc<dyn Renderer>>,
    type_key: &str,
) -> Option<&'a dyn Renderer> {
    override_renderer
        .map(|r| r.as_ref())
        .or_else(|| registry.get(type_key).map(|r| r.as_ref()))
        .or_else(|| registry.get(WILDCARD).map(|r| r.as_ref()))
}

/// Renders an element's label through the resolution chain.
pub(crate) fn render_label(name: &str, element: &ElementDef, form: &FormContext<'_>) -> String {
    let registry = &form.schema().label_renderers;
    match resolve(element.label_renderer.as_ref(), registry, &element.element_type) {
        Some(renderer) => renderer.render(name, element, form),
        None => {
            tracing::trace!(element = %name, "no label renderer resolved");
            String::new()
        }
    }
}

/// Renders an element's input markup through the resolution chain.
pub(crate) fn render_element(name: &str, element: &ElementDef, form: &FormContext<'_>) -> String {
    let registry = &form.schema().element_renderers;
    match resolve(element.element_renderer.as_ref(), registry, &element.element_type) {
        Some(renderer) => renderer.render(name, element, form),
        None => {
            tracing::trace!(element = %name, "no element renderer resolved");
            String::new()
        }
    }
}

/// Returns a copy of the element with the hints' classes appended.
pub(crate) fn apply_hints(element: &ElementDef, hints: &LayoutHints) -> ElementDef {
    let mut copy = element.clone();
    copy.label_class = merge_class(&copy.label_class, &hints.label_class);
    copy.element_class = merge_class(&copy.element_class, &hints.element_class);
    copy
}

fn merge_class(base: &str, extra: &str) -> String {
    match (base.is_empty(), extra.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => extra.to_string(),
        (false, false) => format!("{base} {extra}"),
    }
}
