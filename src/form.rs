//! The form engine: schema plus mutable submission state.
//!
//! A [`Form`] owns one normalized [`FormSchema`] (immutable after
//! construction) and the per-instance [`FormState`] (held values and
//! recorded errors). The typical cycle: construct once, feed each
//! submission through [`Form::is_valid`], and render elements or groups
//! into a page, pre-filled and annotated from the current state.
//!
//! A `Form` is confined to one logical request or session. `is_valid`
//! takes `&mut self`, so concurrent validation on a shared instance is
//! ruled out at compile time; embedders in concurrent hosts use one
//! instance per request.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::context::FormContext;
use crate::error::SchemaError;
use crate::render::{self, LayoutHints};
use crate::schema::{ElementDef, FormSchema, GroupDef};
use crate::validation;
use crate::value::Value;

/// Mutable per-instance state: the held values and the error map.
///
/// `data` starts empty, is replaced by [`Form::set_data`] or
/// [`Form::is_valid`] and merged by [`Form::set_value`]. A fully-passing
/// validation wipes it, so state does not leak into the next cycle; a
/// failing validation retains it, so the caller can re-render the form
/// pre-filled with the rejected input.
#[derive(Debug, Default)]
struct FormState {
    data: HashMap<String, Value>,
    errors: HashMap<String, String>,
}

/// A declarative form: normalized schema, current values, current errors.
#[derive(Debug)]
pub struct Form {
    schema: FormSchema,
    state: FormState,
}

impl Form {
    /// Creates a form over the given schema, installing the built-in
    /// wildcard renderers unless the schema already carries its own
    /// `"*"` entries.
    pub fn new(mut schema: FormSchema) -> Self {
        schema.install_builtin_renderers();
        Self {
            schema,
            state: FormState::default(),
        }
    }

    /// Loads a schema from a JSON document and wraps it in a form.
    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        Ok(Self::new(FormSchema::from_json(raw)?))
    }

    /// The normalized schema.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// All display groups, in declaration order.
    pub fn groups(&self) -> &IndexMap<String, GroupDef> {
        &self.schema.groups
    }

    /// One display group by name.
    pub fn group(&self, name: &str) -> Option<&GroupDef> {
        self.schema.groups.get(name)
    }

    /// All element definitions, in declaration order.
    pub fn elements(&self) -> &IndexMap<String, ElementDef> {
        &self.schema.elements
    }

    /// One element definition by name.
    pub fn element(&self, name: &str) -> Option<&ElementDef> {
        self.schema.elements.get(name)
    }

    /// Replaces the held values wholesale.
    pub fn set_data(&mut self, data: HashMap<String, Value>) {
        self.state.data = data;
    }

    /// The currently held values.
    pub fn data(&self) -> &HashMap<String, Value> {
        &self.state.data
    }

    /// Sets one held value, keeping the rest.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.state.data.insert(name.into(), value.into());
    }

    /// The currently held value for an element, if any.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.state.data.get(name)
    }

    /// The error map from the most recent validation pass.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.state.errors
    }

    /// The recorded error for an element, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.state.errors.get(name).map(String::as_str)
    }

    /// A read-only view of this form for callbacks and templates.
    pub fn context(&self) -> FormContext<'_> {
        FormContext::new(&self.schema, &self.state.data, &self.state.errors)
    }

    /// Validates a submission against the schema.
    ///
    /// Stores `data` as the held values (full replace), clears the error
    /// map, and walks the elements in declaration order (see
    /// [`validation`] for the per-element rules). On an overall pass the
    /// held values are wiped; on a failure they are retained for
    /// re-rendering and the error map holds one message per failing
    /// element.
    pub fn is_valid(&mut self, data: HashMap<String, Value>) -> bool {
        self.state.data = data;
        self.state.errors.clear();

        let failures = validation::run_pipeline(&self.schema, &self.state.data);
        let valid = failures.is_empty();
        for (name, message) in failures {
            self.state.errors.insert(name, message);
        }

        if valid {
            self.state.data.clear();
        }
        tracing::debug!(
            valid,
            errors = self.state.errors.len(),
            "form validation finished"
        );
        valid
    }

    /// Renders the label of one element. Unknown names yield the empty
    /// string.
    pub fn render_label(&self, name: &str) -> String {
        self.schema.elements.get(name).map_or_else(
            || {
                tracing::trace!(element = %name, "unknown element skipped");
                String::new()
            },
            |element| render::render_label(name, element, &self.context()),
        )
    }

    /// Renders the input markup of one element. Unknown names yield the
    /// empty string.
    pub fn render_element(&self, name: &str) -> String {
        self.schema.elements.get(name).map_or_else(
            || {
                tracing::trace!(element = %name, "unknown element skipped");
                String::new()
            },
            |element| render::render_element(name, element, &self.context()),
        )
    }

    /// Renders label and input for each named element, in the given
    /// order, with the hints' css classes applied to a copy of each
    /// element. Unknown names are skipped silently; the stored schema is
    /// never mutated.
    pub fn render_many<I, S>(&self, names: I, hints: &LayoutHints) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let form = self.context();
        let mut html = String::new();
        for name in names {
            let name = name.as_ref();
            let Some(element) = self.schema.elements.get(name) else {
                tracing::trace!(element = %name, "unknown element skipped");
                continue;
            };
            let element = render::apply_hints(element, hints);
            html.push_str(&render::render_label(name, &element, &form));
            html.push_str(&render::render_element(name, &element, &form));
        }
        html
    }

    /// Renders a display group: a `<fieldset>` carrying the group class,
    /// a `<legend>` heading when the group is labeled, and the group's
    /// elements via [`Form::render_many`]. Unknown group names yield the
    /// empty string; a `"*"` entry in the element list is not expanded
    /// and skips like any unknown name.
    pub fn render_group(&self, name: &str, hints: &LayoutHints) -> String {
        let Some(group) = self.schema.groups.get(name) else {
            tracing::trace!(group = %name, "unknown group skipped");
            return String::new();
        };
        let mut html = String::from("<fieldset");
        if !group.class.is_empty() {
            html.push_str(&format!(r#" class="{}""#, group.class));
        }
        html.push('>');
        if !group.label.is_empty() {
            html.push_str(&format!("<legend>{}</legend>", group.label));
        }
        html.push_str(&self.render_many(&group.elements, hints));
        html.push_str("</fieldset>");
        html
    }
}
