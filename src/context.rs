//! Read-only form view passed to validators and renderers.
//!
//! Callbacks never receive the mutable [`Form`](crate::form::Form) itself.
//! [`FormContext`] exposes exactly the state a callback legitimately
//! needs: current values, recorded errors, and the schema's presentation
//! knobs.

use std::collections::HashMap;

use crate::schema::{ElementDef, FormSchema};
use crate::value::Value;

/// A borrowed, read-only view of a form's schema and state.
///
/// Handed to [`Validator`](crate::validation::Validator) and
/// [`Renderer`](crate::render::Renderer) implementations. During a
/// validation pass the error map is the (cleared) state from the start of
/// the pass, so validators never observe partial results of the pass that
/// is invoking them.
pub struct FormContext<'a> {
    schema: &'a FormSchema,
    data: &'a HashMap<String, Value>,
    errors: &'a HashMap<String, String>,
}

impl<'a> FormContext<'a> {
    pub(crate) fn new(
        schema: &'a FormSchema,
        data: &'a HashMap<String, Value>,
        errors: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            schema,
            data,
            errors,
        }
    }

    pub(crate) fn schema(&self) -> &FormSchema {
        self.schema
    }

    /// Returns the currently held value for an element, if any.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Returns the recorded error message for an element, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Resolves the value an element should display: the currently held
    /// value when present, otherwise the element's configured default.
    pub fn display_value<'e>(&'e self, name: &str, element: &'e ElementDef) -> &'e Value {
        self.data.get(name).unwrap_or(&element.value)
    }

    /// The css tag appended to labels of required elements.
    pub fn required_class(&self) -> &str {
        &self.schema.required_class
    }

    /// The css tag wrapping description text.
    pub fn description_class(&self) -> &str {
        &self.schema.description_class
    }

    /// The css tag wrapping error text.
    pub fn error_class(&self) -> &str {
        &self.schema.error_class
    }

    /// The joiner inserted between sibling inputs of multi-input elements.
    pub fn input_separator(&self) -> &str {
        &self.schema.input_separator
    }
}
