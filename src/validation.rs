//! Validation pipeline for submitted form data.
//!
//! Elements are checked in schema declaration order. For each element the
//! required check runs first: a required element with a blank value fails
//! with its configured message and its validator is never consulted. An
//! element without a validator passes for any value. Otherwise the
//! validator decides through a [`Verdict`].
//!
//! Failures accumulate into the form's error map unless
//! `break_chain_on_failure` is set, in which case the pass stops at the
//! first failing element and later elements are neither validated nor able
//! to report errors.

use std::collections::HashMap;

use crate::context::FormContext;
use crate::schema::{ElementDef, FormSchema};
use crate::value::Value;

/// Outcome of a custom validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value is acceptable.
    Pass,
    /// The value is rejected; the element's own `error_message` is
    /// reported.
    Fail,
    /// The value is rejected with a specific message. An empty message
    /// falls back to the element's `error_message`.
    FailWith(String),
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

/// A custom per-element validation rule.
///
/// Validators receive the submitted value and a read-only
/// [`FormContext`], so cross-field rules can look at other submitted
/// values. Plain functions with the matching signature implement this
/// trait automatically:
///
/// ```
/// use formwork::{FormContext, Value, Verdict};
///
/// fn not_bob(value: &Value, _form: &FormContext<'_>) -> Verdict {
///     Verdict::from(value.to_string() != "bob")
/// }
/// ```
///
/// Validators are assumed non-throwing; a panic inside a validator is a
/// programming error in the supplied callback and propagates to the
/// caller.
pub trait Validator: Send + Sync {
    /// Checks the submitted value.
    fn validate(&self, value: &Value, form: &FormContext<'_>) -> Verdict;
}

impl<F> Validator for F
where
    F: Fn(&Value, &FormContext<'_>) -> Verdict + Send + Sync,
{
    fn validate(&self, value: &Value, form: &FormContext<'_>) -> Verdict {
        self(value, form)
    }
}

/// Runs the validation pass over every element in declaration order.
///
/// Returns the accumulated `(name, message)` failures; empty means the
/// submission passed. The caller owns moving these into form state.
pub(crate) fn run_pipeline(
    schema: &FormSchema,
    data: &HashMap<String, Value>,
) -> Vec<(String, String)> {
    // Validators see the error map as of the start of the pass.
    let no_errors = HashMap::new();
    let form = FormContext::new(schema, data, &no_errors);

    let mut failures = Vec::new();
    for (name, element) in &schema.elements {
        let value = data.get(name).cloned().unwrap_or(Value::Null);
        if let Some(message) = check_element(element, &value, &form) {
            tracing::trace!(element = %name, %message, "element failed validation");
            failures.push((name.clone(), message));
            if schema.break_chain_on_failure {
                break;
            }
        }
    }
    failures
}

/// Checks one element, returning the failure message if it fails.
fn check_element(element: &ElementDef, value: &Value, form: &FormContext<'_>) -> Option<String> {
    if element.required && value.is_blank() {
        // The validator is not consulted for a required-but-blank value.
        return Some(element.error_message.clone());
    }
    let validator = element.validator.as_ref()?;
    match validator.validate(value, form) {
        Verdict::Pass => None,
        Verdict::Fail => Some(element.error_message.clone()),
        Verdict::FailWith(message) if message.is_empty() => Some(element.error_message.clone()),
        Verdict::FailWith(message) => Some(message),
    }
}
