//! # formwork
//!
//! A declarative, schema-driven form engine. A [`FormSchema`] describes a
//! form's elements, display groups, validation rules, and renderers; a
//! [`Form`] normalizes that schema against defaults, validates submitted
//! key-value data, and renders labels, inputs, descriptions, and errors
//! to markup strings.
//!
//! ## Architecture
//!
//! Three stages, in dependency order:
//!
//! 1. **Normalization** ([`schema`]) - a sparse schema (JSON or builder)
//!    merges against defaults at form, group, and element granularity and
//!    comes out fully populated. Schemas are immutable per form instance.
//! 2. **Validation** ([`validation`]) - each submission runs the
//!    required checks and custom [`Validator`]s in element declaration
//!    order, accumulating an error map, optionally stopping at the first
//!    failure.
//! 3. **Rendering** ([`render`], [`renderers`]) - each element resolves
//!    a label renderer and an element renderer through the chain
//!    *own override -> type-keyed -> wildcard -> empty* and invokes it with
//!    a read-only [`FormContext`].
//!
//! The engine emits markup strings only: no HTTP, no persistence, and no
//! output escaping. Escaping is the renderer layer's responsibility;
//! point untrusted input at custom renderers that escape.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use formwork::{ElementDef, Form, FormContext, FormSchema, Value, Verdict};
//!
//! fn letters_only(value: &Value, _form: &FormContext<'_>) -> Verdict {
//!     let name = value.to_string();
//!     Verdict::from(name.chars().all(|c| c.is_ascii_alphabetic() || c == ' '))
//! }
//!
//! let mut form = Form::new(FormSchema::new().element(
//!     "first_name",
//!     ElementDef::new("text")
//!         .label("First name")
//!         .required(true)
//!         .error_message("First name may only contain letters")
//!         .validator(letters_only),
//! ));
//!
//! let mut data = HashMap::new();
//! data.insert("first_name".to_string(), Value::from("John 2"));
//! assert!(!form.is_valid(data));
//! assert_eq!(
//!     form.error("first_name"),
//!     Some("First name may only contain letters")
//! );
//!
//! let mut data = HashMap::new();
//! data.insert("first_name".to_string(), Value::from("John"));
//! assert!(form.is_valid(data));
//! assert!(form.data().is_empty());
//!
//! let label = form.render_label("first_name");
//! assert_eq!(label, r#"<label for="first_name" class="required">First name</label>"#);
//! ```

pub mod context;
pub mod error;
pub mod form;
pub mod render;
pub mod renderers;
pub mod schema;
pub mod validation;
pub mod value;

pub use context::FormContext;
pub use error::SchemaError;
pub use form::Form;
pub use render::{LayoutHints, Renderer, WILDCARD};
pub use schema::{ElementDef, FormSchema, GroupDef, Options};
pub use validation::{Validator, Verdict};
pub use value::Value;
