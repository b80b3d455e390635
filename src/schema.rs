//! Schema definitions and normalization.
//!
//! A form is described declaratively by a [`FormSchema`]: presentation
//! options, ordered display [`GroupDef`]s, ordered [`ElementDef`]s, and
//! type-keyed renderer registries. Schemas are data: a sparse JSON
//! document deserializes into a fully-populated schema because every
//! level carries its defaults (`requiredClass`, element `type`, group
//! `elements`, and so on), which is the normalization step. Programmatic
//! construction goes through consuming builders and produces the same
//! normalized shape.
//!
//! Referential integrity is deliberately not enforced: a group may name
//! elements that do not exist, and resolving an unknown name at render or
//! validation time yields empty output (silent skip on unknown name).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::SchemaError;
use crate::render::{Renderer, WILDCARD};
use crate::renderers;
use crate::validation::Validator;
use crate::value::Value;

/// Option entries for choice elements (checkbox, radio, select).
///
/// Configured either as an ordered `value -> display text` mapping or as a
/// plain list of display texts. [`Options::expand`] turns both shapes
/// into `(value, text)` pairs.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Options {
    /// Ordered mapping from submitted value to display text.
    Map(IndexMap<String, String>),
    /// Plain sequence of display texts.
    List(Vec<String>),
}

impl Default for Options {
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

impl Options {
    /// Builds option entries from `(value, text)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds option entries from a plain list of display texts.
    pub fn from_list<T: Into<String>>(texts: impl IntoIterator<Item = T>) -> Self {
        Self::List(texts.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if no options are configured.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Map(map) => map.is_empty(),
            Self::List(texts) => texts.is_empty(),
        }
    }

    /// Expands the configured options into ordered `(value, text)` pairs.
    ///
    /// With `option_as_value` the display text doubles as the submitted
    /// value (for the map shape, its display texts are used). A plain list
    /// without `option_as_value` is positionally keyed.
    pub fn expand(&self, option_as_value: bool) -> Vec<(String, String)> {
        match self {
            Self::Map(map) if option_as_value => {
                map.values().map(|t| (t.clone(), t.clone())).collect()
            }
            Self::Map(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Self::List(texts) if option_as_value => {
                texts.iter().map(|t| (t.clone(), t.clone())).collect()
            }
            Self::List(texts) => texts
                .iter()
                .enumerate()
                .map(|(i, t)| (i.to_string(), t.clone()))
                .collect(),
        }
    }
}

/// A named, ordered display grouping of element references.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupDef {
    /// Display heading. Empty means no heading is rendered.
    pub label: String,
    /// Css tag for the group container.
    pub class: String,
    /// Ordered element names. The literal `"*"` wildcard is passed
    /// through untouched; expansion is the caller's responsibility.
    pub elements: Vec<String>,
}

impl GroupDef {
    /// Creates an empty group definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display heading.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the css tag.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the ordered element name list.
    #[must_use]
    pub fn elements<T: Into<String>>(mut self, names: impl IntoIterator<Item = T>) -> Self {
        self.elements = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Complete definition of a single form element.
///
/// Every field has a default (see the crate-level options table), so a
/// sparse config entry comes out fully populated. Callback fields
/// (validator, renderer overrides) cannot come from config documents and
/// are attached through the builder methods.
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementDef {
    /// Human-readable label.
    pub label: String,
    /// The type key driving renderer dispatch ("text", "select",
    /// "checkbox", "radio", "textarea", "html", "submit", or any custom
    /// key).
    #[serde(rename = "type")]
    pub element_type: String,
    /// Default value shown before any submission.
    pub value: Value,
    /// Option entries for choice elements.
    pub options: Options,
    /// Treat option display texts as submitted values.
    pub option_as_value: bool,
    /// Description text rendered after the input.
    pub description: String,
    /// Placeholder attribute for text-like inputs.
    pub placeholder: String,
    /// Extra attributes emitted verbatim, in declaration order.
    pub attributes: IndexMap<String, String>,
    /// Whether validation runs for this element at all.
    pub required: bool,
    /// Message reported when the required check or a validator fails
    /// without a message of its own.
    pub error_message: String,
    /// Css tag for the label.
    pub label_class: String,
    /// Css tag for the input.
    pub element_class: String,
    /// Custom validator, run after the required check.
    #[serde(skip)]
    pub validator: Option<Arc<dyn Validator>>,
    /// Per-element label renderer override.
    #[serde(skip)]
    pub label_renderer: Option<Arc<dyn Renderer>>,
    /// Per-element element renderer override.
    #[serde(skip)]
    pub element_renderer: Option<Arc<dyn Renderer>>,
}

impl Default for ElementDef {
    fn default() -> Self {
        Self {
            label: String::new(),
            element_type: "text".to_string(),
            value: Value::String(String::new()),
            options: Options::default(),
            option_as_value: false,
            description: String::new(),
            placeholder: String::new(),
            attributes: IndexMap::new(),
            required: false,
            error_message: "Please enter required value".to_string(),
            label_class: String::new(),
            element_class: String::new(),
            validator: None,
            label_renderer: None,
            element_renderer: None,
        }
    }
}

impl fmt::Debug for ElementDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDef")
            .field("label", &self.label)
            .field("element_type", &self.element_type)
            .field("value", &self.value)
            .field("option_as_value", &self.option_as_value)
            .field("required", &self.required)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

impl ElementDef {
    /// Creates an element definition of the given type with all other
    /// fields at their defaults.
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            ..Self::default()
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the option entries.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Treats option display texts as submitted values.
    #[must_use]
    pub fn option_as_value(mut self, option_as_value: bool) -> Self {
        self.option_as_value = option_as_value;
        self
    }

    /// Sets the description text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the placeholder attribute.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Adds a verbatim attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets whether this element is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the default failure message.
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Sets the label css tag.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = class.into();
        self
    }

    /// Sets the input css tag.
    #[must_use]
    pub fn element_class(mut self, class: impl Into<String>) -> Self {
        self.element_class = class.into();
        self
    }

    /// Attaches a custom validator.
    #[must_use]
    pub fn validator<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Overrides the label renderer for this element only.
    #[must_use]
    pub fn label_renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.label_renderer = Some(Arc::new(renderer));
        self
    }

    /// Overrides the element renderer for this element only.
    #[must_use]
    pub fn element_renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.element_renderer = Some(Arc::new(renderer));
        self
    }
}

/// The normalized, per-instance-immutable description of a form.
///
/// Created once at construction (from JSON via [`FormSchema::from_json`]
/// or through the builder methods) and never mutated afterwards; all
/// mutable per-submission state lives on the owning
/// [`Form`](crate::form::Form).
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSchema {
    /// Css tag appended to required labels.
    pub required_class: String,
    /// Wrapper css tag for description text.
    pub description_class: String,
    /// Wrapper css tag for error text.
    pub error_class: String,
    /// Joiner between sibling inputs of multi-input elements.
    pub input_separator: String,
    /// Stop validating after the first failing element.
    pub break_chain_on_failure: bool,
    /// Ordered display groupings.
    pub groups: IndexMap<String, GroupDef>,
    /// Ordered element definitions. Iteration order is declaration order
    /// and drives the validation pass.
    pub elements: IndexMap<String, ElementDef>,
    /// Type-keyed label renderers. `"*"` is the wildcard fallback.
    #[serde(skip)]
    pub label_renderers: HashMap<String, Arc<dyn Renderer>>,
    /// Type-keyed element renderers. `"*"` is the wildcard fallback.
    #[serde(skip)]
    pub element_renderers: HashMap<String, Arc<dyn Renderer>>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self {
            required_class: "required".to_string(),
            description_class: "description".to_string(),
            error_class: "error".to_string(),
            input_separator: "<br />".to_string(),
            break_chain_on_failure: false,
            groups: IndexMap::new(),
            elements: IndexMap::new(),
            label_renderers: HashMap::new(),
            element_renderers: HashMap::new(),
        }
    }
}

impl fmt::Debug for FormSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSchema")
            .field("required_class", &self.required_class)
            .field("description_class", &self.description_class)
            .field("error_class", &self.error_class)
            .field("input_separator", &self.input_separator)
            .field("break_chain_on_failure", &self.break_chain_on_failure)
            .field("groups", &self.groups)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl FormSchema {
    /// Creates an empty schema with default presentation options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and normalizes a schema from a JSON document.
    ///
    /// Absent keys take their defaults at every level (form, group,
    /// element), and the built-in wildcard renderers are installed.
    /// Callback fields cannot be expressed in JSON; attach them to the
    /// returned schema before constructing a form.
    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        let mut schema: Self = serde_json::from_str(raw)?;
        schema.install_builtin_renderers();
        tracing::debug!(
            elements = schema.elements.len(),
            groups = schema.groups.len(),
            "loaded form schema"
        );
        Ok(schema)
    }

    /// Installs the built-in wildcard renderers unless the caller already
    /// supplied a `"*"` entry of their own. Type-specific entries are
    /// left alone and add to the wildcard rather than replacing it.
    pub(crate) fn install_builtin_renderers(&mut self) {
        if !self.label_renderers.contains_key(WILDCARD) {
            let builtin: Arc<dyn Renderer> = Arc::new(renderers::default_label);
            self.label_renderers.insert(WILDCARD.to_string(), builtin);
        }
        if !self.element_renderers.contains_key(WILDCARD) {
            let builtin: Arc<dyn Renderer> = Arc::new(renderers::default_element);
            self.element_renderers.insert(WILDCARD.to_string(), builtin);
        }
    }

    /// Sets the css tag appended to required labels.
    #[must_use]
    pub fn required_class(mut self, class: impl Into<String>) -> Self {
        self.required_class = class.into();
        self
    }

    /// Sets the wrapper css tag for description text.
    #[must_use]
    pub fn description_class(mut self, class: impl Into<String>) -> Self {
        self.description_class = class.into();
        self
    }

    /// Sets the wrapper css tag for error text.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the joiner between sibling inputs.
    #[must_use]
    pub fn input_separator(mut self, separator: impl Into<String>) -> Self {
        self.input_separator = separator.into();
        self
    }

    /// Stops validation at the first failing element.
    #[must_use]
    pub fn break_chain_on_failure(mut self, break_chain: bool) -> Self {
        self.break_chain_on_failure = break_chain;
        self
    }

    /// Declares an element. Declaration order is preserved.
    #[must_use]
    pub fn element(mut self, name: impl Into<String>, def: ElementDef) -> Self {
        self.elements.insert(name.into(), def);
        self
    }

    /// Declares a display group. Declaration order is preserved.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>, def: GroupDef) -> Self {
        self.groups.insert(name.into(), def);
        self
    }

    /// Registers a label renderer for a type key (or `"*"`).
    #[must_use]
    pub fn label_renderer<R: Renderer + 'static>(
        mut self,
        type_key: impl Into<String>,
        renderer: R,
    ) -> Self {
        self.label_renderers
            .insert(type_key.into(), Arc::new(renderer));
        self
    }

    /// Registers an element renderer for a type key (or `"*"`).
    #[must_use]
    pub fn element_renderer<R: Renderer + 'static>(
        mut self,
        type_key: impl Into<String>,
        renderer: R,
    ) -> Self {
        self.element_renderers
            .insert(type_key.into(), Arc::new(renderer));
        self
    }
}
