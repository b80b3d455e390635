//! Built-in wildcard renderers.
//!
//! These are the `"*"` entries installed into every schema's renderer
//! registries (unless the caller supplies their own wildcard). The element
//! renderer dispatches on the element's type key; unknown and custom type
//! keys fall through to a generic `<input>` tag, so custom types work
//! without special-casing.
//!
//! No escaping is applied to labels, values, descriptions, or error text.
//! The engine emits markup exactly as configured; callers rendering
//! untrusted input must escape it in their own renderers.

use indexmap::IndexMap;

use crate::context::FormContext;
use crate::schema::ElementDef;
use crate::value::Value;

/// Default label renderer: a `<label>` tag tied to the element name.
///
/// The class list is the element's label class plus, for required
/// elements, the schema's required-class token.
pub fn default_label(name: &str, element: &ElementDef, form: &FormContext<'_>) -> String {
    let mut classes = element.label_class.clone();
    if element.required {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(form.required_class());
    }
    format!(
        r#"<label for="{name}"{}>{}</label>"#,
        class_attr(&classes),
        element.label
    )
}

/// Default element renderer: input markup, then a description block when
/// configured, then an error block when an error is recorded.
///
/// The display value is the currently held value for `name` when present,
/// otherwise the element's configured default.
pub fn default_element(name: &str, element: &ElementDef, form: &FormContext<'_>) -> String {
    let value = form.display_value(name, element);
    let mut html = match element.element_type.as_str() {
        "checkbox" => render_checkbox(name, element, value, form),
        "radio" => render_radio(name, element, value, form),
        "select" => render_select(name, element, value),
        "textarea" => render_textarea(name, element, value),
        // raw-markup escape hatch: the value is emitted verbatim
        "html" => value.to_string(),
        _ => render_input(name, element, value),
    };
    if !element.description.is_empty() {
        html.push_str(&format!(
            r#"<div class="{}">{}</div>"#,
            form.description_class(),
            element.description
        ));
    }
    if let Some(error) = form.error(name) {
        html.push_str(&format!(
            r#"<div class="{}">{error}</div>"#,
            form.error_class()
        ));
    }
    html
}

/// Formats an attributes map into ` key="value"` pairs in declaration
/// order.
fn render_attrs(attrs: &IndexMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{v}""#))
        .collect()
}

/// A ` class="..."` fragment, or nothing when the class list is empty.
fn class_attr(classes: &str) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(r#" class="{classes}""#)
    }
}

/// A ` placeholder="..."` fragment, or nothing when unset.
fn placeholder_attr(placeholder: &str) -> String {
    if placeholder.is_empty() {
        String::new()
    } else {
        format!(r#" placeholder="{placeholder}""#)
    }
}

/// Generic `<input>` for text, date, submit, button, and custom types.
fn render_input(name: &str, element: &ElementDef, value: &Value) -> String {
    format!(
        r#"<input type="{}" name="{name}" value="{value}"{}{}{} />"#,
        element.element_type,
        placeholder_attr(&element.placeholder),
        class_attr(&element.element_class),
        render_attrs(&element.attributes),
    )
}

/// One checkbox input per option, named `{name}[]`, joined by the
/// schema's input separator. A checkbox is checked when the value
/// contains its option key (sequence-aware).
fn render_checkbox(
    name: &str,
    element: &ElementDef,
    value: &Value,
    form: &FormContext<'_>,
) -> String {
    let inputs: Vec<String> = element
        .options
        .expand(element.option_as_value)
        .into_iter()
        .map(|(key, text)| {
            let checked = if value.contains(&key) { " checked" } else { "" };
            format!(
                r#"<input type="checkbox" name="{name}[]" value="{key}"{}{}{checked} /> {text}"#,
                class_attr(&element.element_class),
                render_attrs(&element.attributes),
            )
        })
        .collect();
    inputs.join(form.input_separator())
}

/// One radio input per option, all sharing `name`. Scalar equality only.
fn render_radio(name: &str, element: &ElementDef, value: &Value, form: &FormContext<'_>) -> String {
    let inputs: Vec<String> = element
        .options
        .expand(element.option_as_value)
        .into_iter()
        .map(|(key, text)| {
            let checked = if value.equals(&key) { " checked" } else { "" };
            format!(
                r#"<input type="radio" name="{name}" value="{key}"{}{}{checked} /> {text}"#,
                class_attr(&element.element_class),
                render_attrs(&element.attributes),
            )
        })
        .collect();
    inputs.join(form.input_separator())
}

/// A `<select>` wrapping one `<option>` per expanded option.
fn render_select(name: &str, element: &ElementDef, value: &Value) -> String {
    let mut options = String::new();
    for (key, text) in element.options.expand(element.option_as_value) {
        let selected = if value.equals(&key) { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{key}"{selected}>{text}</option>"#
        ));
    }
    format!(
        r#"<select name="{name}"{}{}>{options}</select>"#,
        class_attr(&element.element_class),
        render_attrs(&element.attributes),
    )
}

/// A `<textarea>` with the value as inner text.
fn render_textarea(name: &str, element: &ElementDef, value: &Value) -> String {
    format!(
        r#"<textarea name="{name}"{}{}{}>{value}</textarea>"#,
        placeholder_attr(&element.placeholder),
        class_attr(&element.element_class),
        render_attrs(&element.attributes),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FormSchema, Options};
    use std::collections::HashMap;

    fn no_state() -> (HashMap<String, Value>, HashMap<String, String>) {
        (HashMap::new(), HashMap::new())
    }

    #[test]
    fn test_label_basic() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text").label("First name");
        let html = default_label("first_name", &element, &form);
        assert_eq!(html, r#"<label for="first_name">First name</label>"#);
    }

    #[test]
    fn test_label_required_appends_class() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);

        let element = ElementDef::new("text").label("Name").required(true);
        let html = default_label("name", &element, &form);
        assert!(html.contains(r#"class="required""#));

        let element = element.label_class("col-form-label");
        let html = default_label("name", &element, &form);
        assert!(html.contains(r#"class="col-form-label required""#));
    }

    #[test]
    fn test_label_class_without_required() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text").label("Name").label_class("lbl");
        let html = default_label("name", &element, &form);
        assert!(html.contains(r#"class="lbl""#));
        assert!(!html.contains("required"));
    }

    #[test]
    fn test_generic_input_uses_default_value() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text").value("preset");
        let html = default_element("name", &element, &form);
        assert_eq!(html, r#"<input type="text" name="name" value="preset" />"#);
    }

    #[test]
    fn test_generic_input_prefers_held_data() {
        let schema = FormSchema::new();
        let mut data = HashMap::new();
        data.insert("name".to_string(), Value::from("submitted"));
        let errors = HashMap::new();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text").value("preset");
        let html = default_element("name", &element, &form);
        assert!(html.contains(r#"value="submitted""#));
    }

    #[test]
    fn test_generic_input_placeholder_and_class() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text")
            .placeholder("you@example.com")
            .element_class("form-control");
        let html = default_element("email", &element, &form);
        assert!(html.contains(r#"placeholder="you@example.com""#));
        assert!(html.contains(r#"class="form-control""#));
    }

    #[test]
    fn test_generic_input_attributes_in_declaration_order() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text")
            .attribute("data-live", "1")
            .attribute("autocomplete", "off");
        let html = default_element("name", &element, &form);
        assert!(html.contains(r#" data-live="1" autocomplete="off""#));
    }

    #[test]
    fn test_custom_type_falls_through_to_input() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("submit").value("Save");
        let html = default_element("go", &element, &form);
        assert!(html.contains(r#"<input type="submit""#));
        assert!(html.contains(r#"value="Save""#));
    }

    #[test]
    fn test_checkbox_checked_from_list_value() {
        let schema = FormSchema::new();
        let mut data = HashMap::new();
        data.insert("colors".to_string(), Value::from(vec!["a"]));
        let errors = HashMap::new();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("checkbox")
            .options(Options::from_pairs([("a", "A"), ("b", "B")]));
        let html = default_element("colors", &element, &form);
        assert!(html.contains(r#"<input type="checkbox" name="colors[]" value="a" checked /> A"#));
        assert!(html.contains(r#"<input type="checkbox" name="colors[]" value="b" /> B"#));
        assert!(html.contains("<br />"));
    }

    #[test]
    fn test_checkbox_checked_from_scalar_value() {
        let schema = FormSchema::new();
        let mut data = HashMap::new();
        data.insert("colors".to_string(), Value::from("b"));
        let errors = HashMap::new();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("checkbox")
            .options(Options::from_pairs([("a", "A"), ("b", "B")]));
        let html = default_element("colors", &element, &form);
        assert!(html.contains(r#"value="b" checked"#));
        assert!(!html.contains(r#"value="a" checked"#));
    }

    #[test]
    fn test_checkbox_custom_separator() {
        let schema = FormSchema::new().input_separator(" | ");
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("checkbox")
            .options(Options::from_list(["Red", "Green"]))
            .option_as_value(true);
        let html = default_element("colors", &element, &form);
        assert!(html.contains(" | "));
        assert!(!html.contains("<br />"));
        assert!(html.contains(r#"value="Red""#));
    }

    #[test]
    fn test_radio_scalar_equality_only() {
        let schema = FormSchema::new();
        let mut data = HashMap::new();
        data.insert("pick".to_string(), Value::from("1"));
        let errors = HashMap::new();
        let form = FormContext::new(&schema, &data, &errors);
        let element =
            ElementDef::new("radio").options(Options::from_pairs([("1", "One"), ("2", "Two")]));
        let html = default_element("pick", &element, &form);
        assert!(html.contains(r#"<input type="radio" name="pick" value="1" checked /> One"#));
        assert!(html.contains(r#"<input type="radio" name="pick" value="2" /> Two"#));
        // radios are not name[]-suffixed
        assert!(!html.contains("pick[]"));
    }

    #[test]
    fn test_radio_list_value_checks_nothing() {
        let schema = FormSchema::new();
        let mut data = HashMap::new();
        data.insert("pick".to_string(), Value::from(vec!["1"]));
        let errors = HashMap::new();
        let form = FormContext::new(&schema, &data, &errors);
        let element =
            ElementDef::new("radio").options(Options::from_pairs([("1", "One"), ("2", "Two")]));
        let html = default_element("pick", &element, &form);
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_select_marks_selected() {
        let schema = FormSchema::new();
        let mut data = HashMap::new();
        data.insert("gender".to_string(), Value::from("f"));
        let errors = HashMap::new();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("select")
            .options(Options::from_pairs([("m", "Male"), ("f", "Female")]));
        let html = default_element("gender", &element, &form);
        assert!(html.starts_with(r#"<select name="gender">"#));
        assert!(html.contains(r#"<option value="m">Male</option>"#));
        assert!(html.contains(r#"<option value="f" selected>Female</option>"#));
        assert!(html.ends_with("</select>"));
    }

    #[test]
    fn test_textarea_value_as_inner_text() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("textarea")
            .value("Hello world")
            .placeholder("Say something");
        let html = default_element("bio", &element, &form);
        assert_eq!(
            html,
            r#"<textarea name="bio" placeholder="Say something">Hello world</textarea>"#
        );
    }

    #[test]
    fn test_html_type_is_verbatim_passthrough() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("html").value("<b>hi</b>");
        let html = default_element("blurb", &element, &form);
        assert_eq!(html, "<b>hi</b>");
    }

    #[test]
    fn test_description_block_appended() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text").description("We never share this.");
        let html = default_element("email", &element, &form);
        assert!(html.ends_with(r#"<div class="description">We never share this.</div>"#));
    }

    #[test]
    fn test_error_block_appended_when_recorded() {
        let schema = FormSchema::new();
        let data = HashMap::new();
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), "Please enter required value".to_string());
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text");
        let html = default_element("email", &element, &form);
        assert!(html.ends_with(r#"<div class="error">Please enter required value</div>"#));

        // no error recorded for another element
        let html = default_element("other", &element, &form);
        assert!(!html.contains(r#"<div class="error">"#));
    }

    #[test]
    fn test_no_escaping_anywhere() {
        let schema = FormSchema::new();
        let (data, errors) = no_state();
        let form = FormContext::new(&schema, &data, &errors);
        let element = ElementDef::new("text").value(r#""><script>"#);
        let html = default_element("x", &element, &form);
        assert!(html.contains(r#"value=""><script>""#));
    }
}
