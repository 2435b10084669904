//! Labelled input field.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the new text on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Label shown above the input
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, number, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Marks the input as holding an invalid value
    #[props(default = false)]
    pub invalid: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Text input with an optional label.
///
/// Number inputs are rendered as plain text boxes with a numeric keyboard
/// hint so that whatever was typed stays visible, parseable or not.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         value: draft.read().input_text("value").to_string(),
///         oninput: move |s| set_field("value", s),
///         label: "Value".to_string(),
///         input_type: "number".to_string(),
///         placeholder: "1800".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| element_id(props.label.as_deref().unwrap_or("field")));
    let is_number = props.input_type == "number";
    let html_type = if is_number {
        "text".to_string()
    } else {
        props.input_type.clone()
    };
    let input_mode = if is_number { "decimal" } else { "text" };
    let input_class = if props.invalid {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{html_type}",
                "inputmode": "{input_mode}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                "aria-invalid": if props.invalid { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Derive an element id from a label: lowercase, alphanumerics joined by `-`.
pub fn element_id(label: &str) -> String {
    let slug: Vec<String> = label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    format!("input-{}", slug.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_from_label() {
        assert_eq!(element_id("Name/Ticker"), "input-name-ticker");
        assert_eq!(element_id("Filed On (YYYY-MM-DD)"), "input-filed-on-yyyy-mm-dd");
        assert_eq!(element_id(""), "input-");
    }
}
