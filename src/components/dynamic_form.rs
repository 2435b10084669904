//! Dynamic Form - add form rendered from a field schema.
//!
//! Holds a [`FormModel`]; every keystroke updates exactly one draft entry.
//! Submitting hands the coerced payload to `on_submit` and clears the form.
//! A number field holding text that is not a number blocks the submit and
//! shows why, leaving the inputs as typed.

use dioxus::prelude::*;
use finexus_core::{FieldSchema, FormModel};
use finexus_ui::{Button, Input};
use serde_json::{Map, Value};

/// One rendered input.
struct InputView {
    field: FieldSchema,
    text: String,
    invalid: bool,
}

#[component]
pub fn DynamicForm(
    fields: Vec<FieldSchema>,
    cta: String,
    #[props(default = false)] disabled: bool,
    on_submit: EventHandler<Map<String, Value>>,
) -> Element {
    let mut form = use_signal(|| FormModel::new(fields.clone()));
    let mut problem: Signal<Option<String>> = use_signal(|| None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(payload) => {
                problem.set(None);
                on_submit.call(payload);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Form submission blocked");
                problem.set(Some(e.to_string()));
            }
        }
    };

    let inputs: Vec<InputView> = {
        let model = form.read();
        let invalid = model.draft().invalid_fields();
        model
            .fields()
            .iter()
            .map(|field| InputView {
                field: *field,
                text: model.draft().input_text(field.name).to_string(),
                invalid: invalid.contains(&field.name),
            })
            .collect()
    };

    rsx! {
        form { class: "add-form", onsubmit: submit,
            for input in inputs {
                {
                    let name = input.field.name;
                    rsx! {
                        Input {
                            key: "{name}",
                            id: format!("field-{}", name),
                            label: input.field.label.to_string(),
                            placeholder: input.field.placeholder.to_string(),
                            input_type: input.field.kind.input_type().to_string(),
                            value: input.text,
                            invalid: input.invalid,
                            oninput: move |raw: String| {
                                if let Err(e) = form.write().set(name, &raw) {
                                    tracing::warn!(field = name, error = %e, "Ignoring input");
                                }
                            }
                        }
                    }
                }
            }
            Button {
                button_type: "submit".to_string(),
                disabled: disabled,
                class: "form-submit".to_string(),
                "{cta}"
            }
        }
        if let Some(message) = problem() {
            p { class: "form-error", role: "alert", "{message}" }
        }
    }
}
