use dioxus::prelude::*;
use tallybook_core::{FieldKind, FieldSpec};

use crate::theme::{AppColors, INPUT_STYLE};

/// One labelled form control with its validation message underneath.
#[component]
pub fn FieldInput(
    is_dark: bool,
    spec: FieldSpec,
    value: String,
    #[props(!optional)] error: Option<String>,
    #[props(default)] disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let danger = AppColors::error(is_dark);
    let marker = if spec.required { " *" } else { "" };
    let placeholder = spec.placeholder.unwrap_or_default();
    let input_type = match spec.kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        _ => "text",
    };

    let control = match &spec.kind {
        FieldKind::TextArea => rsx! {
            textarea {
                id: spec.id,
                style: "{INPUT_STYLE} min-height: 72px;",
                placeholder,
                disabled,
                value: "{value}",
                oninput: move |ev| on_input.call(ev.value()),
            }
        },
        FieldKind::Select(options) => rsx! {
            select {
                id: spec.id,
                style: INPUT_STYLE,
                disabled,
                value: "{value}",
                onchange: move |ev| on_input.call(ev.value()),
                option { value: "", "Select…" }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        },
        _ => rsx! {
            input {
                id: spec.id,
                r#type: input_type,
                style: INPUT_STYLE,
                placeholder,
                disabled,
                value: "{value}",
                oninput: move |ev| on_input.call(ev.value()),
            }
        },
    };

    rsx! {
        div { style: "margin-bottom: 14px;",
            label { r#for: spec.id, style: "display: block; font-size: 0.85rem; margin-bottom: 4px; opacity: 0.85;",
                "{spec.label}{marker}"
            }
            {control}
            if let Some(message) = error {
                div { style: "color: {danger}; font-size: 0.8rem; margin-top: 4px;", "{message}" }
            }
        }
    }
}
