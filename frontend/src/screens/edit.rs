use dioxus::prelude::*;
use tallybook_core::format::iso_date;
use tallybook_core::{submit_in, CartEditor, EntityKind, FieldKind, FormData, FormModal, RecordId, Route, SubmitOutcome};

use crate::app::{today, AppContext};
use crate::form_signal::SignalForm;
use crate::theme::{AppColors, GHOST_BUTTON};
use crate::widgets::{CartTable, FieldInput, GradientCard, SubmitBanner};

/// Values a blank form starts from: date fields default to today.
fn new_record_values(kind: EntityKind) -> FormData {
    let mut values = FormData::new();
    for field in kind.form_fields() {
        if field.kind == FieldKind::Date && field.id == "date" {
            values.set(field.id, iso_date(today()));
        }
    }
    values
}

/// Create (`id` is `None`) or edit a record. Kinds with line items get the cart editor under the fields.
#[component]
pub fn EditScreen(is_dark: bool, kind: EntityKind, #[props(!optional)] id: Option<RecordId>) -> Element {
    let ctx = use_context::<AppContext>();
    let existing = id.as_ref().map(|id| ctx.stores.form_values(kind, id));
    let missing = matches!(existing, Some(None));

    let title = match id {
        Some(_) => format!("Edit {}", kind.singular()),
        None => format!("New {}", kind.singular()),
    };
    let initial = existing.clone().flatten().unwrap_or_else(|| new_record_values(kind));
    let auto_close = ctx.config.auto_close;
    let form_title = title.clone();
    let mut form = use_signal(move || {
        let mut form = FormModal::new(form_title, kind.form_fields())
            .with_initial(initial)
            .with_auto_close(auto_close)
            .with_success_message(format!("{} saved", kind.singular()));
        form.open();
        form
    });
    let stores = ctx.stores.clone();
    let cart_id = id.clone();
    let cart = use_signal(move || match &cart_id {
        Some(id) => CartEditor::new(&stores.line_items(kind, id)),
        None => CartEditor::default(),
    });

    let back = match &id {
        Some(id) => Route::View(kind, id.clone()),
        None => Route::List(kind),
    };

    if missing {
        let requested = id.clone().map(|i| i.to_string()).unwrap_or_default();
        let ctx = ctx.clone();
        return rsx! {
            p { style: "opacity: 0.8;", "{kind.singular()} {requested} not found" }
            button {
                style: GHOST_BUTTON,
                onclick: move |_| ctx.navigate(Route::List(kind)),
                "Back to {kind.title().to_lowercase()}"
            }
        };
    }

    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::surface(is_dark);
    let fields = form.read().fields().to_vec();
    let status = form.read().status().clone();
    let busy = form.read().is_submitting();
    let save_ctx = ctx.clone();
    let cancel_ctx = ctx.clone();
    let save_id = id.clone();

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let items = cart.read().to_items();
        let ctx = save_ctx.clone();
        let id = save_id.clone();
        spawn(async move {
            let mut cell = SignalForm(form);
            let stores = ctx.stores.clone();
            let outcome = submit_in(&mut cell, move |data| async move {
                stores.save(kind, id, &data, items).await.map(|_| ())
            })
            .await;
            if outcome == SubmitOutcome::Succeeded {
                ctx.bump();
                ctx.navigate(Route::List(kind));
            }
        });
    };

    rsx! {
        h1 { style: "margin: 0 0 16px;", "{title}" }
        GradientCard { is_dark,
            form { onsubmit: on_submit,
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); column-gap: 16px;",
                    for spec in fields {
                        {
                            let field_id = spec.id;
                            let value = form.read().value(field_id).to_string();
                            let error = form.read().errors().get(field_id).map(String::from);
                            rsx! {
                                FieldInput {
                                    key: "{field_id}",
                                    is_dark,
                                    spec,
                                    value,
                                    error,
                                    disabled: busy,
                                    on_input: move |text: String| form.write().set_value(field_id, text),
                                }
                            }
                        }
                    }
                }
                if kind.has_line_items() {
                    CartTable { is_dark, cart, currency: ctx.config.currency }
                }
                SubmitBanner { is_dark, status }
                div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                    button {
                        r#type: "button",
                        style: GHOST_BUTTON,
                        disabled: busy,
                        onclick: move |_| {
                            form.write().close();
                            cancel_ctx.navigate(back.clone());
                        },
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        disabled: busy,
                        style: "padding: 8px 18px; border-radius: 8px; border: none; background: {primary}; color: {on_primary}; font-weight: 600; cursor: pointer;",
                        if busy { "Saving…" } else { "Save" }
                    }
                }
            }
        }
    }
}
