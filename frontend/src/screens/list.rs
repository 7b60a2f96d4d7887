use dioxus::prelude::*;
use tallybook_core::{confirm_in, EntityKind, FilterValues, FormModal, ListView, RecordId};

use crate::app::AppContext;
use crate::form_signal::SignalForm;
use crate::nav::delete_prompt;
use crate::theme::{AppColors, INPUT_STYLE};
use crate::widgets::{ConfirmModal, DataTable, FilterBar};

#[component]
pub fn ListScreen(is_dark: bool, kind: EntityKind) -> Element {
    let ctx = use_context::<AppContext>();
    let _ = *ctx.revision.read();
    let auto_close = ctx.config.auto_close;
    let mut list = use_signal(move || ListView::new(kind));
    let mut values = use_signal(FilterValues::new);
    let mut delete_form = use_signal(move || {
        FormModal::new(format!("Delete {}", kind.singular()), Vec::new())
            .with_auto_close(auto_close)
            .with_success_message(format!("{} deleted", kind.singular()))
    });
    let mut prompt = use_signal(String::new);

    let rows = ctx.stores.rows(kind, &values.read(), list.read().search());
    let columns: Vec<String> = list.read().columns().iter().map(|c| c.to_string()).collect();
    let search = list.read().search().to_string();
    let confirming = delete_form.read().is_open();
    let delete_title = delete_form.read().title().to_string();
    let delete_status = delete_form.read().status().clone();

    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::surface(is_dark);
    let new_ctx = ctx.clone();
    let view_ctx = ctx.clone();
    let edit_ctx = ctx.clone();
    let delete_ctx = ctx.clone();
    let confirm_ctx = ctx.clone();

    rsx! {
        div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
            h1 { style: "margin: 0; flex: 1;", "{kind.title()}" }
            input {
                r#type: "search",
                placeholder: "Search {kind.title().to_lowercase()}…",
                style: "{INPUT_STYLE} max-width: 260px;",
                value: "{search}",
                oninput: move |ev| list.write().set_search(ev.value()),
            }
            button {
                onclick: move |_| new_ctx.navigate(list.read().add_new_route()),
                style: "padding: 10px 16px; border-radius: 8px; border: none; background: {primary}; color: {on_primary}; font-weight: 600; cursor: pointer;",
                "+ New {kind.singular()}"
            }
        }
        FilterBar {
            is_dark,
            kind,
            on_change: move |next: FilterValues| values.set(next),
        }
        DataTable {
            is_dark,
            columns,
            rows,
            on_view: move |id: RecordId| view_ctx.navigate(list.read().view_route(&id)),
            on_edit: move |id: RecordId| edit_ctx.navigate(list.read().edit_route(&id)),
            on_delete: move |id: RecordId| {
                let number = delete_ctx.stores.number(kind, &id).unwrap_or_else(|| id.to_string());
                prompt.set(delete_prompt(kind, &number));
                list.write().request_delete(id);
                delete_form.write().open();
            },
        }
        if confirming {
            ConfirmModal {
                is_dark,
                title: delete_title,
                message: prompt(),
                status: delete_status,
                on_cancel: move |_| {
                    delete_form.write().close();
                    list.write().cancel_delete();
                },
                on_confirm: move |_| {
                    let ctx = confirm_ctx.clone();
                    let mut view = list.read().clone();
                    spawn(async move {
                        let mut cell = SignalForm(delete_form);
                        confirm_in(&mut cell, move || async move {
                            let removed = ctx.stores.confirm_delete(&mut view).await;
                            list.set(view);
                            if removed.is_ok() {
                                ctx.bump();
                            }
                            removed.map(|_| ())
                        })
                        .await;
                    });
                },
            }
        }
    }
}
