use dioxus::prelude::*;
use tallybook_core::detail::switch_to;
use tallybook_core::format::{format_amount, format_date, format_money};
use tallybook_core::{confirm_in, DetailState, EntityKind, FormModal, ListView, RecordId, Route, SubmitOutcome};

use crate::app::AppContext;
use crate::form_signal::SignalForm;
use crate::nav::delete_prompt;
use crate::theme::{spacing, AppColors, GHOST_BUTTON};
use crate::widgets::{ConfirmModal, GradientCard};

/// Master-detail page: sibling list on the left, the shown record on the right.
#[component]
pub fn DetailScreen(is_dark: bool, kind: EntityKind, id: RecordId) -> Element {
    let ctx = use_context::<AppContext>();
    let _ = *ctx.revision.read();
    let page = ctx.stores.detail_page(kind, &id, ctx.config.detail_fallback);
    let currency = ctx.config.currency;
    let mut show_json = use_signal(|| false);
    let auto_close = ctx.config.auto_close;
    let mut delete_form = use_signal(move || {
        FormModal::new(format!("Delete {}", kind.singular()), Vec::new())
            .with_auto_close(auto_close)
            .with_success_message(format!("{} deleted", kind.singular()))
    });
    let mut prompt = use_signal(String::new);

    let primary = AppColors::primary(is_dark);
    let card = AppColors::card(is_dark);

    let sidebar = rsx! {
        aside { style: "width: 260px; flex-shrink: 0; background: {card}; border-radius: 12px; padding: {spacing::SM}; max-height: 75vh; overflow: auto;",
            div { style: "font-weight: 600; padding: 8px;", "{kind.title()}" }
            for entry in page.sidebar.iter().cloned() {
                {
                    let ctx = ctx.clone();
                    let target = switch_to(kind, &entry.id);
                    let bg = if entry.selected { "rgba(94,234,212,0.15)" } else { "transparent" };
                    let border = if entry.selected { primary } else { "transparent" };
                    let party = entry.party.clone().unwrap_or_default();
                    let amount = format_money(entry.amount, currency);
                    rsx! {
                        button {
                            key: "{entry.id}",
                            onclick: move |_| ctx.navigate(target.clone()),
                            style: "display: block; width: 100%; text-align: left; padding: 8px; margin: 2px 0; border: none; border-left: 3px solid {border}; border-radius: 6px; background: {bg}; color: inherit; cursor: pointer;",
                            div { style: "display: flex; justify-content: space-between; font-size: 0.9rem;",
                                span { style: "font-weight: 600;", "{entry.number}" }
                                span { "{amount}" }
                            }
                            div { style: "font-size: 0.8rem; opacity: 0.7;", "{party}" }
                        }
                    }
                }
            }
        }
    };

    let Some(record) = page.record.clone() else {
        // An empty collection renders nothing.
        let DetailState::NotFound { requested } = &page.state else {
            return rsx! {};
        };
        let message = format!("{} {} not found", kind.singular(), requested);
        let ctx = ctx.clone();
        return rsx! {
            div { style: "display: flex; gap: {spacing::LG};",
                {sidebar}
                div { style: "flex: 1;",
                    p { style: "opacity: 0.8;", "{message}" }
                    button {
                        style: GHOST_BUTTON,
                        onclick: move |_| ctx.navigate(Route::List(kind)),
                        "Back to {kind.title().to_lowercase()}"
                    }
                }
            }
        };
    };

    let fallback_notice = match &page.state {
        DetailState::Fallback { requested } => Some(format!(
            "{} {} was not found; showing {} instead.",
            kind.singular(),
            requested,
            record.number
        )),
        _ => None,
    };
    let status_color = record
        .status
        .as_deref()
        .map(|s| AppColors::status(s, is_dark))
        .unwrap_or(AppColors::OUTLINE);
    let date = record.date.map(format_date).unwrap_or_default();
    let party = record.party.clone().unwrap_or_default();
    let total = format_money(record.amount, currency);
    let mail_href = record.mail.as_ref().map(|m| m.href());
    let items = page.items.clone();
    let delete_message = delete_prompt(kind, &record.number);

    let edit_ctx = ctx.clone();
    let confirm_ctx = ctx.clone();
    let record_id = record.id.clone();
    let edit_id = record.id.clone();

    rsx! {
        div { style: "display: flex; gap: {spacing::LG}; align-items: flex-start;",
            {sidebar}
            div { style: "flex: 1; min-width: 0;",
                if let Some(notice) = fallback_notice {
                    div { role: "status", style: "padding: 10px 14px; border-radius: 8px; border: 1px solid {AppColors::WARNING}; color: {AppColors::WARNING}; margin-bottom: 12px;",
                        "{notice}"
                    }
                }
                div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
                    h1 { style: "margin: 0; flex: 1;", "{record.number}" }
                    button {
                        style: GHOST_BUTTON,
                        onclick: move |_| edit_ctx.navigate(Route::Edit(kind, edit_id.clone())),
                        "Edit"
                    }
                    if let Some(href) = mail_href {
                        a { href: "{href}", style: "{GHOST_BUTTON} text-decoration: none;", "Send by email" }
                    }
                    button {
                        style: GHOST_BUTTON,
                        onclick: move |_| show_json.toggle(),
                        if show_json() { "Hide JSON" } else { "Show JSON" }
                    }
                    button {
                        style: "{GHOST_BUTTON} color: {AppColors::error(is_dark)};",
                        onclick: move |_| {
                            prompt.set(delete_message.clone());
                            delete_form.write().open();
                        },
                        "Delete"
                    }
                }
                GradientCard { is_dark,
                    div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                        div {
                            div { style: "font-size: 1.1rem; font-weight: 600;", "{party}" }
                            div { style: "opacity: 0.75; font-size: 0.9rem;", "{date}" }
                        }
                        div { style: "text-align: right;",
                            if let Some(status) = record.status.clone() {
                                span { style: "padding: 2px 10px; border-radius: 999px; border: 1px solid {status_color}; color: {status_color}; font-size: 0.8rem;", "{status}" }
                            }
                            div { style: "font-size: 1.4rem; font-weight: 700; margin-top: 6px;", "{total}" }
                        }
                    }
                    dl { style: "display: grid; grid-template-columns: 180px 1fr; gap: 6px 12px; margin: 16px 0 0;",
                        for (label, value) in record.fields.iter().cloned() {
                            dt { key: "{label}-k", style: "opacity: 0.7;", "{label}" }
                            dd { key: "{label}-v", style: "margin: 0;", "{value}" }
                        }
                    }
                }
                if !items.is_empty() {
                    GradientCard { is_dark, title: "Items".to_string(),
                        table { style: "width: 100%; border-collapse: collapse; font-size: 0.9rem;",
                            thead {
                                tr {
                                    th { style: "text-align: left;", "Item" }
                                    th { style: "text-align: right;", "Qty" }
                                    th { style: "text-align: right;", "Rate" }
                                    th { style: "text-align: right;", "Amount" }
                                }
                            }
                            tbody {
                                for (i, row) in items.rows.iter().enumerate() {
                                    tr { key: "{i}",
                                        td { "{row.name}" }
                                        td { style: "text-align: right;", "{row.quantity}" }
                                        td { style: "text-align: right;", "{format_amount(row.rate)}" }
                                        td { style: "text-align: right;", "{format_amount(row.amount)}" }
                                    }
                                }
                            }
                        }
                        div { style: "margin-top: 12px; margin-left: auto; width: 260px;",
                            div { style: "display: flex; justify-content: space-between;",
                                span { "Sub total" }
                                span { "{format_money(items.subtotal, currency)}" }
                            }
                            div { style: "display: flex; justify-content: space-between;",
                                span { "Discount" }
                                span { "-{format_money(items.discount, currency)}" }
                            }
                            div { style: "display: flex; justify-content: space-between; font-weight: 700; margin-top: 6px;",
                                span { "Balance due" }
                                span { "{format_money(items.balance_due, currency)}" }
                            }
                        }
                    }
                }
                if show_json() {
                    pre { style: "background: {card}; padding: 12px; border-radius: 8px; overflow: auto; font-size: 0.8rem;",
                        "{record.json}"
                    }
                }
            }
        }
        if delete_form.read().is_open() {
            ConfirmModal {
                is_dark,
                title: delete_form.read().title().to_string(),
                message: prompt(),
                status: delete_form.read().status().clone(),
                on_cancel: move |_| delete_form.write().close(),
                on_confirm: move |_| {
                    let ctx = confirm_ctx.clone();
                    let mut view = ListView::new(kind);
                    view.request_delete(record_id.clone());
                    spawn(async move {
                        let mut cell = SignalForm(delete_form);
                        let stores = ctx.stores.clone();
                        let outcome = confirm_in(&mut cell, move || async move {
                            stores.confirm_delete(&mut view).await.map(|_| ())
                        })
                        .await;
                        if outcome == SubmitOutcome::Succeeded {
                            ctx.bump();
                            ctx.navigate(Route::List(kind));
                        }
                    });
                },
            }
        }
    }
}
