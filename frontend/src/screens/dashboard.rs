use dioxus::prelude::*;
use tallybook_core::format::{format_date, format_money};
use tallybook_core::Route;

use crate::app::{today, AppContext};
use crate::theme::AppColors;
use crate::widgets::GradientCard;

#[component]
pub fn DashboardScreen(is_dark: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let _ = *ctx.revision.read();
    let summary = ctx.stores.summary(today());
    let currency = ctx.config.currency;
    let primary = AppColors::primary(is_dark);
    let danger = AppColors::error(is_dark);

    let receivables = format_money(summary.receivables, currency);
    let payables = format_money(summary.payables, currency);

    rsx! {
        h1 { style: "margin: 0 0 16px;", "Dashboard" }
        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px;",
            GradientCard { is_dark, title: "Receivables".to_string(),
                p { style: "font-size: 1.5rem; font-weight: 700; margin: 0; color: {primary};", "{receivables}" }
                if summary.overdue_invoices > 0 {
                    p { style: "color: {danger}; margin: 6px 0 0;", "{summary.overdue_invoices} overdue invoice(s)" }
                }
            }
            GradientCard { is_dark, title: "Payables".to_string(),
                p { style: "font-size: 1.5rem; font-weight: 700; margin: 0;", "{payables}" }
                if summary.overdue_bills > 0 {
                    p { style: "color: {danger}; margin: 6px 0 0;", "{summary.overdue_bills} overdue bill(s)" }
                }
            }
        }
        GradientCard { is_dark, title: "Records".to_string(),
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 8px;",
                for (kind, count) in summary.counts.iter().copied() {
                    {
                        let ctx = ctx.clone();
                        rsx! {
                            button {
                                key: "{kind:?}",
                                onclick: move |_| ctx.navigate(Route::List(kind)),
                                style: "text-align: left; padding: 10px; border-radius: 8px; border: 1px solid {AppColors::OUTLINE}; background: transparent; color: inherit; cursor: pointer;",
                                div { style: "font-size: 0.8rem; opacity: 0.75;", "{kind.title()}" }
                                div { style: "font-size: 1.25rem; font-weight: 600;", "{count}" }
                            }
                        }
                    }
                }
            }
        }
        GradientCard { is_dark, title: "Upcoming recurring purchases".to_string(),
            if summary.upcoming.is_empty() {
                p { style: "opacity: 0.7; margin: 0;", "No active profiles." }
            }
            for upcoming in summary.upcoming.iter().cloned() {
                {
                    let ctx = ctx.clone();
                    let target = Route::View(tallybook_core::EntityKind::RecurringPurchase, upcoming.id.clone());
                    let when = format_date(upcoming.next_date);
                    let amount = format_money(upcoming.amount, currency);
                    rsx! {
                        div { key: "{upcoming.id}", style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid rgba(100,116,139,0.3);",
                            a {
                                href: "#",
                                style: "color: {primary}; text-decoration: none;",
                                onclick: move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    ctx.navigate(target.clone());
                                },
                                "{upcoming.profile_name}"
                            }
                            span { style: "opacity: 0.8;", "{upcoming.vendor_name}" }
                            span { "{when}" }
                            span { style: "font-weight: 600;", "{amount}" }
                        }
                    }
                }
            }
        }
    }
}
