use dioxus::prelude::*;
use tallybook_core::format::format_money;
use tallybook_core::{CartEditor, Currency, LineField};

use crate::theme::{AppColors, GHOST_BUTTON, INPUT_STYLE};

const EDITABLE: [(LineField, &str, &str); 4] = [
    (LineField::Name, "Item", "text"),
    (LineField::Quantity, "Qty", "number"),
    (LineField::Rate, "Rate", "number"),
    (LineField::Discount, "Discount", "number"),
];

/// Editable line items; totals are recomputed from the editor on every render.
#[component]
pub fn CartTable(is_dark: bool, cart: Signal<CartEditor>, currency: Currency) -> Element {
    let mut cart = cart;
    let danger = AppColors::error(is_dark);
    let rows = cart.read().rows().to_vec();
    let total = cart.read().total();
    let cell = "padding: 6px 8px; border-bottom: 1px solid rgba(100,116,139,0.3);";

    rsx! {
        div { style: "margin: 16px 0;",
            h3 { style: "font-size: 1rem; margin: 0 0 8px;", "Items" }
            table { style: "width: 100%; border-collapse: collapse; font-size: 0.9rem;",
                thead {
                    tr {
                        for (_, label, _) in EDITABLE {
                            th { key: "{label}", style: "{cell} text-align: left;", "{label}" }
                        }
                        th { style: "{cell} text-align: right;", "Total" }
                        th { style: "{cell}", "" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            for (field, label, input_type) in EDITABLE {
                                {
                                    let id = row.id.clone();
                                    rsx! {
                                        td { key: "{label}", style: "{cell}",
                                            input {
                                                r#type: input_type,
                                                style: INPUT_STYLE,
                                                value: "{row.get(field)}",
                                                oninput: move |ev| {
                                                    cart.write().change(&id, field, &ev.value());
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                            td { style: "{cell} text-align: right; white-space: nowrap;",
                                "{format_money(row.total(), currency)}"
                            }
                            td { style: "{cell}",
                                {
                                    let id = row.id.clone();
                                    rsx! {
                                        button {
                                            title: "Remove row",
                                            style: "background: none; border: none; color: {danger}; cursor: pointer;",
                                            onclick: move |_| cart.write().remove_row(&id),
                                            "✕"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 10px;",
                button {
                    style: GHOST_BUTTON,
                    onclick: move |_| {
                        cart.write().add_row();
                    },
                    "+ Add row"
                }
                div { style: "font-weight: 600;", "Total: {format_money(total, currency)}" }
            }
        }
    }
}
