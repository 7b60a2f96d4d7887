use dioxus::prelude::*;
use tallybook_core::{RecordId, TableRow};

use crate::theme::AppColors;

/// List table with per-row view/edit/delete actions.
#[component]
pub fn DataTable(
    is_dark: bool,
    columns: Vec<String>,
    rows: Vec<TableRow>,
    on_view: EventHandler<RecordId>,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let primary = AppColors::primary(is_dark);
    let danger = AppColors::error(is_dark);
    let cell = "padding: 10px 12px; border-bottom: 1px solid rgba(100,116,139,0.3); text-align: left;";

    if rows.is_empty() {
        return rsx! {
            p { style: "opacity: 0.7; padding: 24px 0;", "No records match." }
        };
    }

    rsx! {
        table { style: "width: 100%; border-collapse: collapse; font-size: 0.9rem;",
            thead {
                tr {
                    for column in columns.iter() {
                        th { key: "{column}", style: "{cell} font-weight: 600; opacity: 0.8;", "{column}" }
                    }
                    th { style: "{cell}", "" }
                }
            }
            tbody {
                for row in rows {
                    {
                        let view_id = row.id.clone();
                        let edit_id = row.id.clone();
                        let delete_id = row.id.clone();
                        rsx! {
                            tr { key: "{row.id}",
                                for (i, value) in row.cells.iter().enumerate() {
                                    {
                                        let view_id = view_id.clone();
                                        rsx! {
                                            td { key: "{i}", style: "{cell}",
                                                if i == 1 {
                                                    a {
                                                        href: "#",
                                                        style: "color: {primary}; text-decoration: none;",
                                                        onclick: move |ev: MouseEvent| {
                                                            ev.prevent_default();
                                                            on_view.call(view_id.clone());
                                                        },
                                                        "{value}"
                                                    }
                                                } else {
                                                    "{value}"
                                                }
                                            }
                                        }
                                    }
                                }
                                td { style: "{cell} white-space: nowrap;",
                                    button {
                                        style: "background: none; border: none; color: {primary}; cursor: pointer;",
                                        onclick: move |_| on_edit.call(edit_id.clone()),
                                        "Edit"
                                    }
                                    button {
                                        style: "background: none; border: none; color: {danger}; cursor: pointer;",
                                        onclick: move |_| on_delete.call(delete_id.clone()),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
