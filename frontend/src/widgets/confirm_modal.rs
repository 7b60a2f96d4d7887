use dioxus::prelude::*;
use tallybook_core::SubmitStatus;

use crate::theme::{AppColors, GHOST_BUTTON};
use crate::widgets::{GradientCard, SubmitBanner};

/// Destructive-action dialog. The banner follows the confirm's submit status.
#[component]
pub fn ConfirmModal(
    is_dark: bool,
    title: String,
    message: String,
    status: SubmitStatus,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let danger = AppColors::error(is_dark);
    let busy = status == SubmitStatus::Submitting;
    let done = matches!(status, SubmitStatus::Success(_));
    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 10;",
            div { style: "width: 420px; max-width: 90vw;",
                GradientCard { is_dark,
                    h2 { style: "margin: 0 0 8px; font-size: 1.1rem;", "{title}" }
                    p { style: "opacity: 0.85; margin: 0 0 16px;", "{message}" }
                    SubmitBanner { is_dark, status }
                    div { style: "display: flex; justify-content: flex-end; gap: 8px;",
                        button {
                            style: GHOST_BUTTON,
                            disabled: busy || done,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            disabled: busy || done,
                            onclick: move |_| on_confirm.call(()),
                            style: "padding: 8px 14px; border-radius: 8px; border: none; background: {danger}; color: white; cursor: pointer;",
                            if busy { "Deleting…" } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
