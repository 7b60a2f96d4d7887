use dioxus::prelude::*;
use tallybook_core::SubmitStatus;

use crate::theme::AppColors;

/// Success or error line under a form; nothing while idle.
#[component]
pub fn SubmitBanner(is_dark: bool, status: SubmitStatus) -> Element {
    let (color, text) = match &status {
        SubmitStatus::Idle => return rsx! {},
        SubmitStatus::Submitting => (AppColors::OUTLINE, "Saving…".to_string()),
        SubmitStatus::Success(message) => (AppColors::success(is_dark), message.clone()),
        SubmitStatus::Error(message) => (AppColors::error(is_dark), message.clone()),
    };
    rsx! {
        div {
            role: "status",
            style: "padding: 10px 14px; border-radius: 8px; border: 1px solid {color}; color: {color}; margin: 12px 0; font-size: 0.9rem;",
            "{text}"
        }
    }
}
