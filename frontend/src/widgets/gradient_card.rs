use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn GradientCard(
    is_dark: bool,
    title: Option<String>,
    children: Element,
) -> Element {
    let surface = AppColors::card(is_dark);
    rsx! {
        div {
            style: "background: {surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM} 0; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
            if let Some(title) = title {
                h2 { style: "font-size: 1rem; margin: 0 0 12px;", "{title}" }
            }
            {children}
        }
    }
}
