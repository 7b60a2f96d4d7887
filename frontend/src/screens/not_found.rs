use dioxus::prelude::*;
use tallybook_core::Route;

use crate::app::AppContext;
use crate::theme::AppColors;
use crate::widgets::GradientBackground;

#[component]
pub fn NotFoundScreen(is_dark: bool, path: String) -> Element {
    let ctx = use_context::<AppContext>();
    let primary = AppColors::primary(is_dark);
    rsx! {
        GradientBackground { is_dark,
            div { style: "max-width: 480px; margin: 0 auto; padding: 96px 24px; text-align: center;",
                h1 { style: "font-size: 3rem; margin: 0; color: {primary};", "404" }
                p { "Nothing lives at " code { "{path}" } "." }
                button {
                    onclick: move |_| ctx.navigate(Route::Dashboard),
                    style: "margin-top: 16px; background: none; border: none; color: {primary}; cursor: pointer; font-size: 1rem;",
                    "Back to dashboard"
                }
            }
        }
    }
}
