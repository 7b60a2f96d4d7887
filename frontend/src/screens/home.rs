use dioxus::prelude::*;
use tallybook_core::Route;

use crate::app::AppContext;
use crate::theme::{AppColors, GHOST_BUTTON};
use crate::widgets::{GradientBackground, GradientCard};

const FEATURES: [(&str, &str); 3] = [
    ("Purchases", "Vendors, expenses, bills and recurring purchases in one place."),
    ("Sales", "Quotes, invoices, delivery challans and payments received."),
    ("Filters", "Narrow any list by status, date range, amount or category."),
];

#[component]
pub fn HomeScreen(is_dark: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::surface(is_dark);
    let login_ctx = ctx.clone();
    let signup_ctx = ctx.clone();

    rsx! {
        GradientBackground { is_dark,
            div { style: "max-width: 880px; margin: 0 auto; padding: 64px 24px;",
                div { style: "text-align: center; margin-bottom: 40px;",
                    h1 { style: "font-size: 2.5rem; margin: 0 0 12px; color: {primary};", "Tallybook" }
                    p { style: "font-size: 1.1rem; opacity: 0.85;", "Bookkeeping for small teams: track what you buy and what you sell." }
                    div { style: "display: flex; gap: 12px; justify-content: center; margin-top: 24px;",
                        button {
                            onclick: move |_| login_ctx.navigate(Route::Login),
                            style: "padding: 10px 20px; border-radius: 8px; border: none; background: {primary}; color: {on_primary}; font-weight: 600; cursor: pointer;",
                            "Sign in"
                        }
                        button {
                            style: GHOST_BUTTON,
                            onclick: move |_| signup_ctx.navigate(Route::Signup),
                            "Create account"
                        }
                    }
                }
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                    for (title, blurb) in FEATURES {
                        GradientCard { key: "{title}", is_dark, title: title.to_string(),
                            p { style: "margin: 0; opacity: 0.85;", "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}
