use dioxus::prelude::*;
use tallybook_core::drain_logs;

use crate::app::AppContext;
use crate::nav::{breadcrumbs, is_active, nav_groups};
use crate::theme::{spacing, AppColors, GHOST_BUTTON};
use crate::widgets::GradientBackground;

const ACTIVITY_LINES: usize = 40;

/// Signed-in layout: sidebar navigation, breadcrumb bar and the page.
#[component]
pub fn AppShell(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let mut is_dark = ctx.is_dark;
    let dark = is_dark();
    let current = ctx.route.read().clone();
    let mut show_activity = use_signal(|| false);
    let mut activity = use_signal(Vec::<String>::new);

    // Pull core log lines whenever the stores change.
    let revision = ctx.revision;
    use_effect(move || {
        let _ = revision();
        let fresh = drain_logs();
        if !fresh.is_empty() {
            activity.with_mut(|lines| {
                lines.extend(fresh);
                let n = lines.len();
                if n > ACTIVITY_LINES {
                    lines.drain(0..n - ACTIVITY_LINES);
                }
            });
        }
    });

    let primary = AppColors::primary(dark);
    let card = AppColors::card(dark);
    let crumbs = breadcrumbs(&current);
    let lines = activity.read().clone();
    let reset_ctx = ctx.clone();
    let nav_ctx = ctx.clone();
    let crumb_ctx = ctx.clone();
    let logout_ctx = ctx.clone();

    rsx! {
        GradientBackground { is_dark: dark,
            div { style: "display: flex; min-height: 100vh;",
                nav { style: "width: {spacing::SIDEBAR_WIDTH}; flex-shrink: 0; padding: {spacing::MD}; background: {card}; border-right: 1px solid {AppColors::OUTLINE};",
                    div { style: "font-size: 1.25rem; font-weight: 700; color: {primary}; margin-bottom: {spacing::LG};", "Tallybook" }
                    for group in nav_groups() {
                        div { key: "{group.title}", style: "margin-bottom: {spacing::MD};",
                            div { style: "font-size: 0.75rem; text-transform: uppercase; opacity: 0.6; margin-bottom: {spacing::XS};", "{group.title}" }
                            for item in group.items {
                                {
                                    let active = is_active(&item.route, &current);
                                    let bg = if active { primary } else { "transparent" };
                                    let fg = if active { AppColors::surface(dark) } else { "inherit" };
                                    let target = item.route.clone();
                                    let nav_ctx = nav_ctx.clone();
                                    rsx! {
                                        button {
                                            key: "{item.route}",
                                            onclick: move |_| nav_ctx.navigate(target.clone()),
                                            style: "display: block; width: 100%; text-align: left; padding: 6px 10px; margin: 2px 0; border-radius: 6px; border: none; cursor: pointer; background: {bg}; color: {fg};",
                                            "{item.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { style: "flex: 1; min-width: 0; display: flex; flex-direction: column;",
                    div { style: "display: flex; align-items: center; gap: 12px; padding: 12px 24px; border-bottom: 1px solid {AppColors::OUTLINE};",
                        div { style: "flex: 1; font-size: 0.875rem; opacity: 0.8;",
                            for (i, (label, target)) in crumbs.into_iter().enumerate() {
                                if i > 0 {
                                    span { style: "margin: 0 6px;", "/" }
                                }
                                {match target {
                                    Some(target) => {
                                        let crumb_ctx = crumb_ctx.clone();
                                        rsx! {
                                            a {
                                                href: "#",
                                                style: "color: {primary}; text-decoration: none;",
                                                onclick: move |ev: MouseEvent| {
                                                    ev.prevent_default();
                                                    crumb_ctx.navigate(target.clone());
                                                },
                                                "{label}"
                                            }
                                        }
                                    }
                                    None => rsx! { span { "{label}" } },
                                }}
                            }
                        }
                        button {
                            style: GHOST_BUTTON,
                            onclick: move |_| show_activity.toggle(),
                            "Activity"
                        }
                        button {
                            style: GHOST_BUTTON,
                            onclick: move |_| {
                                reset_ctx.stores.reset();
                                reset_ctx.bump();
                            },
                            "Reset demo data"
                        }
                        button {
                            style: GHOST_BUTTON,
                            onclick: move |_| is_dark.toggle(),
                            if dark { "Light" } else { "Dark" }
                        }
                        button {
                            style: GHOST_BUTTON,
                            onclick: move |_| logout_ctx.navigate(tallybook_core::Route::Home),
                            "Sign out"
                        }
                    }
                    if show_activity() {
                        div { style: "padding: 8px 24px; font-family: ui-monospace, monospace; font-size: 0.75rem; max-height: 160px; overflow: auto; border-bottom: 1px solid {AppColors::OUTLINE};",
                            if lines.is_empty() {
                                div { style: "opacity: 0.6;", "No activity yet." }
                            }
                            for (i, line) in lines.iter().enumerate() {
                                div { key: "{i}", "{line}" }
                            }
                        }
                    }
                    main { style: "flex: 1; padding: {spacing::LG}; overflow: auto;",
                        {children}
                    }
                }
            }
        }
    }
}
