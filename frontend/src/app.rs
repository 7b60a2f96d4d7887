use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tallybook_core::{Config, Route, Stores};

use crate::screens::{
    AuthMode, AuthScreen, DashboardScreen, DetailScreen, EditScreen, HomeScreen, ListScreen, NotFoundScreen,
};
use crate::widgets::AppShell;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Set once from `main` before launch; later calls are ignored.
pub fn set_config(config: Config) {
    let _ = CONFIG.set(config);
}

/// Settings handed over by `main`, or the defaults. Browser builds keep the
/// simulated latency and auto-close delay too.
pub fn app_config() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Shared by every screen through context.
#[derive(Clone)]
pub struct AppContext {
    pub stores: Stores,
    pub config: Config,
    pub route: Signal<Route>,
    /// Bumped after every store mutation so readers re-render.
    pub revision: Signal<u64>,
    pub is_dark: Signal<bool>,
}

impl AppContext {
    pub fn navigate(&self, route: Route) {
        let mut target = self.route;
        target.set(route);
    }

    pub fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn App() -> Element {
    let route = use_signal(|| Route::Home);
    let revision = use_signal(|| 0u64);
    let is_dark = use_signal(|| true);
    let ctx = use_context_provider(|| {
        let config = app_config();
        AppContext {
            stores: Stores::seeded(&config),
            config,
            route,
            revision,
            is_dark,
        }
    });

    let dark = *ctx.is_dark.read();
    let current = ctx.route.read().clone();
    let current_screen = match current.clone() {
        Route::Home => rsx! { HomeScreen { is_dark: dark } },
        Route::Login => {
            let auth_key = "login";
            rsx! { AuthScreen { key: "{auth_key}", is_dark: dark, mode: AuthMode::Login } }
        }
        Route::Signup => {
            let auth_key = "signup";
            rsx! { AuthScreen { key: "{auth_key}", is_dark: dark, mode: AuthMode::Signup } }
        }
        Route::Dashboard => rsx! {
            AppShell { DashboardScreen { is_dark: dark } }
        },
        Route::List(kind) => rsx! {
            AppShell { ListScreen { key: "{kind:?}", is_dark: dark, kind } }
        },
        Route::New(kind) => rsx! {
            AppShell { EditScreen { key: "{current}", is_dark: dark, kind, id: None } }
        },
        Route::Edit(kind, id) => rsx! {
            AppShell { EditScreen { key: "{current}", is_dark: dark, kind, id: Some(id) } }
        },
        Route::View(kind, id) => rsx! {
            AppShell { DetailScreen { key: "{current}", is_dark: dark, kind, id } }
        },
        Route::NotFound(path) => rsx! { NotFoundScreen { is_dark: dark, path } },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}
