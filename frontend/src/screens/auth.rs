use dioxus::prelude::*;
use tallybook_core::{submit_in, FieldSpec, FormModal, Route, SubmitOutcome, Validator};

use crate::app::AppContext;
use crate::form_signal::SignalForm;
use crate::theme::AppColors;
use crate::widgets::{FieldInput, GradientBackground, GradientCard, SubmitBanner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn fields(self) -> Vec<FieldSpec> {
        let mut fields = Vec::new();
        if self == AuthMode::Signup {
            fields.push(FieldSpec::text("company", "Company").required());
        }
        fields.push(FieldSpec::email("email", "Email").required().placeholder("you@company.com"));
        fields.push(
            FieldSpec::password("password", "Password")
                .required()
                .validate(Validator::MinLength(8)),
        );
        fields
    }

    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Signup => "Create account",
        }
    }
}

/// Demo sign-in: any well-formed credentials open the dashboard.
#[component]
pub fn AuthScreen(is_dark: bool, mode: AuthMode) -> Element {
    let ctx = use_context::<AppContext>();
    let auto_close = ctx.config.auto_close;
    let mut form = use_signal(move || {
        let mut form = FormModal::new(mode.title(), mode.fields())
            .with_auto_close(auto_close)
            .with_success_message("Welcome to Tallybook");
        form.open();
        form
    });

    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::surface(is_dark);
    let fields = form.read().fields().to_vec();
    let status = form.read().status().clone();
    let busy = form.read().is_submitting();
    let (switch_label, switch_to) = match mode {
        AuthMode::Login => ("No account yet? Create one", Route::Signup),
        AuthMode::Signup => ("Already registered? Sign in", Route::Login),
    };
    let submit_ctx = ctx.clone();
    let switch_ctx = ctx.clone();

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let ctx = submit_ctx.clone();
        spawn(async move {
            let mut cell = SignalForm(form);
            let outcome = submit_in(&mut cell, |_| async { Ok::<(), String>(()) }).await;
            if outcome == SubmitOutcome::Succeeded {
                ctx.navigate(Route::Dashboard);
            }
        });
    };

    rsx! {
        GradientBackground { is_dark,
            div { style: "max-width: 400px; margin: 0 auto; padding: 64px 24px;",
                h1 { style: "text-align: center; font-size: 1.5rem; margin-bottom: 24px;", "{mode.title()}" }
                GradientCard { is_dark,
                    form { onsubmit: on_submit,
                        for spec in fields {
                            {
                                let id = spec.id;
                                let value = form.read().value(id).to_string();
                                let error = form.read().errors().get(id).map(String::from);
                                rsx! {
                                    FieldInput {
                                        key: "{id}",
                                        is_dark,
                                        spec,
                                        value,
                                        error,
                                        disabled: busy,
                                        on_input: move |text: String| form.write().set_value(id, text),
                                    }
                                }
                            }
                        }
                        SubmitBanner { is_dark, status }
                        button {
                            r#type: "submit",
                            disabled: busy,
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                            if busy { "Please wait…" } else { "{mode.title()}" }
                        }
                    }
                }
                button {
                    onclick: move |_| switch_ctx.navigate(switch_to.clone()),
                    style: "display: block; margin: 16px auto 0; background: none; border: none; color: {primary}; cursor: pointer;",
                    "{switch_label}"
                }
            }
        }
    }
}
