//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Alert, Field};
use ui::context::{self, use_api, use_portal};
use ui::Page;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let form = portal.read().login.clone();
    let pending = form.op.is_pending();

    let handle_login = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            context::login(portal, client.clone());
        }
    };

    rsx! {
        main {
            div {
                class: "card form-card",
                h1 { "Sign in" }
                p { class: "muted", "Access your cases and appointments" }

                form {
                    onsubmit: handle_login,

                    if let Some(err) = form.op.error() {
                        Alert { message: err.clone() }
                    }

                    Field {
                        label: "Email",
                        input_type: "email",
                        required: true,
                        value: form.email.clone(),
                        oninput: move |v: String| portal.write().login.email = v,
                    }
                    Field {
                        label: "Password",
                        input_type: "password",
                        required: true,
                        value: form.password.clone(),
                        oninput: move |v: String| portal.write().login.password = v,
                    }

                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: pending,
                        if pending { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "muted",
                    "Don't have an account? "
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| context::go_to(portal, client.clone(), Page::Register),
                        "Register"
                    }
                }
            }
        }
    }
}
