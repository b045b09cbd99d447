//! Registration page view.

use dioxus::prelude::*;
use ui::components::{Alert, Field};
use ui::context::{self, use_api, use_portal};
use ui::Page;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let form = portal.read().register.clone();
    let pending = form.op.is_pending();

    let handle_register = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            context::register(portal, client.clone());
        }
    };

    rsx! {
        main {
            div {
                class: "card form-card",
                h1 { "Create Account" }
                p { class: "muted", "Register to submit cases and book consultations" }

                form {
                    onsubmit: handle_register,

                    if let Some(err) = form.op.error() {
                        Alert { message: err.clone() }
                    }

                    Field {
                        label: "Full name",
                        required: true,
                        value: form.name.clone(),
                        oninput: move |v: String| portal.write().register.name = v,
                    }
                    Field {
                        label: "Email",
                        input_type: "email",
                        required: true,
                        value: form.email.clone(),
                        oninput: move |v: String| portal.write().register.email = v,
                    }
                    Field {
                        label: "Phone (optional)",
                        input_type: "tel",
                        value: form.phone.clone(),
                        oninput: move |v: String| portal.write().register.phone = v,
                    }
                    Field {
                        label: "Password",
                        input_type: "password",
                        required: true,
                        value: form.password.clone(),
                        oninput: move |v: String| portal.write().register.password = v,
                    }

                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: pending,
                        if pending { "Creating account..." } else { "Register" }
                    }
                }

                p {
                    class: "muted",
                    "Already have an account? "
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| context::go_to(portal, client.clone(), Page::Login),
                        "Sign in"
                    }
                }
            }
        }
    }
}
