use dioxus::prelude::*;

use crate::context::{self, use_api, use_portal};
use crate::i18n::{t, Label, Language};
use crate::icons::{FaBars, FaScaleBalanced, FaXmark};
use crate::route::{Page, Viewer};
use crate::Icon;

/// Top navigation: brand, page links, session buttons and the language picker.
/// On narrow screens the links collapse behind a menu toggle.
#[component]
pub fn Navbar() -> Element {
    let mut portal = use_portal();
    let client = use_api();

    let state = portal.read();
    let lang = state.language();
    let viewer = state.viewer();
    let menu_open = state.menu_open;
    let user_name = state.user().map(|u| u.display_name().to_string());
    drop(state);

    let link = {
        let client = client.clone();
        move |page: Page, label: Label| {
            let client = client.clone();
            let text = t(lang, label);
            rsx! {
                button {
                    class: "nav-link",
                    onclick: move |_| context::go_to(portal, client.clone(), page),
                    "{text}"
                }
            }
        }
    };
    let logout_text = t(lang, Label::Logout);
    let register_text = t(lang, Label::Register);

    rsx! {
        nav {
            class: "navbar",
            button {
                class: "brand",
                onclick: {
                    let client = client.clone();
                    move |_| context::go_to(portal, client.clone(), Page::Home)
                },
                Icon { icon: FaScaleBalanced, width: 22, height: 22 }
                span { "Union Law Firm" }
            }
            button {
                class: "menu-toggle",
                aria_label: "Toggle menu",
                onclick: move |_| portal.write().toggle_menu(),
                if menu_open {
                    Icon { icon: FaXmark, width: 20, height: 20 }
                } else {
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
            }
            div {
                class: if menu_open { "nav-links open" } else { "nav-links" },
                {link(Page::Home, Label::Home)}
                {link(Page::About, Label::About)}
                {link(Page::Videos, Label::Videos)}
                {link(Page::Contact, Label::Contact)}
                if viewer.is_authenticated() {
                    {link(Page::SubmitCase, Label::SubmitCase)}
                    {link(Page::Booking, Label::BookConsultation)}
                    {link(Page::Dashboard, Label::Dashboard)}
                    if viewer == Viewer::Admin {
                        {link(Page::Admin, Label::Admin)}
                    }
                    if let Some(name) = user_name {
                        span { class: "nav-user", "{name}" }
                    }
                    button {
                        class: "nav-link nav-logout",
                        onclick: move |_| context::logout(portal),
                        "{logout_text}"
                    }
                } else {
                    {link(Page::Login, Label::Login)}
                    button {
                        class: "nav-cta",
                        onclick: {
                            let client = client.clone();
                            move |_| context::go_to(portal, client.clone(), Page::Register)
                        },
                        "{register_text}"
                    }
                }
                select {
                    class: "language-select",
                    value: lang.code(),
                    onchange: move |evt: FormEvent| {
                        context::set_language(portal, Language::from_code(&evt.value()));
                    },
                    for language in Language::ALL {
                        option {
                            value: language.code(),
                            selected: language == lang,
                            "{language.label()}"
                        }
                    }
                }
            }
        }
    }
}
