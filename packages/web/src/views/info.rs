//! Static information pages and the footer.

use dioxus::prelude::*;
use ui::context::{self, use_api, use_portal};
use ui::{t, Label, Page};

#[component]
pub fn About() -> Element {
    rsx! {
        main {
            h1 { "About Union Law Firm" }
            div {
                class: "card stack",
                p {
                    "Union Law Firm is a family law practice focused on divorce, inheritance, "
                    "child custody and alimony. We combine years of courtroom experience with "
                    "clear, personal guidance through every step of a case."
                }
                p {
                    "Clients can submit cases online, follow their progress from a private "
                    "dashboard and book consultations with our attorneys."
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        main {
            h1 { "Contact Us" }
            div {
                class: "card stack",
                p { strong { "Phone: " } "+961 1 234 567" }
                p { strong { "Email: " } "info@unionlawfirm.com" }
                p { strong { "Office hours: " } "Monday to Friday, 9:00 to 17:00" }
            }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        main {
            h1 { "Privacy Policy" }
            div {
                class: "card stack",
                p {
                    "We collect only the information needed to handle your case: your name, "
                    "contact details, case descriptions and the documents you upload."
                }
                p {
                    "Case material is shared with the attorneys handling your matter and is "
                    "never sold or disclosed to third parties except where required by law."
                }
            }
        }
    }
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        main {
            h1 { "Terms of Service" }
            div {
                class: "card stack",
                p {
                    "Submitting a case through this portal does not by itself create an "
                    "attorney-client relationship. Representation begins once the firm accepts "
                    "your case in writing."
                }
                p {
                    "Consultation fees are due as stated at booking and are processed separately."
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let portal = use_portal();
    let client = use_api();
    let lang = portal.read().language();

    let link = move |page: Page, label: Label| {
        let client = client.clone();
        let text = t(lang, label);
        rsx! {
            button {
                onclick: move |_| context::go_to(portal, client.clone(), page),
                "{text}"
            }
        }
    };

    rsx! {
        footer {
            p { "© Union Law Firm" }
            {link(Page::About, Label::About)}
            " · "
            {link(Page::Contact, Label::Contact)}
            " · "
            {link(Page::Privacy, Label::Privacy)}
            " · "
            {link(Page::Terms, Label::Terms)}
        }
    }
}
