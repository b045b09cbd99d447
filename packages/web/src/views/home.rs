//! Landing page: hero, services and calls to action.

use dioxus::prelude::*;
use ui::context::{self, use_api, use_portal};
use ui::Page;

const SERVICES: [(&str, &str); 4] = [
    (
        "Divorce Proceedings",
        "Complete divorce legal support including asset division and custody arrangements",
    ),
    (
        "Inheritance Cases",
        "Expert guidance on inheritance law and estate distribution",
    ),
    (
        "Child Custody",
        "Protecting your parental rights and your child's best interests",
    ),
    (
        "Alimony & Support",
        "Fair financial support arrangements and modifications",
    ),
];

#[component]
pub fn Home() -> Element {
    let portal = use_portal();
    let client = use_api();

    // Protected targets send visitors to registration.
    let cta = move |page: Page| {
        let client = client.clone();
        move |_: MouseEvent| context::go_call_to_action(portal, client.clone(), page)
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Expert Family Law Legal Services" }
            p {
                "Specialized in divorce, inheritance, custody, and alimony cases. "
                "Professional legal counsel with years of experience in family law."
            }
            div {
                class: "hero-actions",
                button { class: "btn", onclick: cta(Page::SubmitCase), "Submit Your Case" }
                button { class: "btn btn-secondary", onclick: cta(Page::Videos), "Watch Legal Videos" }
            }
        }
        main {
            h2 { "Our Legal Services" }
            p { class: "muted", "Comprehensive family law services tailored to your specific needs" }
            div {
                class: "grid",
                for (title, description) in SERVICES {
                    div {
                        class: "card",
                        h3 { "{title}" }
                        p { class: "muted", "{description}" }
                        button { class: "btn btn-secondary", onclick: cta(Page::SubmitCase), "Learn More" }
                    }
                }
            }
            div {
                class: "card",
                style: "margin-top: 2rem; text-align: center;",
                h2 { "Ready to Get Started?" }
                p { "Schedule a consultation or submit your case today. Our experienced team is here to help." }
                div {
                    class: "actions",
                    button { class: "btn", onclick: cta(Page::Booking), "Book Consultation" }
                    button { class: "btn btn-secondary", onclick: cta(Page::SubmitCase), "Submit Case" }
                }
            }
        }
    }
}
