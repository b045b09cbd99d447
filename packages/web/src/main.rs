use dioxus::prelude::*;

use ui::{use_portal, Navbar, Page, PortalProvider, View};
use views::{
    About, AccessDenied, Admin, Booking, Contact, Dashboard, Home, Login, Privacy, Register,
    SubmitCase, Terms, Videos,
};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PortalProvider {
            Shell {}
        }
    }
}

/// Renders whatever the route table resolves the current page to.
#[component]
fn Shell() -> Element {
    let portal = use_portal();
    let state = portal.read();
    let view = state.view();
    let lang = state.language();
    drop(state);

    rsx! {
        div {
            lang: lang.code(),
            dir: lang.dir(),
            Navbar {}
            match view {
                View::AccessDenied => rsx! { AccessDenied {} },
                View::Page(Page::Home) => rsx! { Home {} },
                View::Page(Page::Login) => rsx! { Login {} },
                View::Page(Page::Register) => rsx! { Register {} },
                View::Page(Page::SubmitCase) => rsx! { SubmitCase {} },
                View::Page(Page::Dashboard) => rsx! { Dashboard {} },
                View::Page(Page::Booking) => rsx! { Booking {} },
                View::Page(Page::Videos) => rsx! { Videos {} },
                View::Page(Page::Admin) => rsx! { Admin {} },
                View::Page(Page::About) => rsx! { About {} },
                View::Page(Page::Contact) => rsx! { Contact {} },
                View::Page(Page::Privacy) => rsx! { Privacy {} },
                View::Page(Page::Terms) => rsx! { Terms {} },
            }
            views::Footer {}
        }
    }
}
