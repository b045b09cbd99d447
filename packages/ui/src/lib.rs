//! This crate contains the portal's client-side state and shared UI.
//!
//! The state modules (`route`, `session`, `forms`, `dashboard`, `admin`,
//! `videos`, `portal`) are plain Rust and tested without a renderer. The
//! Dioxus layer (`context`, `components`, `views`, `Navbar`) wraps one
//! [`PortalState`] in a signal.

use dioxus::prelude::*;

pub mod admin;
pub mod dashboard;
pub mod forms;
pub mod i18n;
pub mod loads;
pub mod operation;
pub mod portal;
pub mod route;
pub mod session;
pub mod videos;

pub mod components;
pub mod context;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const PORTAL_CSS: Asset = asset!("/assets/portal.css");

mod navbar;
pub use navbar::Navbar;

pub use context::{use_api, use_portal, Portal, PortalProvider};
pub use i18n::{t, Label, Language};
pub use operation::AsyncOperation;
pub use portal::PortalState;
pub use route::{Page, View, Viewer};
pub use views::ModalOverlay;
