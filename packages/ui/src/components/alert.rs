use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Success => "alert alert-success",
        }
    }
}

/// Inline banner above a form.
#[component]
pub fn Alert(message: String, #[props(default)] kind: AlertKind) -> Element {
    rsx! {
        div {
            class: kind.class(),
            role: "alert",
            "{message}"
        }
    }
}
