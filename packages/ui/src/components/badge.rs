use api::{AppointmentStatus, CaseStatus};
use dioxus::prelude::*;

use crate::dashboard::{appointment_badge, case_badge};

#[component]
pub fn CaseBadge(status: CaseStatus) -> Element {
    rsx! {
        span { class: case_badge(status), "{status.label()}" }
    }
}

#[component]
pub fn AppointmentBadge(status: AppointmentStatus) -> Element {
    rsx! {
        span { class: appointment_badge(status), "{status.as_str()}" }
    }
}
