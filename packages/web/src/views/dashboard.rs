//! Client dashboard: own cases and appointments.

use dioxus::prelude::*;
use ui::components::{Alert, AppointmentBadge, CaseBadge, Spinner};
use ui::context::{self, use_api, use_portal};
use ui::{AsyncOperation, ModalOverlay, Page};

use super::format_date;

#[component]
pub fn Dashboard() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let state = portal.read();
    let dashboard = state.dashboard.clone();
    let name = state
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    drop(state);

    let go = {
        let client = client.clone();
        move |page: Page| {
            let client = client.clone();
            move |_: MouseEvent| context::go_to(portal, client.clone(), page)
        }
    };

    if dashboard.loading {
        return rsx! {
            main { Spinner { label: "Loading your dashboard..." } }
        };
    }

    rsx! {
        main {
            h1 { "Welcome, {name}" }
            p { class: "muted", "Manage your cases and appointments" }

            section {
                class: "card",
                style: "margin-top: 1.5rem;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    h2 { "My Cases" }
                    button { class: "btn", onclick: go(Page::SubmitCase), "New Case" }
                }
                if dashboard.cases.is_empty() {
                    div {
                        class: "empty",
                        p { "No cases submitted yet" }
                        button { class: "btn btn-secondary", onclick: go(Page::SubmitCase), "Submit your first case" }
                    }
                } else {
                    div {
                        class: "stack",
                        for case in dashboard.cases.iter() {
                            div {
                                key: "{case.id}",
                                class: "card card-link",
                                onclick: {
                                    let client = client.clone();
                                    let id = case.id.clone();
                                    move |_| context::open_case(portal, client.clone(), id.clone())
                                },
                                div {
                                    style: "display: flex; justify-content: space-between;",
                                    h3 { "{case.title}" }
                                    CaseBadge { status: case.status }
                                }
                                p { class: "muted", "{case.case_type.label()}" }
                                p { "{case.description}" }
                                if let Some(created) = case.created_at.as_deref() {
                                    p { class: "muted", "Submitted {format_date(created)}" }
                                }
                                if !case.files.is_empty() {
                                    p { class: "muted", "{case.files.len()} document(s) attached" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                style: "margin-top: 1.5rem;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    h2 { "My Appointments" }
                    button { class: "btn", onclick: go(Page::Booking), "Book Appointment" }
                }
                if dashboard.appointments.is_empty() {
                    div {
                        class: "empty",
                        p { "No appointments scheduled" }
                        button { class: "btn btn-secondary", onclick: go(Page::Booking), "Book your first appointment" }
                    }
                } else {
                    div {
                        class: "stack",
                        for appointment in dashboard.appointments.iter() {
                            div {
                                key: "{appointment.id}",
                                class: "card",
                                div {
                                    style: "display: flex; justify-content: space-between;",
                                    strong { "{format_date(&appointment.appointment_date)}" }
                                    AppointmentBadge { status: appointment.status }
                                }
                                if let Some(notes) = appointment.notes.as_deref() {
                                    p { "{notes}" }
                                }
                                p {
                                    class: "muted",
                                    "Amount: ${appointment.amount} · Payment: {appointment.payment_status}"
                                }
                            }
                        }
                    }
                }
            }

            match &dashboard.viewing {
                AsyncOperation::Idle => rsx! {},
                AsyncOperation::Pending => rsx! {
                    ModalOverlay {
                        title: "Loading case",
                        on_close: move |_| portal.write().dashboard.close_case(),
                        Spinner {}
                    }
                },
                AsyncOperation::Failed(err) => rsx! {
                    ModalOverlay {
                        title: "Case unavailable",
                        on_close: move |_| portal.write().dashboard.close_case(),
                        Alert { message: err.clone() }
                    }
                },
                AsyncOperation::Ready(case) => rsx! {
                    ModalOverlay {
                        title: case.title.clone(),
                        on_close: move |_| portal.write().dashboard.close_case(),
                        div {
                            class: "stack",
                            p { CaseBadge { status: case.status } " {case.case_type.label()}" }
                            p { "{case.description}" }
                            if let Some(updated) = case.updated_at.as_deref() {
                                p { class: "muted", "Last updated {format_date(updated)}" }
                            }
                            if !case.files.is_empty() {
                                div {
                                    strong { "Documents" }
                                    ul {
                                        for file in case.files.iter() {
                                            li { key: "{file}", "{file}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
