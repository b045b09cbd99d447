//! Admin case review console.

use api::{CaseInfo, CaseStatus};
use dioxus::prelude::*;
use ui::admin::STATUS_ACTIONS;
use ui::components::{Alert, CaseBadge, Spinner};
use ui::context::{self, use_api, use_portal};
use ui::{AsyncOperation, ModalOverlay};

use super::format_date;

#[component]
pub fn Admin() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let admin = portal.read().admin.clone();
    let summary = admin.summary();

    rsx! {
        main {
            h1 { "Admin Dashboard" }
            p { class: "muted", "Review and manage client cases" }

            div {
                class: "summary",
                div { class: "card", strong { "{summary.total}" } span { class: "muted", "Total cases" } }
                div { class: "card", strong { "{summary.pending}" } span { class: "muted", "Pending" } }
                div { class: "card", strong { "{summary.in_progress}" } span { class: "muted", "In progress" } }
            }

            match &admin.cases {
                AsyncOperation::Idle | AsyncOperation::Pending => rsx! { Spinner {} },
                AsyncOperation::Failed(err) => rsx! { Alert { message: err.clone() } },
                AsyncOperation::Ready(cases) if cases.is_empty() => rsx! {
                    div { class: "empty", "No cases submitted yet" }
                },
                AsyncOperation::Ready(cases) => rsx! {
                    table {
                        thead {
                            tr {
                                th { "Client" }
                                th { "Case" }
                                th { "Type" }
                                th { "Status" }
                                th { "Submitted" }
                                th {}
                            }
                        }
                        tbody {
                            for case in cases.iter() {
                                tr {
                                    key: "{case.id}",
                                    td {
                                        div { "{case.user_name.clone().unwrap_or_default()}" }
                                        div { class: "muted", "{case.user_email.clone().unwrap_or_default()}" }
                                    }
                                    td { "{case.title}" }
                                    td { "{case.case_type.label()}" }
                                    td { CaseBadge { status: case.status } }
                                    td { "{case.created_at.as_deref().map(format_date).unwrap_or_default()}" }
                                    td {
                                        button {
                                            class: "btn btn-secondary",
                                            onclick: {
                                                let id = case.id.clone();
                                                move |_| portal.write().admin.open(&id)
                                            },
                                            "View"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            if let Some(case) = admin.selected.clone() {
                CaseDetail {
                    case,
                    pending: admin.update.is_pending(),
                    error: admin.update.error().cloned(),
                    on_close: move |_| portal.write().admin.close(),
                    on_status: move |status: CaseStatus| context::change_case_status(portal, client.clone(), status),
                }
            }
        }
    }
}

#[component]
fn CaseDetail(
    case: CaseInfo,
    pending: bool,
    error: Option<String>,
    on_close: EventHandler<()>,
    on_status: EventHandler<CaseStatus>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: case.title.clone(),
            on_close,
            div {
                class: "stack",
                if let Some(err) = error {
                    Alert { message: err }
                }
                p { CaseBadge { status: case.status } " {case.case_type.label()}" }
                if let Some(name) = case.user_name.as_deref() {
                    p { strong { "Client: " } "{name}" }
                }
                if let Some(email) = case.user_email.as_deref() {
                    p { strong { "Email: " } "{email}" }
                }
                p { "{case.description}" }
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
                div {
                    class: "actions",
                    for (status, label) in STATUS_ACTIONS {
                        button {
                            class: "btn",
                            disabled: pending || status == case.status,
                            onclick: move |_| on_status.call(status),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Shown to signed-in clients who open the admin page.
#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        main {
            div {
                class: "card form-card",
                style: "text-align: center;",
                h1 { "Access Denied" }
                p { class: "muted", "You don't have permission to access this page." }
            }
        }
    }
}
