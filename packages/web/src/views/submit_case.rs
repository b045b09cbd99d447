//! Case submission form with document upload.

use api::{Attachment, CaseType};
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Field, TextArea};
use ui::context::{self, use_api, use_portal};
use ui::forms::ACCEPTED_FILE_TYPES;
use ui::Page;

#[component]
pub fn SubmitCase() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let form = portal.read().case.clone();

    if let Some(receipt) = form.op.value() {
        let case_id = receipt.case_id.clone();
        return rsx! {
            main {
                div {
                    class: "card form-card",
                    Alert { kind: AlertKind::Success, message: "Case Submitted Successfully!" }
                    p { "Your case has been submitted and is now pending review. We'll contact you soon." }
                    p { class: "muted", "Reference: {case_id}" }
                    div {
                        class: "actions",
                        button {
                            class: "btn",
                            onclick: {
                                let client = client.clone();
                                move |_| context::go_to(portal, client.clone(), Page::Dashboard)
                            },
                            "Go to Dashboard"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| context::go_to(portal, client.clone(), Page::SubmitCase),
                            "Submit another case"
                        }
                    }
                }
            }
        };
    }

    let pending = form.op.is_pending();

    let handle_files = move |evt: FormEvent| async move {
        let mut attachments = Vec::new();
        for file in evt.files() {
            match file.read_bytes().await {
                Ok(bytes) => attachments.push(Attachment {
                    file_name: file.name(),
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                }),
                Err(e) => tracing::warn!("could not read {}: {e}", file.name()),
            }
        }
        portal.write().case.files = attachments;
    };

    rsx! {
        main {
            div {
                class: "card",
                style: "max-width: 42rem; margin: 0 auto;",
                h1 { "Submit Your Legal Case" }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        context::submit_case(portal, client.clone());
                    },

                    if let Some(err) = form.op.error() {
                        Alert { message: err.clone() }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Case Type" }
                        select {
                            class: "field-input",
                            value: form.case_type.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Ok(case_type) = evt.value().parse::<CaseType>() {
                                    portal.write().case.case_type = case_type;
                                }
                            },
                            for case_type in CaseType::ALL {
                                option {
                                    value: case_type.as_str(),
                                    selected: case_type == form.case_type,
                                    "{case_type.label()}"
                                }
                            }
                        }
                    }

                    Field {
                        label: "Case Title",
                        required: true,
                        placeholder: "Brief title for your case",
                        value: form.title.clone(),
                        oninput: move |v: String| portal.write().case.title = v,
                    }
                    TextArea {
                        label: "Case Description",
                        required: true,
                        rows: 6,
                        value: form.description.clone(),
                        oninput: move |v: String| portal.write().case.description = v,
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Supporting Documents" }
                        input {
                            class: "field-input",
                            r#type: "file",
                            multiple: true,
                            accept: ACCEPTED_FILE_TYPES,
                            onchange: handle_files,
                        }
                        span { class: "muted", "PDF, Word, Excel and image files" }
                    }
                    if !form.files.is_empty() {
                        ul {
                            class: "muted",
                            for file in form.files.iter() {
                                li { key: "{file.file_name}", "{file.file_name}" }
                            }
                        }
                    }

                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: pending,
                        if pending { "Submitting..." } else { "Submit Case" }
                    }
                }
            }
        }
    }
}
