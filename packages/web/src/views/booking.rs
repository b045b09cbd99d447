//! Consultation booking form.

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Field, TextArea};
use ui::context::{self, use_api, use_portal};
use ui::forms::{booking_min_attr, local_now, CONSULTATION_FEE_USD};
use ui::Page;

#[component]
pub fn Booking() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let form = portal.read().booking.clone();

    if form.submitted() {
        return rsx! {
            main {
                div {
                    class: "card form-card",
                    Alert { kind: AlertKind::Success, message: "Appointment Booked Successfully!" }
                    p { "Your appointment has been scheduled. Payment will be processed separately." }
                    button {
                        class: "btn",
                        onclick: move |_| context::go_to(portal, client.clone(), Page::Dashboard),
                        "Go to Dashboard"
                    }
                }
            }
        };
    }

    let pending = form.op.is_pending();
    // Recomputed on every render.
    let min = booking_min_attr(local_now());

    rsx! {
        main {
            div {
                class: "card form-card",
                h1 { "Book a Consultation" }
                p { class: "muted", "Consultation fee: ${CONSULTATION_FEE_USD}" }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        context::book_appointment(portal, client.clone());
                    },

                    if let Some(err) = form.op.error() {
                        Alert { message: err.clone() }
                    }

                    Field {
                        label: "Appointment Date & Time",
                        input_type: "datetime-local",
                        required: true,
                        min: min,
                        value: form.appointment_date.clone(),
                        oninput: move |v: String| portal.write().booking.appointment_date = v,
                    }
                    TextArea {
                        label: "Notes (optional)",
                        value: form.notes.clone(),
                        oninput: move |v: String| portal.write().booking.notes = v,
                    }
                    p { class: "muted", "Appointments must be booked at least 24 hours in advance." }

                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: pending,
                        if pending { "Booking..." } else { "Book Appointment" }
                    }
                }
            }
        }
    }
}
