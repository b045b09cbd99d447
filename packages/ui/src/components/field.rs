use dioxus::prelude::*;

/// Labelled single-line input.
#[component]
pub fn Field(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    #[props(default)] placeholder: String,
    #[props(default)] min: Option<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "{input_type}",
                value: "{value}",
                required,
                placeholder: "{placeholder}",
                min,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn TextArea(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] required: bool,
    #[props(default = 4)] rows: u32,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            textarea {
                class: "field-input",
                rows: "{rows}",
                required,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
