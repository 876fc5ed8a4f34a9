use dioxus::prelude::*;

/// Labelled text input with an optional validation message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] name: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    /// Validation message shown below the field; hidden when empty.
    #[props(default)] error: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let class = if !error.is_empty() { "input invalid" } else { "input" };
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                name: name,
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !error.is_empty() {
                p { class: "input-error", "{error}" }
            }
        }
    }
}
