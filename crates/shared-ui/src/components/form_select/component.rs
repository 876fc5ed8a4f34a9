use dioxus::prelude::*;

/// Native `<select>` with the dashboard's input styling.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    /// Label displayed above the select; omitted when empty.
    #[props(default)]
    label: String,
    /// Validation message displayed below the select.
    #[props(default)]
    error: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: if !error.is_empty() { "form-select invalid" } else { "form-select" },
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if !error.is_empty() {
                p { class: "form-select-error", "{error}" }
            }
        }
    }
}
