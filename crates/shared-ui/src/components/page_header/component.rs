use dioxus::prelude::*;

/// Title block at the top of a page with an optional action area.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

/// Page heading with its one-line subtitle.
#[component]
pub fn PageTitle(#[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "page-title-block",
            h1 { class: "page-title", {children} }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Right-aligned container for page-level buttons and selects.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
