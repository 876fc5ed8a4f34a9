use dioxus::prelude::*;

/// Filter row above a list: a search box plus selects, wrapped on narrow screens.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}
