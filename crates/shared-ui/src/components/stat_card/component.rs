use dioxus::prelude::*;

/// Headline metric: label, big value and an optional trend line.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    /// Trend text such as "+12% from last month".
    #[props(default)]
    trend: String,
    /// Icon shown beside the value.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-body",
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
                if !trend.is_empty() {
                    p { class: "stat-card-trend", "{trend}" }
                }
            }
            div { class: "stat-card-icon", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_value_and_trend() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { label: "Total Streams", value: "170,000", trend: "+12% from last month",
                span { "icon" }
            }
        });
        assert!(html.contains("Total Streams"), "{html}");
        assert!(html.contains("170,000"), "{html}");
        assert!(html.contains("stat-card-trend"), "{html}");
    }

    #[test]
    fn trend_is_optional() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { label: "Pending", value: "23", span { "icon" } }
        });
        assert!(!html.contains("stat-card-trend"), "{html}");
    }
}
