use dioxus::prelude::*;

/// Colour tone for badges.
///
/// Tones describe meaning rather than colour so pages can map their own
/// statuses onto them (a live track is `Success`, a rejected one `Danger`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Info,
    Warning,
    Danger,
}

impl BadgeTone {
    fn key(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Info => "info",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
        }
    }
}

/// Pill-shaped inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.key(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tone_and_children() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { tone: BadgeTone::Warning, "Pending" }
        });
        assert!(html.contains("data-tone=\"warning\""), "{html}");
        assert!(html.contains("Pending"), "{html}");
    }

    #[test]
    fn default_tone_is_neutral() {
        assert_eq!(BadgeTone::default(), BadgeTone::Neutral);
        let html = dioxus_ssr::render_element(rsx! { Badge { "Draft" } });
        assert!(html.contains("data-tone=\"neutral\""), "{html}");
    }
}
