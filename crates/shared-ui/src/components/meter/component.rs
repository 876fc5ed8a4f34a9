use dioxus::prelude::*;

/// Clamp a percentage into the 0–100 range used for bar widths.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Horizontal bar filled to `percent` of its width.
///
/// Used for monthly stream charts and platform/region breakdowns.
#[component]
pub fn Meter(
    percent: f64,
    /// Optional fill colour class, e.g. "fill-purple".
    #[props(default)]
    fill: String,
) -> Element {
    let width = clamp_percent(percent);
    let fill_class = if fill.is_empty() {
        "meter-fill".to_string()
    } else {
        format!("meter-fill {fill}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "meter",
            role: "meter",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{width}",
            div { class: "{fill_class}", style: "width: {width}%;" }
        }
    }
}
