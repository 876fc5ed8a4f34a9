use dioxus::prelude::*;

mod config;
mod format_helpers;
mod guard;
mod navigation;
mod routes;
mod session;
mod shell;

use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let config = config::load_config();

    if let Err(e) = dioxus::logger::init(config::log_level(config)) {
        eprintln!("[logger] Failed to install tracing subscriber: {e}");
    }
    if let Some(e) = config::load_error() {
        tracing::warn!(error = %e, "Bundled config.toml rejected, using defaults");
    }
    tracing::info!(
        platform = client_platform(),
        unauthorized_redirect = ?config.routing.unauthorized_redirect,
        "Starting Loop Music"
    );

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
