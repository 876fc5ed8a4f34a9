use dioxus::prelude::*;
use shared_types::Identity;

use crate::navigation::role_home;
use crate::routes::Route;
use crate::session::use_session;

/// Where the "back" link on the 404 page leads.
fn home_link(identity: Option<&Identity>) -> (&'static str, Route) {
    match identity {
        Some(identity) => ("Back to Dashboard", role_home(identity.role())),
        None => ("Back to Home", Route::Landing {}),
    }
}

/// 404 Not Found page. Rendered for every path no other route claims,
/// whoever is signed in.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let session = use_session();
    let path = format!("/{}", route.join("/"));
    let (label, target) = home_link(session.current_identity().as_ref());

    tracing::debug!(%path, "No route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        document::Title { "Page Not Found · Loop Music" }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Role;

    #[test]
    fn guest_goes_back_to_landing() {
        assert_eq!(home_link(None), ("Back to Home", Route::Landing {}));
    }

    #[test]
    fn signed_in_goes_back_to_role_home() {
        let admin = Identity::from_login("root@example.com", Role::Admin);
        assert_eq!(home_link(Some(&admin)).1, Route::AdminDashboard {});

        let artist = Identity::from_login("luna@example.com", Role::Artist);
        assert_eq!(home_link(Some(&artist)).1, Route::ArtistDashboard {});
    }
}
