pub mod admin;
pub mod artist;
pub mod landing;
pub mod login;
pub mod not_found;

use crate::config::config;
use crate::navigation::{navigate, Hop};
use crate::session::use_session;
use crate::shell::AppLayout;
use dioxus::prelude::*;
use shared_types::Role;

use admin::AdminDashboard;
use artist::{Analytics, ArtistDashboard, MyReleases, SubmitMusic};
use landing::Landing;
use login::Login;
use not_found::NotFound;

/// Application routes.
///
/// The shell wraps every route; the gate inside it applies the access
/// rules in [`View::descriptor`] before the page renders.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[layout(RouteGate)]
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    // ── Artist ──
    #[route("/dashboard")]
    ArtistDashboard {},
    #[route("/submit-music")]
    SubmitMusic {},
    #[route("/my-releases")]
    MyReleases {},
    #[route("/analytics")]
    Analytics {},
    // ── Admin ──
    #[route("/admin")]
    AdminDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Identifier of a renderable page, independent of route parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Login,
    ArtistDashboard,
    SubmitMusic,
    MyReleases,
    Analytics,
    AdminDashboard,
    NotFound,
}

/// Who may open a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, signed in or not.
    Public,
    /// Signed-out visitors only; signed-in users are sent to their home view.
    GuestOnly,
    /// Signed-in users holding one of these roles.
    Roles(&'static [Role]),
}

/// Static binding of a path to a view and its access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub view: View,
    pub access: RouteAccess,
}

const ARTIST_ONLY: &[Role] = &[Role::Artist];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl View {
    pub const fn descriptor(self) -> RouteDescriptor {
        let (path, access) = match self {
            View::Landing => ("/", RouteAccess::GuestOnly),
            View::Login => ("/login", RouteAccess::GuestOnly),
            View::ArtistDashboard => ("/dashboard", RouteAccess::Roles(ARTIST_ONLY)),
            View::SubmitMusic => ("/submit-music", RouteAccess::Roles(ARTIST_ONLY)),
            View::MyReleases => ("/my-releases", RouteAccess::Roles(ARTIST_ONLY)),
            View::Analytics => ("/analytics", RouteAccess::Roles(ARTIST_ONLY)),
            View::AdminDashboard => ("/admin", RouteAccess::Roles(ADMIN_ONLY)),
            View::NotFound => ("/*", RouteAccess::Public),
        };
        RouteDescriptor {
            path,
            view: self,
            access,
        }
    }

    /// Page title used by the document head.
    pub fn title(self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Login => "Sign In",
            View::ArtistDashboard => "Dashboard",
            View::SubmitMusic => "Submit Music",
            View::MyReleases => "My Releases",
            View::Analytics => "Analytics",
            View::AdminDashboard => "Admin Dashboard",
            View::NotFound => "Page Not Found",
        }
    }
}

/// Every route descriptor, one per view.
pub const ROUTE_TABLE: [RouteDescriptor; 8] = [
    View::Landing.descriptor(),
    View::Login.descriptor(),
    View::ArtistDashboard.descriptor(),
    View::SubmitMusic.descriptor(),
    View::MyReleases.descriptor(),
    View::Analytics.descriptor(),
    View::AdminDashboard.descriptor(),
    View::NotFound.descriptor(),
];

impl Route {
    pub fn view(&self) -> View {
        match self {
            Route::Landing {} => View::Landing,
            Route::Login {} => View::Login,
            Route::ArtistDashboard {} => View::ArtistDashboard,
            Route::SubmitMusic {} => View::SubmitMusic,
            Route::MyReleases {} => View::MyReleases,
            Route::Analytics {} => View::Analytics,
            Route::AdminDashboard {} => View::AdminDashboard,
            Route::NotFound { .. } => View::NotFound,
        }
    }

    pub fn access(&self) -> RouteAccess {
        self.view().descriptor().access
    }
}

/// Access gate around every page.
///
/// Resolves the current route against the session on each render. When the
/// route redirects, the whole redirect chain is followed up front and the
/// history entry is replaced with the final target.
#[component]
fn RouteGate() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let identity = session.current_identity();
    let policy = config().routing.unauthorized_redirect;

    let navigation = navigate(route.clone(), identity.as_ref(), policy);

    if navigation.redirected() {
        match navigation.hops.first().and_then(Hop::denial) {
            Some(denial) => tracing::info!(
                from = %route,
                to = %navigation.rendered,
                hops = navigation.hops.len(),
                error = %denial,
                "Access denied, redirecting"
            ),
            None => tracing::info!(
                from = %route,
                to = %navigation.rendered,
                hops = navigation.hops.len(),
                "Redirecting"
            ),
        }
        navigator().replace(navigation.rendered);
        return rsx! {
            div { class: "route-gate-pending",
                p { "Redirecting..." }
            }
        };
    }

    rsx! {
        document::Title { "{route.view().title()} · Loop Music" }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn parse(path: &str) -> Route {
        path.parse::<Route>()
            .unwrap_or_else(|e| panic!("{path} did not parse: {e}"))
    }

    #[test]
    fn descriptor_paths_are_unique() {
        let paths: HashSet<&str> = ROUTE_TABLE.iter().map(|d| d.path).collect();
        assert_eq!(paths.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn every_descriptor_path_parses_to_its_view() {
        for descriptor in ROUTE_TABLE.iter().filter(|d| d.view != View::NotFound) {
            assert_eq!(parse(descriptor.path).view(), descriptor.view, "{}", descriptor.path);
        }
    }

    #[test]
    fn route_display_matches_descriptor_path() {
        assert_eq!(Route::ArtistDashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::AdminDashboard {}.to_string(), "/admin");
        assert_eq!(Route::Landing {}.to_string(), "/");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(parse("/nope").view(), View::NotFound);
        assert_eq!(
            parse("/admin/users/7"),
            Route::NotFound {
                route: vec!["admin".into(), "users".into(), "7".into()]
            }
        );
    }

    #[test]
    fn access_annotations() {
        assert_eq!(Route::Landing {}.access(), RouteAccess::GuestOnly);
        assert_eq!(Route::Login {}.access(), RouteAccess::GuestOnly);
        assert_eq!(Route::Analytics {}.access(), RouteAccess::Roles(&[Role::Artist]));
        assert_eq!(Route::AdminDashboard {}.access(), RouteAccess::Roles(&[Role::Admin]));
        assert_eq!(Route::NotFound { route: vec![] }.access(), RouteAccess::Public);
    }

    #[test]
    fn artist_routes_require_artist_only() {
        for route in [
            Route::ArtistDashboard {},
            Route::SubmitMusic {},
            Route::MyReleases {},
            Route::Analytics {},
        ] {
            assert_eq!(route.access(), RouteAccess::Roles(&[Role::Artist]), "{route}");
        }
    }
}
