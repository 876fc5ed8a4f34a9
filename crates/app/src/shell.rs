use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu, LdMusic, LdUser, LdX};
use dioxus_free_icons::Icon;
use shared_types::Identity;

use crate::routes::Route;
use crate::session::{use_session, SessionState};

/// Open/closed state of the small-screen navigation menu.
///
/// [`MobileMenu::follow`] is fed every route the header renders on; any
/// change of route collapses the menu, so it never survives a navigation
/// even when the router ends up back on the route it was opened from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobileMenu {
    open: bool,
    route: Option<Route>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Record the active route, closing the menu if it changed.
    pub fn follow(&mut self, current: &Route) {
        if self.route.as_ref() != Some(current) {
            self.route = Some(current.clone());
            self.open = false;
        }
    }
}

/// Header logout: collapse the menu, end the session and name the route to
/// show next.
pub fn sign_out(mut session: SessionState, mut menu: Signal<MobileMenu>) -> Route {
    menu.write().close();
    session.logout();
    Route::Landing {}
}

/// Navigation entries for the signed-in header, by role.
pub fn nav_links(identity: &Identity) -> Vec<(&'static str, Route)> {
    match identity {
        Identity::Artist(_) => vec![
            ("Dashboard", Route::ArtistDashboard {}),
            ("Submit Music", Route::SubmitMusic {}),
            ("My Releases", Route::MyReleases {}),
            ("Analytics", Route::Analytics {}),
        ],
        Identity::Administrator(_) => vec![("Admin Dashboard", Route::AdminDashboard {})],
    }
}

fn nav_link_class(target: &Route, current: &Route) -> &'static str {
    if target == current {
        "app-nav-link active"
    } else {
        "app-nav-link"
    }
}

/// Page chrome around every route: sticky header plus the routed content.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }

        div { class: "app-shell",
            Header {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let mut menu = use_signal(MobileMenu::default);

    use_effect(use_reactive((&route,), move |(route,)| menu.write().follow(&route)));

    let identity = session.current_identity();
    let menu_open = menu.read().is_open();

    let logout = move |_: MouseEvent| {
        navigator().push(sign_out(session, menu));
    };

    rsx! {
        header { class: "app-header",
            div { class: "app-header-bar",
                Link {
                    to: Route::Landing {},
                    class: "app-brand",
                    onclick: move |_| menu.write().close(),
                    span { class: "app-brand-mark",
                        Icon::<LdMusic> { icon: LdMusic, width: 22, height: 22 }
                    }
                    span { class: "app-brand-name", "Loop Music" }
                }

                {match identity.as_ref() {
                    None => rsx! {
                        div { class: "app-header-guest",
                            Link { to: Route::Login {}, class: "app-header-link", "Login" }
                            Link { to: Route::Login {}, class: "app-header-cta", "Get Started" }
                        }
                    },
                    Some(identity) => rsx! {
                        nav { class: "app-nav",
                            for (label, target) in nav_links(identity) {
                                Link {
                                    key: "{target}",
                                    class: nav_link_class(&target, &route),
                                    to: target.clone(),
                                    onclick: move |_| menu.write().close(),
                                    "{label}"
                                }
                            }
                        }
                        div { class: "app-user",
                            span { class: "app-user-name",
                                Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                                "{identity.name()}"
                            }
                            button { class: "app-logout", r#type: "button", onclick: logout,
                                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                                "Logout"
                            }
                        }
                        button {
                            class: "app-menu-toggle",
                            r#type: "button",
                            "aria-expanded": "{menu_open}",
                            "aria-label": "Toggle navigation",
                            onclick: move |_| menu.write().toggle(),
                            if menu_open {
                                Icon::<LdX> { icon: LdX, width: 22, height: 22 }
                            } else {
                                Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                            }
                        }
                    },
                }}
            }

            if let Some(identity) = identity.as_ref().filter(|_| menu_open) {
                div { class: "app-mobile-menu",
                    for (label, target) in nav_links(identity) {
                        Link {
                            key: "{target}",
                            class: "app-mobile-link",
                            to: target.clone(),
                            onclick: move |_| menu.write().close(),
                            "{label}"
                        }
                    }
                    div { class: "app-mobile-user",
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        "{identity.name()}"
                    }
                    button { class: "app-logout", r#type: "button", onclick: logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
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
    fn menu_starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn menu_toggles() {
        let mut menu = MobileMenu::default();
        menu.follow(&Route::MyReleases {});
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn rerender_on_same_route_keeps_menu_open() {
        let mut menu = MobileMenu::default();
        menu.follow(&Route::Analytics {});
        menu.toggle();
        menu.follow(&Route::Analytics {});
        assert!(menu.is_open());
    }

    #[test]
    fn menu_stays_closed_after_redirect_back() {
        // Brand link to "/" is bounced straight back to the dashboard.
        let mut menu = MobileMenu::default();
        menu.follow(&Route::ArtistDashboard {});
        menu.toggle();
        menu.follow(&Route::Landing {});
        assert!(!menu.is_open());
        menu.follow(&Route::ArtistDashboard {});
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_close_is_unconditional() {
        let mut menu = MobileMenu::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert_eq!(menu, MobileMenu::default());
    }

    #[component]
    fn SignOutHarness() -> Element {
        let mut session = use_context_provider(SessionState::new);
        let mut menu = use_signal(MobileMenu::default);
        let target = use_hook(move || {
            session.login("luna@example.com", "pw", Role::Artist).unwrap();
            menu.write().toggle();
            sign_out(session, menu)
        });
        let signed_in = session.current_identity().is_some();
        let open = menu.read().is_open();

        rsx! {
            p { "{target}|{signed_in}|{open}" }
        }
    }

    #[test]
    fn sign_out_clears_session_and_heads_home() {
        let html = dioxus_ssr::render_element(rsx! { SignOutHarness {} });
        assert_eq!(html, "<p>/|false|false</p>");
    }

    #[test]
    fn artist_links() {
        let identity = Identity::from_login("luna@example.com", Role::Artist);
        let labels: Vec<&str> = nav_links(&identity).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Dashboard", "Submit Music", "My Releases", "Analytics"]);
    }

    #[test]
    fn admin_links() {
        let identity = Identity::from_login("root@example.com", Role::Admin);
        assert_eq!(
            nav_links(&identity),
            vec![("Admin Dashboard", Route::AdminDashboard {})]
        );
    }

    #[test]
    fn active_link_matches_current_route() {
        let here = Route::Analytics {};
        assert_eq!(nav_link_class(&Route::Analytics {}, &here), "app-nav-link active");
        assert_eq!(nav_link_class(&Route::MyReleases {}, &here), "app-nav-link");
    }

    #[test]
    fn nav_links_never_point_at_forbidden_views() {
        use crate::guard::{authorize, Access};
        use crate::routes::RouteAccess;

        for role in shared_types::ALL_ROLES {
            let identity = Identity::from_login("x@example.com", *role);
            for (_, route) in nav_links(&identity) {
                if let RouteAccess::Roles(required) = route.access() {
                    assert_eq!(authorize(Some(&identity), required), Access::Allow, "{route}");
                }
            }
        }
    }
}
