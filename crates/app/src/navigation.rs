//! Route resolution: turns a requested route plus the current session into
//! either the route to render or a redirect.
//!
//! Everything here is pure so the redirect rules can be checked without a
//! running router. `RouteGate` in [`crate::routes`] is the only caller that
//! touches the navigator.

use shared_types::{AppError, Identity, Role, UnauthorizedRedirect};

use crate::guard::{authorize, Access};
use crate::routes::{Route, RouteAccess};

/// Redirect chains longer than this are treated as a routing bug.
pub const MAX_REDIRECTS: usize = 8;

/// Why a route was not rendered as requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// A guest-only page was opened while signed in.
    AlreadySignedIn,
    /// A protected page was opened without a session.
    Unauthenticated,
    /// A protected page was opened with the wrong role.
    Unauthorized,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Render(Route),
    Redirect { to: Route, reason: RedirectReason },
}

/// Default view for a role after sign-in.
pub fn role_home(role: Role) -> Route {
    match role {
        Role::Artist => Route::ArtistDashboard {},
        Role::Admin => Route::AdminDashboard {},
    }
}

/// Resolve one step for `route`.
pub fn resolve(
    route: &Route,
    identity: Option<&Identity>,
    policy: UnauthorizedRedirect,
) -> Resolution {
    match route.access() {
        RouteAccess::Public => Resolution::Render(route.clone()),
        RouteAccess::GuestOnly => match identity {
            None => Resolution::Render(route.clone()),
            Some(identity) => Resolution::Redirect {
                to: role_home(identity.role()),
                reason: RedirectReason::AlreadySignedIn,
            },
        },
        RouteAccess::Roles(required) => match authorize(identity, required) {
            Access::Allow => Resolution::Render(route.clone()),
            Access::RedirectToLogin => Resolution::Redirect {
                to: Route::Login {},
                reason: RedirectReason::Unauthenticated,
            },
            Access::RedirectToDefault => {
                let to = match (policy, identity) {
                    (UnauthorizedRedirect::RoleHome, Some(identity)) => role_home(identity.role()),
                    _ => Route::Landing {},
                };
                Resolution::Redirect {
                    to,
                    reason: RedirectReason::Unauthorized,
                }
            }
        },
    }
}

/// One redirect taken while following a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub from: Route,
    pub to: Route,
    pub reason: RedirectReason,
}

impl Hop {
    /// The access failure behind this hop, if any. Bouncing a signed-in user
    /// off a guest page is not one.
    pub fn denial(&self) -> Option<AppError> {
        match self.reason {
            RedirectReason::AlreadySignedIn => None,
            RedirectReason::Unauthenticated => Some(AppError::unauthenticated(format!(
                "{} requires a signed-in user",
                self.from
            ))),
            RedirectReason::Unauthorized => Some(AppError::unauthorized(format!(
                "{} is not available to this role",
                self.from
            ))),
        }
    }
}

/// Result of following redirects from a starting route.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub hops: Vec<Hop>,
    pub rendered: Route,
}

impl Navigation {
    pub fn redirected(&self) -> bool {
        !self.hops.is_empty()
    }
}

/// Follow redirects from `start` until a route renders.
///
/// The session cannot change mid-chain, so every chain terminates in at most
/// two hops. If it somehow doesn't, the not-found view is rendered instead of
/// looping.
pub fn navigate(
    start: Route,
    identity: Option<&Identity>,
    policy: UnauthorizedRedirect,
) -> Navigation {
    let mut hops = Vec::new();
    let mut current = start;

    while hops.len() < MAX_REDIRECTS {
        match resolve(&current, identity, policy) {
            Resolution::Render(route) => {
                return Navigation {
                    hops,
                    rendered: route,
                }
            }
            Resolution::Redirect { to, reason } => {
                tracing::debug!(from = %current, to = %to, ?reason, "Route redirect");
                hops.push(Hop {
                    from: current,
                    to: to.clone(),
                    reason,
                });
                current = to;
            }
        }
    }

    let start = hops.first().map(|h| h.from.to_string()).unwrap_or_default();
    let error = AppError::not_found(format!("redirects from {start} did not settle"));
    tracing::warn!(error = %error, "Redirect chain did not settle");
    Navigation {
        hops,
        rendered: Route::NotFound { route: Vec::new() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{View, ROUTE_TABLE};
    use pretty_assertions::assert_eq;
    use shared_types::ALL_ROLES;

    const POLICIES: [UnauthorizedRedirect; 2] =
        [UnauthorizedRedirect::Landing, UnauthorizedRedirect::RoleHome];

    fn signed_in(role: Role) -> Identity {
        Identity::from_login("someone@example.com", role)
    }

    fn parse(path: &str) -> Route {
        path.parse::<Route>()
            .unwrap_or_else(|e| panic!("{path} did not parse: {e}"))
    }

    fn all_routes() -> Vec<Route> {
        ROUTE_TABLE
            .iter()
            .map(|d| match d.view {
                View::NotFound => Route::NotFound {
                    route: vec!["missing".into()],
                },
                _ => parse(d.path),
            })
            .collect()
    }

    #[test]
    fn role_home_matches_role() {
        assert_eq!(role_home(Role::Artist), Route::ArtistDashboard {});
        assert_eq!(role_home(Role::Admin), Route::AdminDashboard {});
    }

    #[test]
    fn guest_reaching_protected_route_goes_to_login() {
        for path in ["/dashboard", "/submit-music", "/my-releases", "/analytics", "/admin"] {
            assert_eq!(
                resolve(&parse(path), None, UnauthorizedRedirect::Landing),
                Resolution::Redirect {
                    to: Route::Login {},
                    reason: RedirectReason::Unauthenticated
                },
                "{path}"
            );
        }
    }

    #[test]
    fn guest_sees_landing_and_login() {
        for route in [Route::Landing {}, Route::Login {}] {
            assert_eq!(
                navigate(route.clone(), None, UnauthorizedRedirect::Landing),
                Navigation {
                    hops: vec![],
                    rendered: route
                }
            );
        }
    }

    #[test]
    fn signed_in_user_is_bounced_off_guest_pages() {
        for role in ALL_ROLES {
            let id = signed_in(*role);
            for route in [Route::Landing {}, Route::Login {}] {
                assert_eq!(
                    resolve(&route, Some(&id), UnauthorizedRedirect::Landing),
                    Resolution::Redirect {
                        to: role_home(*role),
                        reason: RedirectReason::AlreadySignedIn
                    }
                );
            }
        }
    }

    #[test]
    fn artist_visiting_admin_lands_on_dashboard_via_landing() {
        let id = signed_in(Role::Artist);
        let nav = navigate(Route::AdminDashboard {}, Some(&id), UnauthorizedRedirect::Landing);
        assert_eq!(
            nav.hops.iter().map(|h| h.to.clone()).collect::<Vec<_>>(),
            vec![Route::Landing {}, Route::ArtistDashboard {}]
        );
        assert_eq!(nav.hops[0].reason, RedirectReason::Unauthorized);
        assert_eq!(nav.hops[1].reason, RedirectReason::AlreadySignedIn);
        assert_eq!(nav.rendered, Route::ArtistDashboard {});
    }

    #[test]
    fn role_home_policy_skips_landing() {
        let id = signed_in(Role::Admin);
        let nav = navigate(Route::Analytics {}, Some(&id), UnauthorizedRedirect::RoleHome);
        assert_eq!(nav.hops.len(), 1);
        assert_eq!(nav.rendered, Route::AdminDashboard {});
    }

    #[test]
    fn unauthorized_always_settles_on_role_home() {
        for policy in POLICIES {
            for role in ALL_ROLES {
                let id = signed_in(*role);
                for route in all_routes() {
                    let nav = navigate(route.clone(), Some(&id), policy);
                    if let RouteAccess::Roles(required) = route.access() {
                        if !required.contains(role) {
                            assert_eq!(nav.rendered, role_home(*role), "{route} as {role}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn every_chain_settles_quickly() {
        let identities = [None, Some(signed_in(Role::Artist)), Some(signed_in(Role::Admin))];
        for policy in POLICIES {
            for identity in &identities {
                for route in all_routes() {
                    let nav = navigate(route.clone(), identity.as_ref(), policy);
                    assert!(nav.hops.len() <= 2, "{route}: {:?}", nav.hops);
                    assert_eq!(
                        resolve(&nav.rendered, identity.as_ref(), policy),
                        Resolution::Render(nav.rendered.clone())
                    );
                }
            }
        }
    }

    #[test]
    fn rendered_protected_route_admits_identity() {
        let identities = [None, Some(signed_in(Role::Artist)), Some(signed_in(Role::Admin))];
        for identity in &identities {
            for route in all_routes() {
                let nav = navigate(route, identity.as_ref(), UnauthorizedRedirect::Landing);
                if let RouteAccess::Roles(required) = nav.rendered.access() {
                    let role = identity.as_ref().map(Identity::role);
                    assert!(role.is_some_and(|r| required.contains(&r)));
                }
            }
        }
    }

    #[test]
    fn hops_name_the_denial_behind_them() {
        use shared_types::AppErrorKind;

        let nav = navigate(Route::AdminDashboard {}, None, UnauthorizedRedirect::Landing);
        let denial = nav.hops[0].denial().unwrap();
        assert_eq!(denial.kind, AppErrorKind::Unauthenticated);
        assert!(denial.message.starts_with("/admin"), "{}", denial.message);

        let id = signed_in(Role::Artist);
        let nav = navigate(Route::AdminDashboard {}, Some(&id), UnauthorizedRedirect::Landing);
        let kinds: Vec<Option<AppErrorKind>> =
            nav.hops.iter().map(|h| h.denial().map(|e| e.kind)).collect();
        assert_eq!(kinds, vec![Some(AppErrorKind::Unauthorized), None]);
    }

    #[test]
    fn not_found_renders_for_everyone() {
        let route = parse("/does/not/exist");
        assert_eq!(resolve(&route, None, UnauthorizedRedirect::Landing), Resolution::Render(route.clone()));
        let id = signed_in(Role::Admin);
        assert_eq!(
            resolve(&route, Some(&id), UnauthorizedRedirect::RoleHome),
            Resolution::Render(route)
        );
    }

    #[test]
    fn login_then_protected_route_renders() {
        let mut session = crate::session::Session::default();
        let nav = navigate(Route::SubmitMusic {}, session.current_identity(), UnauthorizedRedirect::Landing);
        assert_eq!(nav.rendered, Route::Login {});

        session.login("luna@example.com", "pw", Role::Artist).unwrap();
        let nav = navigate(Route::SubmitMusic {}, session.current_identity(), UnauthorizedRedirect::Landing);
        assert!(!nav.redirected());
        assert_eq!(nav.rendered, Route::SubmitMusic {});

        session.logout();
        let nav = navigate(Route::SubmitMusic {}, session.current_identity(), UnauthorizedRedirect::Landing);
        assert_eq!(nav.rendered, Route::Login {});
    }
}
