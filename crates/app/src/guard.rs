use shared_types::{Identity, Role};

/// Outcome of checking an identity against a view's role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in, but with a role the view does not admit.
    RedirectToDefault,
}

/// Decide whether `identity` may open a view requiring one of `required`.
///
/// An empty `required` admits any signed-in identity. An absent identity is
/// never allowed through.
pub fn authorize(identity: Option<&Identity>, required: &[Role]) -> Access {
    match identity {
        None => Access::RedirectToLogin,
        Some(identity) => {
            if required.is_empty() || required.contains(&identity.role()) {
                Access::Allow
            } else {
                Access::RedirectToDefault
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_ROLES;

    fn identity(role: Role) -> Identity {
        Identity::from_login("someone@example.com", role)
    }

    /// Every requirement a view can declare.
    const REQUIREMENTS: &[&[Role]] = &[&[], &[Role::Artist], &[Role::Admin], &[Role::Artist, Role::Admin]];

    #[test]
    fn absent_identity_always_goes_to_login() {
        for required in REQUIREMENTS {
            assert_eq!(authorize(None, required), Access::RedirectToLogin);
        }
    }

    #[test]
    fn empty_requirement_admits_any_identity() {
        for role in ALL_ROLES {
            assert_eq!(authorize(Some(&identity(*role)), &[]), Access::Allow);
        }
    }

    #[test]
    fn role_mismatch_never_allowed() {
        for role in ALL_ROLES {
            let id = identity(*role);
            for other in ALL_ROLES.iter().filter(|r| *r != role) {
                assert_eq!(authorize(Some(&id), &[*other]), Access::RedirectToDefault);
            }
        }
    }

    #[test]
    fn matching_role_allowed() {
        assert_eq!(authorize(Some(&identity(Role::Artist)), &[Role::Artist]), Access::Allow);
        assert_eq!(authorize(Some(&identity(Role::Admin)), &[Role::Admin]), Access::Allow);
        assert_eq!(
            authorize(Some(&identity(Role::Admin)), &[Role::Artist, Role::Admin]),
            Access::Allow
        );
    }

    #[test]
    fn decision_is_deterministic() {
        let id = identity(Role::Artist);
        for required in REQUIREMENTS {
            assert_eq!(authorize(Some(&id), required), authorize(Some(&id), required));
        }
    }
}
