use dioxus::prelude::*;
use shared_types::{AppError, Identity, LoginRequest, Role};
use validator::Validate;

/// Banner text for a refused login.
pub const LOGIN_REJECTED_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Check a login submission and synthesize the identity it signs in as.
///
/// There is no account store. Any submission with a non-blank email and
/// password succeeds with the requested role; blank fields are refused as
/// `LoginRejected` with per-field messages.
pub fn authenticate(request: &LoginRequest) -> Result<Identity, AppError> {
    request.validate().map_err(|errors| AppError {
        field_errors: AppError::from(errors).field_errors,
        ..AppError::login_rejected(LOGIN_REJECTED_MESSAGE)
    })?;
    Ok(Identity::from_login(&request.email, request.role))
}

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// Sign in, replacing any identity already present.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<Identity, AppError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let identity = authenticate(&request)?;
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the identity. A no-op when nobody is signed in.
    pub fn logout(&mut self) {
        self.identity = None;
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Session shared through context.
///
/// Created once by `App` and written only by `login`/`logout`. Every
/// component reading it subscribes to the signal, so the header and the
/// route gate re-render before the next navigation decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::default()),
        }
    }

    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<Identity, AppError> {
        let result = self.session.write().login(email, password, role);
        match &result {
            Ok(identity) => tracing::info!(
                role = %identity.role(),
                email = identity.email(),
                "Signed in"
            ),
            Err(e) => tracing::warn!(error = %e, "Login rejected"),
        }
        result
    }

    pub fn logout(&mut self) {
        let was_signed_in = self.session.peek().is_authenticated();
        self.session.write().logout();
        if was_signed_in {
            tracing::info!("Signed out");
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session.read().current_identity().cloned()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    #[test]
    fn login_sets_requested_role() {
        for role in [Role::Artist, Role::Admin] {
            let mut session = Session::default();
            let identity = session.login("someone@example.com", "secret", role).unwrap();
            assert_eq!(identity.role(), role);
            assert_eq!(session.current_identity().map(Identity::role), Some(role));
        }
    }

    #[test]
    fn login_accepts_any_non_blank_credentials() {
        let mut session = Session::default();
        assert!(session.login("not-an-email", "x", Role::Artist).is_ok());
        assert!(session.login("a@b.com", "hunter2", Role::Admin).is_ok());
        assert_eq!(session.current_identity().unwrap().role(), Role::Admin);
    }

    #[test]
    fn login_rejects_blank_fields_and_keeps_state() {
        let mut session = Session::default();
        let err = session.login("", "   ", Role::Artist).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::LoginRejected);
        assert_eq!(err.message, LOGIN_REJECTED_MESSAGE);
        assert_eq!(err.field_error("email"), Some("Email is required"));
        assert_eq!(err.field_error("password"), Some("Password is required"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn rejected_login_does_not_sign_out_existing_identity() {
        let mut session = Session::default();
        session.login("luna@example.com", "pw", Role::Artist).unwrap();
        assert!(session.login("", "", Role::Admin).is_err());
        assert_eq!(session.current_identity().unwrap().email(), "luna@example.com");
    }

    #[test]
    fn login_derives_display_name() {
        let mut session = Session::default();
        let identity = session.login("luna.echo@example.com", "pw", Role::Artist).unwrap();
        assert_eq!(identity.name(), "Luna Echo");
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::default();
        session.logout();
        assert_eq!(session, Session::default());
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn login_then_logout_clears_identity() {
        let role: Role = "admin".parse().unwrap();
        let mut session = Session::default();
        session.login("a@b.com", "x", role).unwrap();
        session.logout();
        assert!(session.current_identity().is_none());
    }
}
