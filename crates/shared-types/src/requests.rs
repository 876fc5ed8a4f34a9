use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::identity::Role;

/// Login form submission.
///
/// Credentials are never checked against an account store; the only rule is
/// that neither field is blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Password is required"))
    )]
    pub password: String,
    pub role: Role,
}

/// Track metadata collected by the submission form.
///
/// Audio and artwork files are not part of the request; nothing is uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SubmitTrackRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Track title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Artist name is required"))
    )]
    pub artist: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a genre"))
    )]
    pub genre: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a language"))
    )]
    pub language: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select at least one platform"))
    )]
    pub platforms: Vec<String>,
}

impl SubmitTrackRequest {
    /// Add `platform` if absent, remove it if present.
    pub fn toggle_platform(&mut self, platform: &str) {
        if let Some(pos) = self.platforms.iter().position(|p| p == platform) {
            self.platforms.remove(pos);
        } else {
            self.platforms.push(platform.to_string());
        }
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

#[cfg(feature = "validation")]
fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use crate::error::{AppError, AppErrorKind};
    use pretty_assertions::assert_eq;

    fn complete_submission() -> SubmitTrackRequest {
        SubmitTrackRequest {
            title: "Night Drive".into(),
            artist: "Luna Echo".into(),
            genre: "Electronic".into(),
            language: "English".into(),
            platforms: vec!["Spotify".into()],
        }
    }

    #[test]
    fn login_accepts_any_non_blank_credentials() {
        let req = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
            role: Role::Admin,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn login_rejects_blank_fields() {
        let req = LoginRequest {
            email: "   ".into(),
            password: String::new(),
            role: Role::Artist,
        };
        let err: AppError = req.validate().unwrap_err().into();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("email"), Some("Email is required"));
        assert_eq!(err.field_error("password"), Some("Password is required"));
    }

    #[test]
    fn complete_submission_is_valid() {
        assert!(complete_submission().validate().is_ok());
    }

    #[test]
    fn submission_requires_a_platform() {
        let mut req = complete_submission();
        req.platforms.clear();
        let err: AppError = req.validate().unwrap_err().into();
        assert_eq!(err.field_error("platforms"), Some("Select at least one platform"));
        assert_eq!(err.field_errors.len(), 1);
    }

    #[test]
    fn empty_submission_reports_every_field() {
        let err: AppError = SubmitTrackRequest::default().validate().unwrap_err().into();
        for field in ["title", "artist", "genre", "language", "platforms"] {
            assert!(err.field_error(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn toggle_platform_adds_then_removes() {
        let mut req = SubmitTrackRequest::default();
        req.toggle_platform("Tidal");
        assert!(req.has_platform("Tidal"));
        req.toggle_platform("Deezer");
        req.toggle_platform("Tidal");
        assert_eq!(req.platforms, vec!["Deezer".to_string()]);
    }
}
