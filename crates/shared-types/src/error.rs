use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// A protected view was requested with nobody signed in.
    Unauthenticated,
    /// A protected view was requested by an identity with the wrong role.
    Unauthorized,
    /// The login form submission was refused.
    LoginRejected,
    ValidationError,
    NotFound,
    ConfigError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Unauthenticated => write!(f, "Unauthenticated"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::LoginRejected => write!(f, "LoginRejected"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Structured application error shared by the UI and its data types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Message shown when an error carries no usable text.
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthenticated, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn login_rejected(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::LoginRejected, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ConfigError, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation error for a single field.
    pub fn validation_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    /// Text suitable for an error banner.
    ///
    /// Falls back to a generic message when the error has none.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }

    /// Message for a single form field, if the error names it.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the highlighted fields.", field_errors)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.message().to_string())
    }
}
