use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::identity::Role;

/// Where a signed-in user is sent when they open a view reserved for the
/// other role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnauthorizedRedirect {
    /// The public landing page. A signed-in user is bounced from there to
    /// their role's home view, so the final view is the same as `RoleHome`.
    #[default]
    Landing,
    /// Straight to the role's own home view.
    RoleHome,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoutingConfig {
    #[serde(default)]
    pub unauthorized_redirect: UnauthorizedRedirect,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    /// Role tab selected when the login page opens.
    #[serde(default)]
    pub default_role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// A `tracing` level name: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and key is optional; anything missing takes its default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse a TOML document into a config.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}
