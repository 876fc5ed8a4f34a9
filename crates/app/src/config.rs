use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static LOAD_ERROR: OnceLock<Option<AppError>> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the bundled config into the global `OnceLock`. Only the first call
/// has effect. A file that fails to parse yields the defaults; the error is
/// kept for [`load_error`] so it can be logged once tracing is up.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match AppConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => {
            let _ = LOAD_ERROR.set(None);
            config
        }
        Err(e) => {
            let _ = LOAD_ERROR.set(Some(e));
            AppConfig::default()
        }
    })
}

/// The loaded config, loading it on first use.
pub fn config() -> &'static AppConfig {
    load_config()
}

/// Why the bundled config was rejected, if it was.
pub fn load_error() -> Option<&'static AppError> {
    LOAD_ERROR.get().and_then(Option::as_ref)
}

/// Log level named by the config; unknown names fall back to `INFO`.
pub fn log_level(config: &AppConfig) -> tracing::Level {
    config
        .logging
        .level
        .trim()
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Role, UnauthorizedRedirect};

    #[test]
    fn bundled_config_loads_without_error() {
        let config = load_config();
        assert!(load_error().is_none());
        assert_eq!(config.routing.unauthorized_redirect, UnauthorizedRedirect::Landing);
        assert_eq!(config.session.default_role, Role::Artist);
    }

    #[test]
    fn config_is_loaded_once() {
        assert!(std::ptr::eq(config(), load_config()));
    }

    #[test]
    fn log_level_parses_names() {
        let mut config = AppConfig::default();
        assert_eq!(log_level(&config), tracing::Level::INFO);

        config.logging.level = "debug".into();
        assert_eq!(log_level(&config), tracing::Level::DEBUG);

        config.logging.level = " WARN ".into();
        assert_eq!(log_level(&config), tracing::Level::WARN);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.logging.level = "chatty".into();
        assert_eq!(log_level(&config), tracing::Level::INFO);
    }
}
