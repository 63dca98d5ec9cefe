//! Server configuration.
//!
//! Values are layered, later sources winning:
//!
//! | Source                       | Example                         |
//! |------------------------------|---------------------------------|
//! | built-in defaults            | `0.0.0.0:3000`, production      |
//! | `eventdesk.toml` (optional)  | `port = 8080`                   |
//! | `EVENTDESK_*` env variables  | `EVENTDESK_ENVIRONMENT=development` |

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Deployment mode. Development responses carry error details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub environment: Environment,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            environment: Environment::default(),
        }
    }
}

impl ApiConfig {
    pub const FILE: &'static str = "eventdesk.toml";
    pub const ENV_PREFIX: &'static str = "EVENTDESK_";

    /// The standard provider stack rooted at [`FILE`](Self::FILE).
    pub fn figment() -> Figment {
        Self::figment_with_file(Self::FILE)
    }

    /// The standard provider stack with a different config file.
    pub fn figment_with_file(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Loads the configuration from the standard sources.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// `host:port`, suitable for [`tokio::net::TcpListener::bind`].
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = ApiConfig::load()?;
            assert_eq!(config, ApiConfig::default());
            assert_eq!(config.bind_address(), "0.0.0.0:3000");
            assert!(!config.environment.is_development());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ApiConfig::FILE,
                r#"
                    host = "127.0.0.1"
                    port = 8080
                    environment = "development"
                "#,
            )?;
            let config = ApiConfig::load()?;
            assert_eq!(config.bind_address(), "127.0.0.1:8080");
            assert!(config.environment.is_development());

            jail.set_env("EVENTDESK_PORT", "9090");
            jail.set_env("EVENTDESK_ENVIRONMENT", "production");
            let config = ApiConfig::load()?;
            assert_eq!(config.port, 9090);
            assert_eq!(config.environment, Environment::Production);
            Ok(())
        });
    }

    #[test]
    fn test_rejects_unknown_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("EVENTDESK_ENVIRONMENT", "staging");
            assert!(ApiConfig::load().is_err());
            Ok(())
        });
    }
}
