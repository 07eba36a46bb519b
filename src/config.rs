use std::{collections::HashMap, time::Duration};

use config::{Config as ConfigLib, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub client: ClientConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub session_info_path: String,
    /// Raw `name=value` cookie attached to every request, standing in for the
    /// browser's ambient session cookie.
    #[serde(default)]
    pub cookie: Option<SecretString>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn session_info_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.session_info_path
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    pub locale: String,
    pub fallback_locale: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("client.base_url", "http://localhost:8000")?
            .set_default("client.session_info_path", "/api/session/info")?
            .set_default("i18n.locale", "en")?
            .set_default("i18n.fallback_locale", "en")?
            .add_source(File::with_name("config/settings").required(false));

        // Explicit overrides replace the process environment so tests do not
        // observe each other's variables.
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // APP_CLIENT__BASE_URL, APP_I18N__LOCALE, ...
            builder = builder.add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }
}
