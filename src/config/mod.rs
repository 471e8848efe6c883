#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const ACCESS_TOKEN_VAR: &str = "SUPABASE_ACCESS_TOKEN";

/// Connection settings for the backend service.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ServiceConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_ANON_KEY` (both required) and the
    /// optional `SUPABASE_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: required_var(URL_VAR)?,
            anon_key: required_var(ANON_KEY_VAR)?,
            access_token: env::var(ACCESS_TOKEN_VAR).ok().filter(|t| !t.is_empty()),
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(GeoError::MissingConfigError {
            field: name.to_string(),
        }),
    }
}

impl ConfigProvider for ServiceConfig {
    fn service_url(&self) -> &str {
        &self.url
    }

    fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.url", &self.url)?;
        validate_non_empty_string("service.anon_key", &self.anon_key)?;
        Ok(())
    }
}
