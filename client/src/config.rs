//! Public client configuration: course API base URL, optional API token, and
//! the identity provider's frontend API URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are baked in at build time from `COURSEHUB_*` environment variables.
//! The host server re-reads the same variables at startup and embeds them as a
//! JSON `<script>` element in the page shell; in the browser those embedded
//! values override the build-time ones so deployments can change endpoints
//! without rebuilding the WASM bundle. Blank values never override.
//!
//! Everything here ships to the browser; do not store secrets.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "coursehub-config";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub identity_url: String,
}

impl ClientConfig {
    /// Build from raw values, treating blank values as absent.
    pub fn from_values(
        api_base_url: Option<&str>,
        api_token: Option<&str>,
        identity_url: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.and_then(normalize_value).unwrap_or_default(),
            api_token: api_token.and_then(normalize_value),
            identity_url: identity_url.and_then(normalize_value).unwrap_or_default(),
        }
    }

    /// Values captured from the environment when the client was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("COURSEHUB_API_URL"),
            option_env!("COURSEHUB_API_TOKEN"),
            option_env!("COURSEHUB_IDENTITY_URL"),
        )
    }

    /// Build-time values with the page's embedded overrides applied.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Some(runtime) = runtime_config() {
            config.apply_overrides(runtime);
        }
        config
    }

    /// Replace each field with its override unless the override is blank.
    pub fn apply_overrides(&mut self, runtime: Self) {
        if let Some(value) = normalize_value(&runtime.api_base_url) {
            self.api_base_url = value;
        }
        if let Some(value) = runtime.api_token.as_deref().and_then(normalize_value) {
            self.api_token = Some(value);
        }
        if let Some(value) = normalize_value(&runtime.identity_url) {
            self.identity_url = value;
        }
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_embedded_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json.replace("</", "<\\/"),
            Err(e) => {
                log::warn!("config: failed to encode client config: {e}");
                "{}".to_owned()
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<ClientConfig> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?;
    let text = element.text_content()?;
    parse_embedded(&text)
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<ClientConfig> {
    None
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_embedded(text: &str) -> Option<ClientConfig> {
    match serde_json::from_str(text) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("config: ignoring malformed embedded config: {e}");
            None
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
