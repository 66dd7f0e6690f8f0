//! Build-time application settings.
//!
//! # Design
//! - Values are baked in at compile time (`option_env!`) because the wasm
//!   bundle has no process environment.
//! - [`Settings::resolve`] holds the fallback rules so they are testable.

/// Backend used when `PULSE_API_BASE_URL` is unset or empty.
pub const DEFAULT_API_BASE_URL: &str = "https://marcstreeter.dev";
/// Display name of the site.
pub const APP_NAME: &str = "MarcStreeter.dev";

/// Resolved application settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL all endpoints are joined onto (no trailing slash).
    pub api_base_url: String,
    /// Display name.
    pub app_name: &'static str,
    /// Version shown in the shell footer.
    pub app_version: String,
}

impl Settings {
    /// Settings from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("PULSE_API_BASE_URL"),
            option_env!("PULSE_APP_VERSION"),
        )
    }

    /// Apply fallbacks to raw environment values.
    #[must_use]
    pub fn resolve(api_base_url: Option<&str>, app_version: Option<&str>) -> Self {
        let api_base_url = non_empty(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let app_version = non_empty(app_version)
            .unwrap_or(env!("CARGO_PKG_VERSION"))
            .to_string();
        Self {
            api_base_url,
            app_name: APP_NAME,
            app_version,
        }
    }

    /// Absolute URL for an endpoint, with or without its leading slash.
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.api_base_url)
        } else {
            format!("{}/{endpoint}", self.api_base_url)
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_when_unset_or_blank() {
        let settings = Settings::resolve(None, None);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(Settings::resolve(Some("  "), Some("")), settings);
    }

    #[test]
    fn explicit_values_win() {
        let settings = Settings::resolve(Some("http://localhost:8000/"), Some("2.3.4"));
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.app_version, "2.3.4");
        assert_eq!(settings.app_name, APP_NAME);
    }

    #[test]
    fn api_url_normalises_leading_slash() {
        let settings = Settings::resolve(Some("http://api.test"), None);
        assert_eq!(settings.api_url("health/general"), "http://api.test/health/general");
        assert_eq!(settings.api_url("/health/general"), "http://api.test/health/general");
        assert_eq!(
            settings.api_url("health/llm?force_refresh=true"),
            "http://api.test/health/llm?force_refresh=true"
        );
    }
}
