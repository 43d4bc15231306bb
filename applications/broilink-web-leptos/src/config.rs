#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Runtime configuration injected by the hosting page through `window.ENV`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin. Empty means same origin (dev proxy).
    pub api_url: String,
    /// Path prefix prepended to every service path.
    pub api_prefix: String,
    pub timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from window.ENV, keeping defaults for missing keys
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: env_value("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            api_prefix: env_value("API_PREFIX")
                .map(|prefix| normalize_prefix(&prefix))
                .unwrap_or(defaults.api_prefix),
            timeout_ms: env_value("API_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }

    /// Full URL for a service path such as `/owner/dashboard`
    pub fn service_url(&self, path: &str) -> String {
        format!("{}{}{}", self.api_url, self.api_prefix, path)
    }

    /// URL outside the service prefix (e.g. the sanctum cookie endpoint)
    pub fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// "api/" -> "/api", "" -> "", "/" -> ""
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Read a string value from window.ENV
fn env_value(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        return js_sys::Reflect::get(&env, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_api_prefix() {
        let config = AppConfig::default();
        assert_eq!(config.service_url("/owner/dashboard"), "/api/owner/dashboard");
        assert_eq!(config.root_url("/sanctum/csrf-cookie"), "/sanctum/csrf-cookie");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_service_url_without_prefix() {
        let config = AppConfig {
            api_url: "https://broilink.example".to_string(),
            api_prefix: normalize_prefix("/"),
            timeout_ms: 1000,
        };
        assert_eq!(
            config.service_url("/peternak/dashboard"),
            "https://broilink.example/peternak/dashboard"
        );
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("api/"), "/api");
        assert_eq!(normalize_prefix("/api"), "/api");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix(" / "), "");
    }

    #[test]
    fn test_from_env_outside_browser_is_default() {
        assert_eq!(AppConfig::from_env(), AppConfig::default());
    }
}
