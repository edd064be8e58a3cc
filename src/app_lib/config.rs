//! Build-time configuration for the API endpoint and toast lifetime with an
//! optional runtime override. The runtime config is read from
//! `window.GOBARBER_CONFIG` (if present) so static deployments can point at a
//! different API without rebuilding. Configuration values are public; do not
//! store secrets here.

/// How long a toast stays on screen when nothing else is configured.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("GOBARBER_API_BASE_URL").unwrap_or("");
        let toast_duration_ms = option_env!("GOBARBER_TOAST_DURATION_MS")
            .and_then(parse_duration_ms)
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            toast_duration_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins the configured API base with `path`.
    pub fn url_for(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    toast_duration_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.toast_duration_ms {
        config.toast_duration_ms = value;
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("GOBARBER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        toast_duration_ms: read_runtime_value(&object, "toast_duration_ms")
            .as_deref()
            .and_then(parse_duration_ms),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = match value.as_f64() {
        Some(number) => number.to_string(),
        None => value.as_string()?,
    };
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_duration_ms(value: &str) -> Option<u32> {
    normalize_runtime_value(value)?
        .parse::<u32>()
        .ok()
        .filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_TOAST_DURATION_MS, RuntimeConfig, apply_runtime_overrides,
        build_url_with_base, normalize_runtime_value, parse_duration_ms,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.gobarber.dev "),
            Some("https://api.gobarber.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            toast_duration_ms: 5_000,
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            toast_duration_ms: parse_duration_ms(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.toast_duration_ms, 5_000);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            toast_duration_ms: parse_duration_ms("1500"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.toast_duration_ms, 1_500);
    }

    #[test]
    fn parse_duration_rejects_zero_and_garbage() {
        assert_eq!(parse_duration_ms("0"), None);
        assert_eq!(parse_duration_ms("soon"), None);
        assert_eq!(parse_duration_ms(" 250 "), Some(250));
        assert_eq!(AppConfig::default().toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn build_url_joins_with_single_slash() {
        assert_eq!(
            build_url_with_base("https://api.gobarber.dev/", "/users"),
            "https://api.gobarber.dev/users"
        );
        assert_eq!(
            build_url_with_base("https://api.gobarber.dev", "password/forgot"),
            "https://api.gobarber.dev/password/forgot"
        );
        assert_eq!(build_url_with_base("  ", "/password/reset"), "/password/reset");
    }
}
