//! App Configuration
//!
//! Compile-time defaults (`UPTASK_API_URL`, `UPTASK_ROLLBACK_ON_FAILURE`),
//! optionally overridden at page load by a `window.UPTASK_CONFIG` object.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::board::RollbackPolicy;

const DEFAULT_API_URL: &str = "http://localhost:4000/api";
const GLOBAL_CONFIG_NAME: &str = "UPTASK_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, paths like `/projects` are appended
    pub api_url: String,
    /// Revert a dropped task when the server rejects the new status
    pub rollback_on_failure: bool,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
    /// Touch hold before a drag lifts
    pub touch_delay_ms: i32,
    /// Finger travel allowed during the hold; further movement scrolls
    pub touch_tolerance_px: i32,
    pub toast_timeout_ms: u32,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            rollback_on_failure: false,
            drag_threshold_px: leptos_dragdrop::DEFAULT_ACTIVATION_DISTANCE_PX,
            touch_delay_ms: leptos_dragdrop::DEFAULT_TOUCH_DELAY_MS,
            touch_tolerance_px: leptos_dragdrop::DEFAULT_TOUCH_TOLERANCE_PX,
            toast_timeout_ms: 3000,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Fields a page may override; anything absent keeps its default
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub rollback_on_failure: Option<bool>,
    pub drag_threshold_px: Option<i32>,
    pub touch_delay_ms: Option<i32>,
    pub touch_tolerance_px: Option<i32>,
    pub toast_timeout_ms: Option<u32>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Defaults baked in at build time
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("UPTASK_API_URL") {
            config.api_url = url.to_string();
        }
        if let Some(flag) = option_env!("UPTASK_ROLLBACK_ON_FAILURE") {
            config.rollback_on_failure = matches!(flag, "1" | "true" | "yes");
        }
        config
    }

    /// Build-time defaults plus `window.UPTASK_CONFIG`, if the page defines it
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        match read_global_overrides() {
            Ok(Some(overrides)) => config.apply(overrides),
            Ok(None) => {}
            Err(e) => log::warn!("[CONFIG] ignoring window.{}: {}", GLOBAL_CONFIG_NAME, e),
        }
        config
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.api_url {
            self.api_url = url;
        }
        if let Some(flag) = overrides.rollback_on_failure {
            self.rollback_on_failure = flag;
        }
        if let Some(px) = overrides.drag_threshold_px {
            self.drag_threshold_px = px.max(0);
        }
        if let Some(ms) = overrides.touch_delay_ms {
            self.touch_delay_ms = ms.max(0);
        }
        if let Some(px) = overrides.touch_tolerance_px {
            self.touch_tolerance_px = px.max(0);
        }
        if let Some(ms) = overrides.toast_timeout_ms {
            self.toast_timeout_ms = ms;
        }
        if let Some(level) = overrides.log_level.and_then(|l| l.parse().ok()) {
            self.log_level = level;
        }
    }

    pub fn drag_activation(&self) -> leptos_dragdrop::Activation {
        leptos_dragdrop::Activation {
            distance: self.drag_threshold_px,
            touch_delay_ms: self.touch_delay_ms,
            touch_tolerance: self.touch_tolerance_px,
        }
    }

    pub fn rollback_policy(&self) -> RollbackPolicy {
        if self.rollback_on_failure {
            RollbackPolicy::Revert
        } else {
            RollbackPolicy::Keep
        }
    }
}

fn read_global_overrides() -> Result<Option<ConfigOverrides>, String> {
    let Some(window) = web_sys::window() else { return Ok(None) };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG_NAME))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value).map(Some).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.rollback_on_failure);
        assert_eq!(config.rollback_policy(), RollbackPolicy::Keep);
        assert_eq!(config.drag_threshold_px, 10);
        assert_eq!(config.touch_delay_ms, 250);
        assert_eq!(config.touch_tolerance_px, 5);
    }

    #[test]
    fn test_touch_overrides_reach_drag_activation() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"touchDelayMs":400,"touchTolerancePx":-2}"#).unwrap();
        let mut config = AppConfig::default();
        config.apply(overrides);

        let activation = config.drag_activation();
        assert_eq!(activation.distance, 10);
        assert_eq!(activation.touch_delay_ms, 400);
        assert_eq!(activation.touch_tolerance, 0);
    }

    #[test]
    fn test_partial_overrides() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"apiUrl":"https://api.example.com","rollbackOnFailure":true,"logLevel":"debug"}"#).unwrap();
        let mut config = AppConfig::default();
        config.apply(overrides);

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.rollback_policy(), RollbackPolicy::Revert);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
        assert_eq!(config.toast_timeout_ms, 3000);
    }

    #[test]
    fn test_bad_log_level_is_ignored() {
        let mut config = AppConfig::default();
        config.apply(ConfigOverrides { log_level: Some("loud".into()), ..Default::default() });
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }
}
