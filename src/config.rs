use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_MAX_AVATAR_SIZE_MB: u32 = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub max_avatar_size_mb: Option<u32>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static MAX_AVATAR_SIZE_MB: OnceLock<u32> = OnceLock::new();

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

pub fn max_avatar_size_mb() -> u32 {
    MAX_AVATAR_SIZE_MB
        .get()
        .copied()
        .unwrap_or(DEFAULT_MAX_AVATAR_SIZE_MB)
}

fn cache_limits(config: &RuntimeConfig) {
    if let Some(limit) = config.max_avatar_size_mb {
        let _ = MAX_AVATAR_SIZE_MB.set(limit);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    fn read_key(obj: &js_sys::Object, upper: &str, lower: &str) -> Option<wasm_bindgen::JsValue> {
        js_sys::Reflect::get(obj, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| {
                js_sys::Reflect::get(obj, &lower.into())
                    .ok()
                    .filter(|v| !v.is_undefined() && !v.is_null())
            })
    }

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        // Host shells inject window.__HRM_ENV (env.js) or window.__HRM_CONFIG.
        let w = window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, "API_BASE_URL", "api_base_url").and_then(|v| v.as_string()),
            max_avatar_size_mb: read_key(&obj, "MAX_AVATAR_SIZE_MB", "max_avatar_size_mb")
                .and_then(|v| v.as_f64())
                .map(|v| v as u32),
        })
    }

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        read_global("__HRM_ENV")
            .filter(|cfg| cfg.api_base_url.is_some())
            .or_else(|| read_global("__HRM_CONFIG").filter(|cfg| cfg.api_base_url.is_some()))
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        if cfg.api_base_url.is_none() {
            return;
        }
        let w = match window() {
            Some(win) => win,
            None => return,
        };
        let obj = js_sys::Object::new();
        if let Some(url) = &cfg.api_base_url {
            let _ = js_sys::Reflect::set(
                &obj,
                &"api_base_url".into(),
                &wasm_bindgen::JsValue::from_str(url),
            );
        }
        if let Some(limit) = cfg.max_avatar_size_mb {
            let _ = js_sys::Reflect::set(
                &obj,
                &"max_avatar_size_mb".into(),
                &wasm_bindgen::JsValue::from_f64(limit as f64),
            );
        }
        let _ = js_sys::Reflect::set(&w, &"__HRM_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        cache_limits(&existing);
        if let Some(url) = existing.api_base_url {
            return cache_base_url(&url);
        }
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        browser::write_window_config(&cfg);
        cache_limits(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url("http://localhost:8000")
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Ok(url) = std::env::var("HRM_API_BASE_URL") {
        return cache_base_url(&url);
    }
    cache_base_url("http://localhost:8000")
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        assert_eq!(normalize_base_url("https://hr.example.com/"), "https://hr.example.com");
        assert_eq!(normalize_base_url("  https://hr.example.com  "), "https://hr.example.com");
        assert_eq!(normalize_base_url("https://hr.example.com"), "https://hr.example.com");
    }

    #[test]
    fn avatar_limit_falls_back_to_default() {
        assert_eq!(max_avatar_size_mb(), DEFAULT_MAX_AVATAR_SIZE_MB);
    }
}
