use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::theme::AuthTheme;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_POST_LOGIN_PATH: &str = "/dashboard";

/// Raw configuration as shipped in `config.json` or injected through `env.js`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub auth_theme: Option<String>,
    pub post_login_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub auth_theme: AuthTheme,
    pub post_login_path: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_theme: AuthTheme::default(),
            post_login_path: DEFAULT_POST_LOGIN_PATH.to_string(),
        }
    }
}

impl ResolvedConfig {
    pub fn from_runtime(cfg: RuntimeConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: non_blank(cfg.api_base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            auth_theme: AuthTheme::from_config(cfg.auth_theme.as_deref()),
            post_login_path: non_blank(cfg.post_login_path).unwrap_or(defaults.post_login_path),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
        auth_theme: read_string(&obj, &["AUTH_THEME", "auth_theme"]),
        post_login_path: read_string(&obj, &["POST_LOGIN_PATH", "post_login_path"]),
    })
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__LABEVAL_ENV (env.js) wins over window.__LABEVAL_CONFIG
    read_global("__LABEVAL_ENV").or_else(|| read_global("__LABEVAL_CONFIG"))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache(resolved: ResolvedConfig) -> ResolvedConfig {
    let _ = CONFIG.set(resolved);
    current()
}

/// Cached configuration, or defaults when `init` has not finished yet.
pub fn current() -> ResolvedConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn auth_theme() -> AuthTheme {
    current().auth_theme
}

pub fn post_login_path() -> String {
    current().post_login_path
}

pub async fn load() -> ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    if let Some(cfg) = snapshot_from_globals() {
        return cache(ResolvedConfig::from_runtime(cfg));
    }
    if let Some(cfg) = fetch_runtime_config().await {
        return cache(ResolvedConfig::from_runtime(cfg));
    }
    log::warn!(
        "runtime config unavailable; using defaults ({})",
        DEFAULT_API_BASE_URL
    );
    cache(ResolvedConfig::default())
}

pub async fn await_api_base_url() -> String {
    load().await.api_base_url
}

pub async fn init() {
    let resolved = load().await;
    log::info!(
        "runtime config: api={} theme={} after_login={}",
        resolved.api_base_url,
        resolved.auth_theme.as_str(),
        resolved.post_login_path
    );
}
