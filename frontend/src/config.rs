use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_POSTAL_LOOKUP_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_MAP_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Shape of `config.json` and of `window.__CHECKVISIT_ENV`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "POSTAL_LOOKUP_URL")]
    pub postal_lookup_url: Option<String>,
    #[serde(default, alias = "MAP_TILE_URL")]
    pub map_tile_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub postal_lookup_url: String,
    pub map_tile_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            postal_lookup_url: DEFAULT_POSTAL_LOOKUP_URL.to_string(),
            map_tile_url: DEFAULT_MAP_TILE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Fills unset or blank fields from `fallback`.
    pub fn resolve(runtime: Option<RuntimeConfig>, fallback: AppConfig) -> AppConfig {
        let runtime = runtime.unwrap_or_default();
        let pick = |value: Option<String>, default: String| {
            value
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };
        AppConfig {
            api_base_url: pick(runtime.api_base_url, fallback.api_base_url),
            postal_lookup_url: pick(runtime.postal_lookup_url, fallback.postal_lookup_url),
            map_tile_url: runtime
                .map_tile_url
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback.map_tile_url),
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn config_from_env_js() -> Option<RuntimeConfig> {
    // Optional global object: window.__CHECKVISIT_ENV = { api_base_url: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__CHECKVISIT_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn config_from_env_js() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    use anyhow::Context;

    let origin = web_sys::window()
        .ok_or_else(|| anyhow!("no window"))?
        .location()
        .origin()
        .map_err(|_| anyhow!("no location origin"))?;
    let response = reqwest::get(format!("{}/config.json", origin))
        .await
        .context("config.json request failed")?;
    if !response.status().is_success() {
        return Err(anyhow!("config.json returned {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .context("config.json is not valid")
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Err(anyhow!("runtime config is only fetched in the browser"))
}

async fn load() -> AppConfig {
    if let Some(runtime) = config_from_env_js() {
        return AppConfig::resolve(Some(runtime), AppConfig::default());
    }
    match fetch_runtime_config().await {
        Ok(runtime) => AppConfig::resolve(Some(runtime), AppConfig::default()),
        Err(err) => {
            log::info!("using built-in config: {:#}", err);
            AppConfig::default()
        }
    }
}

pub async fn await_config() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let loaded = load().await;
    APP_CONFIG.get_or_init(|| loaded).clone()
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

/// Synchronous snapshot; built-in defaults until `init` has completed.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn init() {
    let config = await_config().await;
    log::info!("api base url: {}", config.api_base_url);
}
