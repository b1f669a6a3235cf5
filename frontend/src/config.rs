use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_LOCALE: &str = "es";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub locale: Option<String>,
}

impl RuntimeConfig {
    /// Fills the gaps of `self` with values from `other`.
    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            locale: self.locale.or(other.locale),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.locale.is_some()
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static LOCALE: OnceLock<String> = OnceLock::new();

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    // Accept upper and lower case keys
    let lookup = |lower: &str, upper: &str| {
        js_sys::Reflect::get(&obj, &lower.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &upper.into()).ok())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        api_base_url: lookup("api_base_url", "API_BASE_URL"),
        locale: lookup("locale", "LOCALE"),
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__ACCOUNT_PORTAL_ENV = { API_BASE_URL: "...", LOCALE: "..." }
    let env = read_global("__ACCOUNT_PORTAL_ENV").unwrap_or_default();
    // window.__ACCOUNT_PORTAL_CONFIG = { api_base_url: "...", locale: "..." }
    let window_config = read_global("__ACCOUNT_PORTAL_CONFIG").unwrap_or_default();
    env.or(window_config)
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let base = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| anyhow::anyhow!("no window origin"))?;
    let resp = reqwest::get(format!("{}/config.json", base)).await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

fn cache(cfg: &RuntimeConfig) {
    let _ = API_BASE_URL.set(
        cfg.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
    );
    let _ = LOCALE.set(
        cfg.locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
    );
}

async fn resolve_runtime_config() -> RuntimeConfig {
    let from_globals = snapshot_from_globals();
    if from_globals.is_complete() {
        return from_globals;
    }
    match fetch_runtime_config().await {
        Ok(fetched) => from_globals.or(fetched),
        Err(err) => {
            log::warn!("Falling back to default runtime config: {}", err);
            from_globals
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    init().await;
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Active UI locale. Falls back to the default until `init` has run.
pub fn locale() -> String {
    LOCALE
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

pub async fn init() {
    if API_BASE_URL.get().is_some() {
        return;
    }
    let cfg = resolve_runtime_config().await;
    cache(&cfg);
}
