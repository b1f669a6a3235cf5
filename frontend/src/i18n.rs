//! Message lookup for screen text.
//!
//! Keys are opaque strings scoped to a namespace (`auth` unless stated
//! otherwise). Catalogs live under `frontend/locales/`.

use leptos::*;
use std::rc::Rc;

pub const DEFAULT_NAMESPACE: &str = "auth";
pub const FALLBACK_LOCALE: &str = "en";

pub trait MessageResolver {
    /// Resolves `key` within `namespace`. Unknown keys resolve to the bare key.
    fn resolve(&self, key: &str, namespace: Option<&str>) -> String;

    fn t(&self, key: &str) -> String {
        self.resolve(key, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nResolver {
    locale: String,
}

impl I18nResolver {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(crate::config::locale())
    }
}

impl MessageResolver for I18nResolver {
    fn resolve(&self, key: &str, namespace: Option<&str>) -> String {
        let full_key = format!("{}.{}", namespace.unwrap_or(DEFAULT_NAMESPACE), key);
        let text = rust_i18n::t!(full_key.as_str(), locale = self.locale.as_str()).to_string();
        if text == full_key || text.ends_with(&format!(".{}", full_key)) {
            key.to_string()
        } else {
            text
        }
    }
}

/// Shared resolver handle stored in the reactive context.
pub type Messages = Rc<dyn MessageResolver>;

pub fn provide_messages(resolver: Messages) {
    provide_context(resolver);
}

pub fn use_messages() -> Messages {
    use_context::<Messages>().unwrap_or_else(|| Rc::new(I18nResolver::from_config()))
}
