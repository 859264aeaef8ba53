use leptos::*;

use crate::i18n::supported_languages;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3000;

/// Client configuration, fixed at build time.
///
/// `DIARY_API_BASE` and `DIARY_LANGUAGE` override the defaults when set
/// while compiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub language: String,
    pub notice_timeout_ms: u32,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DIARY_API_BASE"), option_env!("DIARY_LANGUAGE"))
    }

    pub fn from_values(api_base: Option<&str>, language: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        let language = language
            .map(str::trim)
            .filter(|lang| supported_languages().iter().any(|(code, _)| code == lang))
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();

        Self {
            api_base,
            language,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

/// Configuration from context, or the defaults outside of `App`.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
