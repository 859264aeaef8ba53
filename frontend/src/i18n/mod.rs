use std::collections::HashMap;
use leptos::*;
use shared::ValidationError;

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

/// I18n context that provides translation functions
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: String) -> Self {
        let translations = load_translations(&language);
        Self {
            language: create_rw_signal(language),
            translations: create_rw_signal(translations),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations.with(|t| lookup(t, key))
    }

    /// Translate a key and replace its `{name}` placeholder
    pub fn t_with(&self, key: &str, name: &str, value: &str) -> String {
        interpolate(&self.t(key), name, value)
    }

    /// "N comments", with the singular form for one
    pub fn comments_count(&self, count: i32) -> String {
        self.translations.with(|t| comments_count_label(t, count))
    }

    /// Localized text for a rejected comment body
    pub fn validation_message(&self, err: &ValidationError) -> String {
        self.translations.with(|t| validation_label(t, err))
    }
}

fn lookup(translations: &Translations, key: &str) -> String {
    translations
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

fn interpolate(template: &str, name: &str, value: &str) -> String {
    template.replace(&format!("{{{}}}", name), value)
}

fn comments_count_label(translations: &Translations, count: i32) -> String {
    if count == 1 {
        lookup(translations, "entry.comments_count_one")
    } else {
        interpolate(
            &lookup(translations, "entry.comments_count"),
            "count",
            &count.to_string(),
        )
    }
}

fn validation_label(translations: &Translations, err: &ValidationError) -> String {
    match err {
        ValidationError::EmptyComment => lookup(translations, "validation.empty_comment"),
        ValidationError::CommentTooLong { max, actual } => {
            let template = lookup(translations, "validation.comment_too_long");
            let template = interpolate(&template, "actual", &actual.to_string());
            interpolate(&template, "max", &max.to_string())
        }
    }
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    let json = match lang {
        "de" => include_str!("../../translations/de.json"),
        _ => include_str!("../../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Provide I18n context to the application
pub fn provide_i18n(language: String) {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

/// Get the list of supported languages
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English"),
        ("de", "Deutsch"),
    ]
}
