use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub category_url: String,
    pub reply_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://opentdb.com/api.php".into(),
            category_url: "https://opentdb.com/api_category.php".into(),
            reply_timeout_secs: 30,
        }
    }
}

/// Layered load order: defaults, then an optional `trivia.toml` in the
/// working directory, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("trivia.toml") {
        apply_file_layer(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("TRIVIA_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Ok(v) = std::env::var("TRIVIA_CATEGORY_URL") {
        settings.category_url = v;
    }
    if let Ok(v) = std::env::var("APP__CATEGORY_URL") {
        settings.category_url = v;
    }

    if let Ok(v) = std::env::var("APP__REPLY_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.reply_timeout_secs = parsed;
        }
    }

    settings
}

fn apply_file_layer(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("api_base_url") {
            settings.api_base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("category_url") {
            settings.category_url = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_opentdb() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "https://opentdb.com/api.php");
        assert_eq!(settings.category_url, "https://opentdb.com/api_category.php");
        assert_eq!(settings.reply_timeout_secs, 30);
    }

    #[test]
    fn file_layer_overrides_endpoints() {
        let mut settings = Settings::default();
        apply_file_layer(
            &mut settings,
            "api_base_url = \"http://127.0.0.1:9000/api.php\"\ncategory_url = \"http://127.0.0.1:9000/api_category.php\"\n",
        );
        assert_eq!(settings.api_base_url, "http://127.0.0.1:9000/api.php");
        assert_eq!(
            settings.category_url,
            "http://127.0.0.1:9000/api_category.php"
        );
    }

    #[test]
    fn malformed_file_layer_is_ignored() {
        let mut settings = Settings::default();
        apply_file_layer(&mut settings, "not valid toml ===");
        assert_eq!(settings.api_base_url, "https://opentdb.com/api.php");
    }
}
