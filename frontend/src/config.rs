use chrono::Datelike;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

// Edit config/shop.json to change the shop details.
const SHOP_JSON: &str = include_str!("../config/shop.json");

const HANDLE_MIN_LEN: usize = 5;
const HANDLE_MAX_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse shop config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("`{field}` is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    #[error("`{field}` must be an absolute URL with a host")]
    NotAbsolute { field: &'static str },
    #[error("messaging handle `{handle}` is invalid: {reason}")]
    InvalidHandle { handle: String, reason: String },
}

/// Everything the landing page knows about the shop.
///
/// Loaded once at start-up and shared read-only between components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopConfig {
    pub name: String,
    /// Telegram username, without the leading `@`.
    pub messaging_handle: String,
    pub address: String,
    /// Opened by the "open map" button.
    pub primary_map_url: String,
    /// Already carries origin/destination, opened as-is.
    pub route_url: String,
    pub secondary_map_url: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default = "default_opening_hours")]
    pub opening_hours: String,
    #[serde(default = "default_logo_path")]
    pub logo_path: String,
    #[serde(default = "default_map_preview_path")]
    pub map_preview_path: String,
    #[serde(default)]
    pub copyright_year: Option<i32>,
    #[serde(default = "default_animations")]
    pub animations: bool,
}

fn default_tagline() -> String {
    "Добро пожаловать!".to_string()
}

fn default_opening_hours() -> String {
    "Ежедневно: 09:00 - 20:00".to_string()
}

fn default_logo_path() -> String {
    "/logo.png".to_string()
}

fn default_map_preview_path() -> String {
    "/map_yandex.png".to_string()
}

fn default_animations() -> bool {
    true
}

impl ShopConfig {
    /// Parses and validates a config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)?;
        check_handle(&self.messaging_handle)?;
        check_absolute_url("primary_map_url", &self.primary_map_url)?;
        check_absolute_url("route_url", &self.route_url)?;
        check_absolute_url("secondary_map_url", &self.secondary_map_url)?;
        Ok(())
    }

    /// Year printed in the footer; falls back to the current year.
    pub fn footer_year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Loads the config embedded at build time.
pub fn load_shop_config() -> Result<ShopConfig, ConfigError> {
    ShopConfig::from_json(SHOP_JSON)
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

fn check_absolute_url(field: &'static str, raw: &str) -> Result<(), ConfigError> {
    require_non_empty(field, raw)?;
    // Url::parse trims and drops these silently, but the raw string is what we link to.
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: "contains whitespace or control characters".to_string(),
        });
    }
    let parsed = Url::parse(raw).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => ConfigError::NotAbsolute { field },
        other => ConfigError::InvalidUrl {
            field,
            reason: other.to_string(),
        },
    })?;
    if !parsed.has_host() {
        return Err(ConfigError::NotAbsolute { field });
    }
    Ok(())
}

// Telegram usernames: ASCII letters, digits and underscores, 5 to 32 long,
// starting with a letter.
fn check_handle(handle: &str) -> Result<(), ConfigError> {
    require_non_empty("messaging_handle", handle)?;
    let invalid = |reason: String| ConfigError::InvalidHandle {
        handle: handle.to_string(),
        reason,
    };
    if handle.starts_with('@') {
        return Err(invalid("must not start with '@'".to_string()));
    }
    if let Some(c) = handle
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(invalid(format!("illegal character {c:?}")));
    }
    if !handle.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid("must start with a letter".to_string()));
    }
    if !(HANDLE_MIN_LEN..=HANDLE_MAX_LEN).contains(&handle.len()) {
        return Err(invalid(format!(
            "must be {HANDLE_MIN_LEN} to {HANDLE_MAX_LEN} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Рыба моя",
            "messaging_handle": "ryba_moya_gubern",
            "address": "ул. Кузнецова, 6А, Новокузнецк",
            "primary_map_url": "https://yandex.ru/maps/org/ryba_moya/143227952967/",
            "route_url": "https://yandex.ru/maps/237/novokuznetsk/?mode=routes&rtext=~53.746724%2C87.137262",
            "secondary_map_url": "https://2gis.ru/novokuznetsk/firm/70000001031547900"
        })
    }

    fn with(field: &str, value: serde_json::Value) -> String {
        let mut doc = base_json();
        doc[field] = value;
        doc.to_string()
    }

    #[test]
    fn embedded_config_is_valid() {
        let config = load_shop_config().unwrap();
        assert_eq!(config.messaging_handle, "ryba_moya_gubern");
        assert_eq!(config.footer_year(), 2025);
    }

    #[test]
    fn optional_fields_take_defaults() {
        let config = ShopConfig::from_json(&base_json().to_string()).unwrap();
        assert_eq!(config.opening_hours, "Ежедневно: 09:00 - 20:00");
        assert_eq!(config.logo_path, "/logo.png");
        assert_eq!(config.map_preview_path, "/map_yandex.png");
        assert_eq!(config.about, None);
        assert!(config.animations);
        assert_eq!(config.footer_year(), chrono::Local::now().year());
    }

    #[test]
    fn default_assets_are_documented() {
        let readme = include_str!("../public/README.md");
        let config = load_shop_config().unwrap();
        for path in [&config.logo_path, &config.map_preview_path] {
            let file = path.trim_start_matches('/');
            assert!(readme.contains(file), "{file} missing from public/README.md");
        }
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = with("telegramUsername", serde_json::json!("ryba_moya_gubern"));
        assert!(matches!(
            ShopConfig::from_json(&raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_required_field() {
        let mut doc = base_json();
        doc.as_object_mut().unwrap().remove("route_url");
        assert!(matches!(
            ShopConfig::from_json(&doc.to_string()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_name() {
        let raw = with("name", serde_json::json!("  "));
        assert!(matches!(
            ShopConfig::from_json(&raw),
            Err(ConfigError::EmptyField("name"))
        ));
    }

    #[test]
    fn rejects_relative_url() {
        let raw = with("route_url", serde_json::json!("/maps/route"));
        assert!(matches!(
            ShopConfig::from_json(&raw),
            Err(ConfigError::NotAbsolute { field: "route_url" })
        ));
    }

    #[test]
    fn rejects_url_without_host() {
        let raw = with("primary_map_url", serde_json::json!("mailto:shop@example.com"));
        assert!(matches!(
            ShopConfig::from_json(&raw),
            Err(ConfigError::NotAbsolute { field: "primary_map_url" })
        ));
    }

    #[test]
    fn rejects_unparsable_url() {
        let raw = with("secondary_map_url", serde_json::json!("https://2gis .ru/firm"));
        assert!(matches!(
            ShopConfig::from_json(&raw),
            Err(ConfigError::InvalidUrl { field: "secondary_map_url", .. })
        ));
    }

    #[test]
    fn rejects_url_with_whitespace() {
        for url in [
            " https://2gis.ru/firm ",
            "https://2gis.ru/fi\nrm",
            "https://2g\tis.ru/firm",
        ] {
            let raw = with("secondary_map_url", serde_json::json!(url));
            assert!(matches!(
                ShopConfig::from_json(&raw),
                Err(ConfigError::InvalidUrl { field: "secondary_map_url", .. })
            ));
        }
    }

    #[test]
    fn rejects_handle_not_starting_with_letter() {
        for handle in ["12345", "_ryba_"] {
            let raw = with("messaging_handle", serde_json::json!(handle));
            let err = ShopConfig::from_json(&raw).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("messaging handle `{handle}` is invalid: must start with a letter")
            );
        }
    }

    #[test]
    fn rejects_handle_with_sigil() {
        let raw = with("messaging_handle", serde_json::json!("@ryba_moya_gubern"));
        let err = ShopConfig::from_json(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "messaging handle `@ryba_moya_gubern` is invalid: must not start with '@'"
        );
    }

    #[test]
    fn rejects_handle_with_illegal_characters() {
        let raw = with("messaging_handle", serde_json::json!("ryba-moya"));
        assert!(matches!(
            ShopConfig::from_json(&raw),
            Err(ConfigError::InvalidHandle { .. })
        ));
    }

    #[test]
    fn rejects_handle_of_wrong_length() {
        let too_long = "r".repeat(33);
        for handle in ["ryba", too_long.as_str()] {
            let raw = with("messaging_handle", serde_json::json!(handle));
            assert!(matches!(
                ShopConfig::from_json(&raw),
                Err(ConfigError::InvalidHandle { .. })
            ));
        }
    }
}
