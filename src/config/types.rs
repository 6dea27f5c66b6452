use std::fmt;
use std::path::PathBuf;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// Feed title used when `_config.yml` does not provide one
pub const DEFAULT_SITE_TITLE: &str = "Blog";

/// Model used for translation when `TRANSLATION_MODEL` is unset
pub const DEFAULT_TRANSLATION_MODEL: &str = "gpt-4.1-mini";

/// Chat-completion API root used when `OPENAI_BASE_URL` is unset
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Site-wide values the sitemap and feed need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Absolute site root without a trailing slash (may be empty)
    pub base_url: String,

    /// Feed channel title
    pub title: String,

    /// Feed channel description
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: String::new(),
            title: DEFAULT_SITE_TITLE.to_string(),
            description: String::new(),
        }
    }
}

/// The subset of a Jekyll `_config.yml` this tool reads.
///
/// Deserialization is lenient the way Jekyll is: unknown keys are ignored
/// and a repeated key keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct JekyllConfig {
    pub url: Option<String>,
    pub baseurl: Option<String>,
    pub theme_settings: Option<ThemeSettings>,
}

/// `theme_settings` block of the Jekyll theme; the feed title and
/// description come from here rather than the top level
#[derive(Debug, Clone, Default)]
pub struct ThemeSettings {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl<'de> Deserialize<'de> for JekyllConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct JekyllConfigVisitor;

        impl<'de> Visitor<'de> for JekyllConfigVisitor {
            type Value = JekyllConfig;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a Jekyll configuration mapping")
            }

            fn visit_unit<E: de::Error>(self) -> Result<JekyllConfig, E> {
                Ok(JekyllConfig::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JekyllConfig, A::Error> {
                let mut config = JekyllConfig::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "url" => config.url = map.next_value()?,
                        "baseurl" => config.baseurl = map.next_value()?,
                        "theme_settings" => config.theme_settings = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        },
                    }
                }
                Ok(config)
            }
        }

        deserializer.deserialize_any(JekyllConfigVisitor)
    }
}

impl<'de> Deserialize<'de> for ThemeSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ThemeSettingsVisitor;

        impl<'de> Visitor<'de> for ThemeSettingsVisitor {
            type Value = ThemeSettings;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a theme_settings mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ThemeSettings, A::Error> {
                let mut settings = ThemeSettings::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "title" => settings.title = map.next_value()?,
                        "description" => settings.description = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        },
                    }
                }
                Ok(settings)
            }
        }

        deserializer.deserialize_map(ThemeSettingsVisitor)
    }
}

/// Settings for the translate command
#[derive(Debug, Clone)]
pub struct TranslateConfig {
    /// Bearer credential for the completion endpoint
    pub api_key: String,

    /// Model identifier sent with every request
    pub model: String,

    /// API root, e.g. `https://api.openai.com/v1`
    pub api_base: String,

    /// Directory holding the Korean posts
    pub source_dir: PathBuf,

    /// Directory the English posts are written to
    pub dest_dir: PathBuf,

    /// Explicit posts to (re-)translate; empty means every untranslated post
    pub only: Vec<PathBuf>,
}
