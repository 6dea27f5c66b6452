use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::types::{JekyllConfig, SiteConfig, TranslateConfig};
use crate::utils::error::{BoxResult, MigrateError};

/// Configuration file looked up in the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// Load the site configuration from `_config.yml` in `root`, or from an
/// explicit file. A missing file is an error.
pub fn load_site_config<P: AsRef<Path>>(root: P, config_file: Option<&Path>) -> BoxResult<SiteConfig> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => root.as_ref().join(CONFIG_FILE),
    };

    if !path.exists() {
        return Err(MigrateError::Config(format!(
            "Configuration file not found: {}", path.display()
        )).into());
    }

    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path)
        .map_err(|e| MigrateError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    let config = parse_site_config(&content)
        .map_err(|e| MigrateError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse `_config.yml` content into a [`SiteConfig`]
pub fn parse_site_config(content: &str) -> Result<SiteConfig, serde_yaml::Error> {
    // An empty document deserializes as null
    let jekyll: JekyllConfig = if content.trim().is_empty() {
        JekyllConfig::default()
    } else {
        serde_yaml::from_str(content)?
    };

    let mut site = SiteConfig {
        base_url: join_base_url(
            jekyll.url.as_deref().unwrap_or(""),
            jekyll.baseurl.as_deref().unwrap_or(""),
        ),
        ..SiteConfig::default()
    };

    if let Some(theme) = jekyll.theme_settings {
        if let Some(title) = theme.title.filter(|t| !t.is_empty()) {
            site.title = title;
        }
        if let Some(description) = theme.description.filter(|d| !d.is_empty()) {
            site.description = description;
        }
    }

    Ok(site)
}

/// Combine Jekyll's `url` and `baseurl` into one root without a trailing slash
pub fn join_base_url(url: &str, baseurl: &str) -> String {
    let url = url.trim_end_matches('/');
    let baseurl = baseurl.trim_matches('/');

    let base = if baseurl.is_empty() {
        url.to_string()
    } else if url.is_empty() {
        format!("/{}", baseurl)
    } else {
        format!("{}/{}", url, baseurl)
    };

    base.trim_end_matches('/').to_string()
}

/// Split the `ONLY_FILES` environment value into paths, one per line
pub fn parse_only_files(value: &str) -> Vec<PathBuf> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Assemble the translate configuration. The API key is required; every
/// other value has already been defaulted by the command line layer.
pub fn load_translate_config(
    api_key: Option<String>,
    model: String,
    api_base: String,
    source_dir: PathBuf,
    dest_dir: PathBuf,
    only: Vec<PathBuf>,
    only_env: Option<&str>,
) -> BoxResult<TranslateConfig> {
    let api_key = match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => key,
        None => return Err(MigrateError::MissingEnv("OPENAI_API_KEY").into()),
    };

    let mut only = only;
    if let Some(value) = only_env {
        only.extend(parse_only_files(value));
    }

    if model.trim().is_empty() {
        warn!("Empty model identifier; requests will likely be rejected");
    }

    Ok(TranslateConfig {
        api_key,
        model,
        api_base: api_base.trim_end_matches('/').to_string(),
        source_dir,
        dest_dir,
        only,
    })
}
