use std::path::Path;

use log::{info, warn};

use crate::utils::error::{BoxResult, MigrateError};

/// Validate that the site root exists and is a directory
pub fn validate_site_root(root: &Path) -> BoxResult<()> {
    if !root.exists() {
        return Err(MigrateError::Config(format!(
            "Site root does not exist: {}", root.display()
        )).into());
    }

    if !root.is_dir() {
        return Err(MigrateError::Config(format!(
            "Site root is not a directory: {}", root.display()
        )).into());
    }

    info!("Site root: {}", root.display());
    Ok(())
}

/// Warn about post directories that will contribute nothing
pub fn check_post_directories(dirs: &[&Path]) {
    for dir in dirs {
        if !dir.exists() {
            warn!("Posts directory does not exist: {}", dir.display());
        } else if !dir.is_dir() {
            warn!("Posts path exists but is not a directory: {}", dir.display());
        }
    }
}

/// Validate the base URL read from `_config.yml`
pub fn validate_base_url(base_url: &str) {
    if base_url.is_empty() {
        warn!("No `url` configured; sitemap and feed links will be root-relative");
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") && !base_url.starts_with('/') {
        warn!("Base URL has no scheme: {}", base_url);
    }
}
