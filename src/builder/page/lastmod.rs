use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{SecondsFormat, Utc};
use log::debug;

use crate::utils::path::make_relative;

/// Source of last-modified timestamps for files
pub trait ModificationHistory {
    /// ISO-8601 timestamp of the last recorded change, if any
    fn last_modified(&self, path: &Path) -> Option<String>;
}

/// Reads commit timestamps with `git log -1 --format=%cI`
#[derive(Debug, Clone)]
pub struct GitHistory {
    root: PathBuf,
}

impl GitHistory {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        GitHistory { root: root.into() }
    }
}

impl ModificationHistory for GitHistory {
    fn last_modified(&self, path: &Path) -> Option<String> {
        let relative = make_relative(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        let output = Command::new("git")
            .args(["log", "-1", "--format=%cI"])
            .arg(&relative)
            .current_dir(&self.root)
            .output();

        match output {
            Ok(output) => {
                let timestamp = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if timestamp.is_empty() {
                    debug!("No git history for {}", relative.display());
                    None
                } else {
                    Some(timestamp)
                }
            },
            Err(e) => {
                debug!("Failed to run git for {}: {}", relative.display(), e);
                None
            },
        }
    }
}

/// Current UTC time in ISO-8601 with microseconds
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Last-modified timestamp for `path`, falling back to the current time.
/// The fallback makes output differ between runs for uncommitted files.
pub fn last_modified_or_now(history: &dyn ModificationHistory, path: &Path) -> String {
    history.last_modified(path).unwrap_or_else(now_iso)
}
