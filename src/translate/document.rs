use std::path::Path;

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::front_matter::split_document;
use crate::translate::prompt::dump_front_matter;
use crate::translate::response::{contains_hangul, value_text};
use crate::utils::error::{BoxResult, MigrateError};
use crate::utils::fs::read_file;

/// A post as read from the source directory
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePost {
    pub front_matter: Mapping,
    pub body: String,
}

/// Parse a post's YAML front matter and body. A post without front
/// matter has an empty mapping; front matter that is not a YAML mapping
/// is an error.
pub fn parse_source_post(raw: &str) -> Result<SourcePost, MigrateError> {
    let split = split_document(raw);
    let front_matter = match split.front_matter.as_deref() {
        None => Mapping::new(),
        Some(text) => match serde_yaml::from_str::<Value>(text)? {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => return Err(MigrateError::FrontMatter("front matter is not a mapping".to_string())),
        },
    };

    Ok(SourcePost { front_matter, body: split.body.trim().to_string() })
}

pub fn read_source_post<P: AsRef<Path>>(path: P) -> BoxResult<SourcePost> {
    let raw = read_file(path.as_ref())?;
    parse_source_post(&raw).map_err(|e| {
        MigrateError::Generic(format!("{}: {}", path.as_ref().display(), e)).into()
    })
}

/// Combine the translated front matter with the original: an empty
/// translation falls back to the original, and original keys the model
/// dropped are carried over in their original order.
pub fn merge_front_matter(translated: Mapping, original: &Mapping) -> Mapping {
    if translated.is_empty() {
        warn!("Could not parse translated front matter, using original");
        return original.clone();
    }

    let mut merged = translated;
    for (key, value) in original {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Warn about `title` or `description` values still in Korean
pub fn check_untranslated(front_matter: &Mapping) -> Vec<&'static str> {
    let mut flagged = Vec::new();
    for field in ["title", "description"] {
        if let Some(value) = front_matter.get(field) {
            let text = value_text(value);
            if contains_hangul(&text) {
                warn!("{} still contains Korean: {}", field, text.trim());
                flagged.push(field);
            }
        }
    }
    flagged
}

/// Render a post as written to disk
pub fn render_document(front_matter: &Mapping, body: &str) -> BoxResult<String> {
    Ok(format!("---\n{}\n---\n\n{}\n", dump_front_matter(front_matter)?, body.trim()))
}
