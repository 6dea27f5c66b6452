use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Language a post is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Korean,
    English,
}

impl Language {
    /// Two-letter language tag
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A directory of dated posts and how its posts are addressed
#[derive(Debug, Clone)]
pub struct PostSource {
    pub dir: PathBuf,

    /// URL segment prepended to post paths (e.g. `en`), empty for none
    pub prefix: String,

    pub language: Language,
}

impl PostSource {
    pub fn new<P: Into<PathBuf>>(dir: P, prefix: &str, language: Language) -> Self {
        PostSource {
            dir: dir.into(),
            prefix: prefix.to_string(),
            language,
        }
    }
}

/// A post as it appears in the sitemap and feed
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub title: String,

    /// Site-relative path with leading and trailing slash
    pub url_path: String,

    /// Publish date from the file name, midnight UTC
    pub published_at: DateTime<Utc>,

    pub description: String,

    /// ISO-8601 timestamp of the last change
    pub lastmod: String,

    pub tags: Vec<String>,

    pub language: Language,
}

/// A non-post page listed in the sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEntry {
    pub url_path: String,
    pub lastmod: Option<String>,
}
