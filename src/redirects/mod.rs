use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::builder::page::Language;

pub mod matcher;
pub mod pattern;
pub mod report;
pub mod source;
pub mod table;

pub use matcher::SlugMatcher;
pub use pattern::{parse_old_url, LegacyUrl};
pub use report::{format_unmatched, RedirectFormat};
pub use source::{known_slugs, read_urls};
pub use table::SlugTable;

/// A legacy post URL whose slug matches no current post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmatched {
    pub url: String,
    pub slug: String,
}

/// Redirects keyed and sorted by old path, plus the URLs left unmatched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectResult {
    pub redirects: BTreeMap<String, String>,
    pub unmatched: Vec<Unmatched>,
}

/// Location of a post on the new site
pub fn new_post_path(language: Language, slug: &str) -> String {
    match language {
        Language::Korean => format!("/blog/{}/", slug),
        Language::English => format!("/en/blog/{}/", slug),
    }
}

/// Map each stale URL to its new location. Duplicate old paths keep the
/// last mapping seen.
pub fn generate_redirects<I, S>(urls: I, known: &BTreeSet<String>, table: &SlugTable) -> RedirectResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let matcher = SlugMatcher::new(known, table);
    let mut result = RedirectResult::default();

    for url in urls {
        let url = url.as_ref();
        match parse_old_url(url) {
            Some(LegacyUrl::Static { old, new }) => {
                result.redirects.insert(old.to_string(), new.to_string());
            },
            Some(LegacyUrl::Post { slug, language, old }) => match matcher.reconcile(&slug) {
                Some(current) => {
                    result.redirects.insert(old, new_post_path(language, current));
                },
                None => result.unmatched.push(Unmatched { url: url.to_string(), slug }),
            },
            None => debug!("Ignoring URL with unknown shape: {}", url),
        }
    }

    result
}
