use std::collections::BTreeSet;

use crate::redirects::table::SlugTable;

/// Reconciles slugs from old URLs with the slugs of current posts
#[derive(Debug)]
pub struct SlugMatcher<'a> {
    known: &'a BTreeSet<String>,
    table: &'a SlugTable,
}

impl<'a> SlugMatcher<'a> {
    pub fn new(known: &'a BTreeSet<String>, table: &'a SlugTable) -> Self {
        SlugMatcher { known, table }
    }

    /// Find the current slug for `slug`. First match wins:
    ///
    /// 1. exact match
    /// 2. case-insensitive match, as is or with hyphens read as spaces
    /// 3. the manual table, if its target is a current slug
    pub fn reconcile(&self, slug: &str) -> Option<&'a str> {
        if let Some(exact) = self.known.get(slug) {
            return Some(exact);
        }

        let lowered = slug.to_lowercase();
        let spaced = slug.replace('-', " ").to_lowercase();
        for candidate in self.known {
            let candidate_lower = candidate.to_lowercase();
            if candidate_lower == spaced || candidate_lower == lowered {
                return Some(candidate);
            }
        }

        self.table
            .get(slug)
            .and_then(|mapped| self.known.get(mapped))
            .map(String::as_str)
    }
}
