/// A single front matter value. Nested structures are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FrontMatterValue {
    /// The scalar string, if this is a scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontMatterValue::Scalar(s) => Some(s),
            FrontMatterValue::List(_) => None,
        }
    }

    /// The value as a list; a scalar becomes a one-element list
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FrontMatterValue::Scalar(s) => vec![s.clone()],
            FrontMatterValue::List(items) => items.clone(),
        }
    }

    /// Whether the value is an empty string or an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            FrontMatterValue::Scalar(s) => s.is_empty(),
            FrontMatterValue::List(items) => items.is_empty(),
        }
    }
}

/// Ordered front matter mapping with unique keys.
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// the position where it first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, FrontMatterValue)>,
}

impl FrontMatter {
    pub fn insert<K: Into<String>>(&mut self, key: K, value: FrontMatterValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// A scalar value that is present and non-empty
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(FrontMatterValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// A value coerced to a list. Missing or empty values give an empty list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(value) if !value.is_empty() => value.to_list(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
impl FrontMatter {
    pub fn new() -> Self {
        FrontMatter::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Why a front matter line was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingColon,
}

/// A line the parser could not interpret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the front matter block
    pub line_number: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Result of a lenient front matter parse: the best-effort mapping plus
/// diagnostics for every line that was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatterParse {
    pub front_matter: FrontMatter,
    pub skipped: Vec<SkippedLine>,
}
