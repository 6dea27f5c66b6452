use crate::front_matter::parser;
use crate::front_matter::types::FrontMatterParse;

const DELIMITER: &str = "---";

/// Default excerpt length in words
pub const EXCERPT_WORDS: usize = 50;

/// A document split at its front matter delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument {
    /// Raw text between the delimiter lines, if the document has front matter
    pub front_matter: Option<String>,
    pub body: String,
}

/// Split a document into front matter text and body.
///
/// The document must start with `---` and have a later line that is `---`
/// once trimmed; otherwise the whole input is body.
pub fn split_document(raw: &str) -> SplitDocument {
    if !raw.starts_with(DELIMITER) {
        return SplitDocument { front_matter: None, body: raw.to_string() };
    }

    let lines: Vec<&str> = raw.lines().collect();
    let closing = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == DELIMITER)
        .map(|(idx, _)| idx);

    match closing {
        Some(idx) => SplitDocument {
            front_matter: Some(lines[1..idx].join("\n")),
            body: lines[idx + 1..].join("\n"),
        },
        None => SplitDocument { front_matter: None, body: raw.to_string() },
    }
}

/// Split a document and parse its front matter leniently
pub fn extract_front_matter(raw: &str) -> (FrontMatterParse, String) {
    let split = split_document(raw);
    let parsed = split
        .front_matter
        .as_deref()
        .map(parser::parse)
        .unwrap_or_default();
    (parsed, split.body)
}

/// Extract the first paragraph as an excerpt, truncated to `max_words`
/// words with `...` appended when truncated
pub fn extract_excerpt(content: &str, max_words: usize) -> String {
    let text = content.trim();
    if text.is_empty() {
        return String::new();
    }

    let paragraph = text.split("\n\n").next().unwrap_or(text);
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.len() <= max_words {
        return paragraph.to_string();
    }
    format!("{}...", words[..max_words].join(" "))
}
