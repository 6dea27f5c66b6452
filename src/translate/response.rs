use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};

/// Front matter delimiters, tried from strictest to loosest
static FRONT_MATTER_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"^---\s*\n([\s\S]+?)\n---\s*\n?([\s\S]*)$").expect("valid strict pattern"),
        Regex::new(r"^---\s*\n([\s\S]+?)\n---\s*([\s\S]*)$").expect("valid relaxed pattern"),
        Regex::new(r"^-{3,}\s*\n([\s\S]+?)\n-{3,}\s*\n?([\s\S]*)$").expect("valid long-dash pattern"),
    ]
});

const FENCE: &str = "```";

/// Remove a code fence wrapped around the whole response
pub fn strip_markdown_codeblock(text: &str) -> String {
    let text = text.trim();
    if !text.starts_with(FENCE) {
        return text.to_string();
    }

    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.remove(0);
    if lines.last().map_or(false, |line| line.trim() == FENCE) {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

/// Whether `text` contains Hangul syllables or Jamo
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c) || ('\u{1100}'..='\u{11FF}').contains(&c))
}

/// Text of a front matter value for inspection
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other).unwrap_or_default(),
    }
}

/// Split a model response into front matter and body.
///
/// Never fails: when no front matter is found or it is not a YAML
/// mapping, the mapping is empty and the body is the whole (unfenced)
/// response.
pub fn split_front_matter(response: &str) -> (Mapping, String) {
    let text = strip_markdown_codeblock(response);

    let Some(captures) = FRONT_MATTER_PATTERNS.iter().find_map(|re| re.captures(&text)) else {
        let preview: String = text.chars().take(300).collect();
        warn!("No front matter found in translation response");
        debug!("Response starts with: {}", preview);
        return (Mapping::new(), text);
    };

    let yaml = &captures[1];
    let body = captures[2].to_string();

    let front_matter = match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Mapping::new(),
        Ok(other) => {
            warn!("Translated front matter is not a mapping ({:?}); ignoring it", kind(&other));
            Mapping::new()
        },
        Err(e) => {
            warn!("Translated front matter is not valid YAML: {}", e);
            Mapping::new()
        },
    };

    (front_matter, body)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
