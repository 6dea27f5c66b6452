use log::debug;

use crate::front_matter::types::{
    FrontMatterParse, FrontMatterValue, SkipReason, SkippedLine,
};

const LIST_MARKER: &str = "- ";

/// Strip one pair of matching surrounding quotes (`'` or `"`)
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    match bytes.first() {
        Some(&q) if (q == b'\'' || q == b'"') && bytes.last() == Some(&q) => {
            if value.len() == 1 {
                ""
            } else {
                &value[1..value.len() - 1]
            }
        },
        _ => value,
    }
}

/// Parse the text between the two `---` delimiter lines.
///
/// Supports `key: value` scalars, `key: [a, b]` inline lists and `key:`
/// followed by `- item` lines. Lines without a colon are dropped and
/// reported in [`FrontMatterParse::skipped`]; this never fails.
pub fn parse(text: &str) -> FrontMatterParse {
    let mut result = FrontMatterParse::default();
    if text.trim().is_empty() {
        return result;
    }

    let lines: Vec<&str> = text.lines().collect();
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        let stripped = line.trim();

        if stripped.is_empty() || stripped.starts_with('#') {
            idx += 1;
            continue;
        }

        let Some((key_part, value_part)) = stripped.split_once(':') else {
            debug!("Skipping front matter line {}: {:?}", idx + 1, line);
            result.skipped.push(SkippedLine {
                line_number: idx + 1,
                content: line.to_string(),
                reason: SkipReason::MissingColon,
            });
            idx += 1;
            continue;
        };

        let key = key_part.trim();
        let value = value_part.trim();
        idx += 1;

        if value.is_empty() {
            let (items, next) = collect_list(&lines, idx);
            idx = next;
            result.front_matter.insert(key, FrontMatterValue::List(items));
            continue;
        }

        let parsed = if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
            FrontMatterValue::List(parse_inline_list(&value[1..value.len() - 1]))
        } else {
            FrontMatterValue::Scalar(strip_quotes(value).to_string())
        };
        result.front_matter.insert(key, parsed);
    }

    result
}

fn collect_list(lines: &[&str], mut idx: usize) -> (Vec<String>, usize) {
    let mut items = Vec::new();
    while idx < lines.len() {
        let follower = lines[idx].trim();
        if let Some(item) = follower.strip_prefix(LIST_MARKER) {
            items.push(strip_quotes(item.trim()).to_string());
        } else if !follower.is_empty() {
            break;
        }
        idx += 1;
    }
    (items, idx)
}

fn parse_inline_list(inner: &str) -> Vec<String> {
    inner
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| strip_quotes(part).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::types::FrontMatter;

    fn parse_front_matter(text: &str) -> FrontMatter {
        parse(text).front_matter
    }

    fn scalar(s: &str) -> FrontMatterValue {
        FrontMatterValue::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> FrontMatterValue {
        FrontMatterValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_scalars_and_quotes() {
        let fm = parse_front_matter(
            "title: \"Hello: World\"\nsubtitle: 'single'\nlayout: post\nodd: \"'nested'\"",
        );
        assert_eq!(fm.get("title"), Some(&scalar("Hello: World")));
        assert_eq!(fm.get("subtitle"), Some(&scalar("single")));
        assert_eq!(fm.get("layout"), Some(&scalar("post")));
        // only one pair of quotes is removed
        assert_eq!(fm.get("odd"), Some(&scalar("'nested'")));
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        let fm = parse_front_matter("a: \"open\nb: 'x\"\nc: \"");
        assert_eq!(fm.get("a"), Some(&scalar("\"open")));
        assert_eq!(fm.get("b"), Some(&scalar("'x\"")));
        assert_eq!(fm.get("c"), Some(&scalar("")));
    }

    #[test]
    fn test_multiline_list() {
        let fm = parse_front_matter("tags:\n  - gcp\n\n  - \"k8s\"\ntitle: After");
        assert_eq!(fm.get("tags"), Some(&list(&["gcp", "k8s"])));
        assert_eq!(fm.get("title"), Some(&scalar("After")));
    }

    #[test]
    fn test_empty_key_without_items_is_empty_list() {
        let fm = parse_front_matter("tags:\ntitle: x");
        assert_eq!(fm.get("tags"), Some(&list(&[])));
        assert_eq!(fm.get("title"), Some(&scalar("x")));
    }

    #[test]
    fn test_inline_list() {
        let fm = parse_front_matter("tags: [aws, 'saa', \"exam\", ]");
        assert_eq!(fm.get("tags"), Some(&list(&["aws", "saa", "exam"])));
    }

    #[test]
    fn test_comments_blank_and_malformed_lines() {
        let outcome = parse("# comment\n\ntitle: ok\nno colon here\nlast: one");
        assert_eq!(outcome.front_matter.len(), 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].line_number, 4);
        assert_eq!(outcome.skipped[0].content, "no colon here");
        assert_eq!(outcome.skipped[0].reason, SkipReason::MissingColon);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let fm = parse_front_matter("title: one\ntitle: two");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.get_str("title"), Some("two"));
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse("  \n \n"), FrontMatterParse::default());
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes(""), "");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("'a'"), "a");
        assert_eq!(strip_quotes("\"a'"), "\"a'");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
