use std::collections::BTreeMap;

use clap::ValueEnum;

use crate::redirects::Unmatched;
use crate::utils::error::BoxResult;

/// Output format for the redirect map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RedirectFormat {
    /// A `redirects` block for astro.config.mjs
    #[default]
    Astro,
    /// A JSON object of old path to new path
    Json,
}

impl RedirectFormat {
    pub fn render(&self, redirects: &BTreeMap<String, String>) -> BoxResult<String> {
        match self {
            RedirectFormat::Astro => Ok(format_astro(redirects)),
            RedirectFormat::Json => format_json(redirects),
        }
    }
}

fn quote_js(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

pub fn format_astro(redirects: &BTreeMap<String, String>) -> String {
    let mut out = String::from("// Add to astro.config.mjs:\nredirects: {\n");
    for (old, new) in redirects {
        out.push_str(&format!("    {}: {},\n", quote_js(old), quote_js(new)));
    }
    out.push_str("}\n");
    out
}

pub fn format_json(redirects: &BTreeMap<String, String>) -> BoxResult<String> {
    let mut json = serde_json::to_string_pretty(redirects)?;
    json.push('\n');
    Ok(json)
}

/// Human-readable list of URLs that need manual attention
pub fn format_unmatched(unmatched: &[Unmatched]) -> String {
    let mut out = format!(
        "=== {} unmatched URLs (may need manual mapping or are deleted posts) ===\n",
        unmatched.len()
    );
    for entry in unmatched {
        out.push_str(&format!("  {}  ({})\n", entry.slug, entry.url));
    }
    out
}
