use chrono::{DateTime, Utc};

use crate::builder::page::{Language, PageEntry};
use crate::builder::xml::{absolute_url, escape_xml};
use crate::config::SiteConfig;

/// Number of posts included in the feed
pub const DEFAULT_FEED_LIMIT: usize = 25;

/// Path of the feed itself, used for the Atom self link
pub const FEED_PATH: &str = "feed.xml";

/// Front matter placed before the XML so Jekyll copies the file verbatim
const LAYOUT_PRELUDE: [&str; 3] = ["---", "layout: null", "---"];

/// Feed rendering options
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Maximum number of items
    pub limit: usize,

    /// Only posts in this language are included
    pub language: Language,

    /// Emit the Jekyll `layout: null` front matter before the XML
    pub layout_prelude: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        FeedOptions {
            limit: DEFAULT_FEED_LIMIT,
            language: Language::Korean,
            layout_prelude: true,
        }
    }
}

/// RFC 2822 date as used by RSS, e.g. `Thu, 01 Jun 2023 00:00:00 +0000`
pub fn rfc2822(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Render the RSS 2.0 feed. `posts` must already be newest first.
pub fn build_feed(site: &SiteConfig, posts: &[PageEntry], options: &FeedOptions) -> String {
    render_feed(site, posts, options, Utc::now())
}

/// Render the feed, using `now` as the build date when no post qualifies
pub fn render_feed(
    site: &SiteConfig,
    posts: &[PageEntry],
    options: &FeedOptions,
    now: DateTime<Utc>,
) -> String {
    let feed_posts: Vec<&PageEntry> = posts
        .iter()
        .filter(|post| post.language == options.language)
        .collect();
    let last_build = feed_posts.first().map_or(now, |post| post.published_at);
    let base_url = site.base_url.as_str();

    let mut lines: Vec<String> = Vec::new();
    if options.layout_prelude {
        lines.extend(LAYOUT_PRELUDE.iter().map(|line| line.to_string()));
    }
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">"#.to_string());
    lines.push("  <channel>".to_string());
    lines.push(format!("    <title>{}</title>", escape_xml(&site.title)));
    lines.push(format!(
        r#"    <atom:link href="{}" rel="self" type="application/rss+xml"/>"#,
        escape_xml(&absolute_url(base_url, FEED_PATH))
    ));
    lines.push(format!("    <link>{}</link>", escape_xml(&absolute_url(base_url, "/"))));
    lines.push(format!("    <description>{}</description>", escape_xml(&site.description)));
    lines.push(format!("    <lastBuildDate>{}</lastBuildDate>", rfc2822(&last_build)));

    for post in feed_posts.iter().take(options.limit) {
        let link = escape_xml(&absolute_url(base_url, &post.url_path));
        lines.push("    <item>".to_string());
        lines.push(format!("      <title>{}</title>", escape_xml(&post.title)));
        lines.push(format!("      <link>{}</link>", link));
        lines.push(format!(r#"      <guid isPermaLink="true">{}</guid>"#, link));
        if !post.description.is_empty() {
            lines.push(format!("      <description>{}</description>", escape_xml(&post.description)));
        }
        lines.push(format!("      <pubDate>{}</pubDate>", rfc2822(&post.published_at)));
        for tag in &post.tags {
            lines.push(format!("      <category>{}</category>", escape_xml(tag)));
        }
        lines.push("    </item>".to_string());
    }

    lines.push("  </channel>".to_string());
    lines.push("</rss>".to_string());
    lines.push(String::new());
    lines.join("\n")
}
