use crate::builder::page::{PageEntry, StaticEntry};
use crate::builder::xml::{absolute_url, escape_xml};

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render `sitemap.xml`: static pages first, then posts, in the order given
pub fn build_sitemap(base_url: &str, pages: &[StaticEntry], posts: &[PageEntry]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE),
    ];

    for page in pages {
        push_url(&mut lines, base_url, &page.url_path, page.lastmod.as_deref());
    }
    for post in posts {
        push_url(&mut lines, base_url, &post.url_path, Some(&post.lastmod));
    }

    lines.push("</urlset>".to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn push_url(lines: &mut Vec<String>, base_url: &str, url_path: &str, lastmod: Option<&str>) {
    lines.push("  <url>".to_string());
    lines.push(format!("    <loc>{}</loc>", escape_xml(&absolute_url(base_url, url_path))));
    if let Some(lastmod) = lastmod {
        lines.push(format!("    <lastmod>{}</lastmod>", lastmod));
    }
    lines.push("  </url>".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::page::Language;
    use chrono::{TimeZone, Utc};

    fn post(path: &str) -> PageEntry {
        PageEntry {
            title: "t".to_string(),
            url_path: path.to_string(),
            published_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            description: String::new(),
            lastmod: "2023-01-02T00:00:00+00:00".to_string(),
            tags: Vec::new(),
            language: Language::Korean,
        }
    }

    #[test]
    fn test_build_sitemap() {
        let pages = vec![StaticEntry {
            url_path: "/".to_string(),
            lastmod: Some("2024-05-05T10:00:00+09:00".to_string()),
        }];
        let posts = vec![post("/2023/01/01/a&b/")];

        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
<url>\n    <loc>https://ex.com/</loc>\n    <lastmod>2024-05-05T10:00:00+09:00</lastmod>\n  </url>\n  \
<url>\n    <loc>https://ex.com/2023/01/01/a&amp;b/</loc>\n    <lastmod>2023-01-02T00:00:00+00:00</lastmod>\n  </url>\n\
</urlset>\n";
        assert_eq!(build_sitemap("https://ex.com", &pages, &posts), expected);
    }

    #[test]
    fn test_sitemap_keeps_given_order_and_skips_missing_lastmod() {
        let pages = vec![StaticEntry { url_path: "/tags.html".to_string(), lastmod: None }];
        let posts = vec![post("/b/"), post("/a/")];
        let xml = build_sitemap("", &pages, &posts);

        let tags = xml.find("<loc>/tags.html</loc>").unwrap();
        let b = xml.find("<loc>/b/</loc>").unwrap();
        let a = xml.find("<loc>/a/</loc>").unwrap();
        assert!(tags < b && b < a);
        assert_eq!(xml.matches("<lastmod>").count(), 2);
        assert!(!xml.contains("priority"));
        assert!(!xml.contains("changefreq"));
    }
}
