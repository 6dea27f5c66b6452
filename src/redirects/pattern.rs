use once_cell::sync::Lazy;
use regex::Regex;

use crate::builder::page::Language;

static EN_POST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/en/(\d{4})/(\d{2})/(\d{2})/(.+)$").expect("valid English post pattern")
});

static KO_POST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(\d{4})/(\d{2})/(\d{2})/(.+)$").expect("valid Korean post pattern")
});

/// Legacy pages with a fixed new location
pub const STATIC_REDIRECTS: [(&str, &str); 3] = [
    ("/tags.html", "/tags/"),
    ("/en/tags.html", "/en/tags/"),
    ("/search.html", "/search/"),
];

/// A recognized URL from the old Jekyll site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyUrl {
    /// A fixed page with a fixed new path
    Static { old: &'static str, new: &'static str },

    /// A dated post; `old` is the decoded path with a trailing slash
    Post { slug: String, language: Language, old: String },
}

/// Path component of a URL or path, percent-decoded, trailing slashes removed
pub fn request_path(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");

    let path = match without_query.find("://") {
        Some(scheme_end) => {
            let after_scheme = &without_query[scheme_end + 3..];
            after_scheme.find('/').map_or("", |slash| &after_scheme[slash..])
        },
        None => without_query,
    };

    let decoded = urlencoding::decode_binary(path.as_bytes());
    String::from_utf8_lossy(&decoded).trim_end_matches('/').to_string()
}

/// Classify a 404 URL. Anything that is neither a known static page nor a
/// dated post yields `None`.
pub fn parse_old_url(url: &str) -> Option<LegacyUrl> {
    let path = request_path(url);

    if let Some(&(old, new)) = STATIC_REDIRECTS.iter().find(|(old, _)| *old == path) {
        return Some(LegacyUrl::Static { old, new });
    }

    let (captures, language) = match EN_POST.captures(&path) {
        Some(captures) => (captures, Language::English),
        None => (KO_POST.captures(&path)?, Language::Korean),
    };

    Some(LegacyUrl::Post {
        slug: captures[4].to_string(),
        language,
        old: format!("{}/", path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, language: Language, old: &str) -> Option<LegacyUrl> {
        Some(LegacyUrl::Post { slug: slug.to_string(), language, old: old.to_string() })
    }

    #[test]
    fn test_static_pages() {
        assert_eq!(parse_old_url("/tags.html"), Some(LegacyUrl::Static { old: "/tags.html", new: "/tags/" }));
        assert_eq!(parse_old_url("/en/tags.html"), Some(LegacyUrl::Static { old: "/en/tags.html", new: "/en/tags/" }));
        assert_eq!(parse_old_url("https://blog.example/search.html?q=gke"), Some(LegacyUrl::Static { old: "/search.html", new: "/search/" }));
    }

    #[test]
    fn test_post_urls() {
        assert_eq!(parse_old_url("/2022/01/29/AWS-SAA/"), post("AWS-SAA", Language::Korean, "/2022/01/29/AWS-SAA/"));
        assert_eq!(
            parse_old_url("https://blog.example/en/2022/08/17/terraform-3/"),
            post("terraform-3", Language::English, "/en/2022/08/17/terraform-3/")
        );
    }

    #[test]
    fn test_percent_encoded_slugs_are_decoded() {
        assert_eq!(
            parse_old_url("/2022/02/16/AWS-SAA%ED%9B%84%EA%B8%B0/"),
            post("AWS-SAA후기", Language::Korean, "/2022/02/16/AWS-SAA후기/")
        );
        assert_eq!(
            parse_old_url("/2021/11/12/AWS%20-%20%EC%95%84%EB%A7%88%EC%A1%B4"),
            post("AWS - 아마존", Language::Korean, "/2021/11/12/AWS - 아마존/")
        );
    }

    #[test]
    fn test_unrecognized_urls() {
        assert_eq!(parse_old_url("/about/"), None);
        assert_eq!(parse_old_url("/2022/1/29/short-month/"), None);
        assert_eq!(parse_old_url("/assets/img/logo.png"), None);
        assert_eq!(parse_old_url(""), None);
    }

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("https://host.example"), "");
        assert_eq!(request_path("/a/b///"), "/a/b");
        assert_eq!(request_path("/a%2Fb/#frag"), "/a/b");
    }
}
