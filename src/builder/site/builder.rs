use std::path::PathBuf;

use log::info;

use crate::builder::feed::{build_feed, FeedOptions};
use crate::builder::page::{
    collect_posts, collect_static_pages, Language, ModificationHistory, PostSource, STATIC_PAGES,
};
use crate::builder::sitemap::build_sitemap;
use crate::builder::types::BoxResult;
use crate::config::{self, SiteConfig};
use crate::utils::fs::write_file;

/// Korean post archive, relative to the site root
pub const POSTS_DIR: &str = "_posts";

/// English post archive, relative to the site root
pub const POSTS_EN_DIR: &str = "_posts_en";

/// Everything a sitemap/feed run needs to know about where things live
#[derive(Debug, Clone)]
pub struct SiteBuild {
    pub root: PathBuf,

    /// Explicit configuration file; `_config.yml` in the root otherwise
    pub config_file: Option<PathBuf>,

    pub sitemap_path: PathBuf,
    pub feed_path: PathBuf,
    pub sources: Vec<PostSource>,
    pub feed: FeedOptions,
}

impl SiteBuild {
    /// The standard layout of the Jekyll blog rooted at `root`
    pub fn for_root<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        SiteBuild {
            config_file: None,
            sitemap_path: root.join("sitemap.xml"),
            feed_path: root.join("feed.xml"),
            sources: vec![
                PostSource::new(root.join(POSTS_DIR), "", Language::Korean),
                PostSource::new(root.join(POSTS_EN_DIR), "en", Language::English),
            ],
            feed: FeedOptions::default(),
            root,
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub static_pages: usize,
    pub feed_items: usize,
}

/// Generate `sitemap.xml` and `feed.xml` for the site
pub fn build_site(build: &SiteBuild, history: &dyn ModificationHistory) -> BoxResult<BuildSummary> {
    config::validate_site_root(&build.root)?;
    let site: SiteConfig = config::load_site_config(&build.root, build.config_file.as_deref())?;
    config::validate_base_url(&site.base_url);
    config::check_post_directories(
        &build.sources.iter().map(|s| s.dir.as_path()).collect::<Vec<_>>(),
    );

    let posts = collect_posts(&build.sources, history)?;
    let pages = collect_static_pages(&build.root, &STATIC_PAGES, history);

    let sitemap = build_sitemap(&site.base_url, &pages, &posts);
    let feed = build_feed(&site, &posts, &build.feed);

    write_file(&build.sitemap_path, &sitemap)?;
    info!("Wrote {}", build.sitemap_path.display());
    write_file(&build.feed_path, &feed)?;
    info!("Wrote {}", build.feed_path.display());

    let feed_items = posts
        .iter()
        .filter(|p| p.language == build.feed.language)
        .count()
        .min(build.feed.limit);

    Ok(BuildSummary {
        posts: posts.len(),
        static_pages: pages.len(),
        feed_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct FixedHistory;

    impl ModificationHistory for FixedHistory {
        fn last_modified(&self, _path: &Path) -> Option<String> {
            Some("2024-03-03T00:00:00+00:00".to_string())
        }
    }

    #[test]
    fn test_build_site_writes_both_documents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(root.join("_config.yml"), "url: https://blog.example\ntheme_settings:\n  title: My Blog\n").unwrap();
        write_file(root.join("index.html"), "").unwrap();
        write_file(root.join("_posts/2023-01-01-first.md"), "---\ntitle: First\n---\nHello").unwrap();
        write_file(root.join("_posts_en/2023-01-02-first.md"), "---\ntitle: First EN\n---\nHello").unwrap();

        let summary = build_site(&SiteBuild::for_root(root), &FixedHistory).unwrap();
        assert_eq!(summary, BuildSummary { posts: 2, static_pages: 1, feed_items: 1 });

        let sitemap = std::fs::read_to_string(root.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://blog.example/</loc>"));
        assert!(sitemap.contains("<loc>https://blog.example/en/2023/01/02/first/</loc>"));

        let feed = std::fs::read_to_string(root.join("feed.xml")).unwrap();
        assert!(feed.contains("<title>My Blog</title>"));
        assert!(feed.contains("<title>First</title>"));
        assert!(!feed.contains("First EN"));
    }

    #[test]
    fn test_build_site_requires_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(build_site(&SiteBuild::for_root(dir.path()), &FixedHistory).is_err());
        assert!(!dir.path().join("sitemap.xml").exists());
    }
}
