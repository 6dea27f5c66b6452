use std::path::Path;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::builder::page::lastmod::{last_modified_or_now, ModificationHistory};
use crate::builder::page::model::{PageEntry, PostSource, StaticEntry};
use crate::builder::page::utils::{path_to_url, title_from_slug};
use crate::builder::types::BoxResult;
use crate::front_matter::{extract_excerpt, extract_front_matter, EXCERPT_WORDS};
use crate::utils::fs::{list_markdown_files, read_file};

/// Static pages listed in the sitemap, relative to the site root
pub const STATIC_PAGES: [&str; 5] = [
    "index.html",
    "tags.html",
    "search.html",
    "en/index.html",
    "en/tags.html",
];

/// Split a `YYYY-MM-DD-slug` file stem into its date and slug
pub fn parse_post_file_name(stem: &str) -> Option<(NaiveDate, &str)> {
    let mut parts = stem.splitn(4, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    let slug = parts.next()?;

    let year: i32 = year.parse().ok()?;
    if !(1..=9999).contains(&year) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    Some((date, slug))
}

/// Build the entry for a single post file. Files whose names do not follow
/// `YYYY-MM-DD-slug.md`, or whose date is not a real calendar date, yield
/// nothing.
pub fn parse_post_path(
    path: &Path,
    source: &PostSource,
    history: &dyn ModificationHistory,
) -> Option<PageEntry> {
    let stem = path.file_stem()?.to_string_lossy();
    let Some((date, slug)) = parse_post_file_name(&stem) else {
        debug!("Skipping {}: not a dated post file name", path.display());
        return None;
    };
    let published_at = date.and_hms_opt(0, 0, 0)?.and_utc();

    let raw = match read_file(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error reading post {}: {}", path.display(), e);
            return None;
        }
    };
    let (parsed, content) = extract_front_matter(&raw);
    for skipped in &parsed.skipped {
        warn!(
            "{}: ignored front matter line {}: {:?}",
            path.display(), skipped.line_number, skipped.content
        );
    }
    let metadata = parsed.front_matter;

    let title = metadata
        .get_str("title")
        .map(str::to_string)
        .unwrap_or_else(|| title_from_slug(slug));
    let description = match metadata.get_str("subtitle") {
        Some(subtitle) => subtitle.to_string(),
        None => extract_excerpt(&content, EXCERPT_WORDS),
    };

    let mut url_path = format!("/{}/{}/", date.format("%Y/%m/%d"), slug);
    if !source.prefix.is_empty() {
        url_path = format!("/{}{}", source.prefix, url_path);
    }

    Some(PageEntry {
        title: title.trim().to_string(),
        url_path,
        published_at,
        description: description.trim().to_string(),
        lastmod: last_modified_or_now(history, path),
        tags: metadata.get_list("tags"),
        language: source.language,
    })
}

/// Collect posts from every source, newest first. Posts sharing a publish
/// date keep the order they were collected in.
pub fn collect_posts(sources: &[PostSource], history: &dyn ModificationHistory) -> BoxResult<Vec<PageEntry>> {
    debug!("Collecting posts...");
    let mut entries = Vec::new();

    for source in sources {
        if !source.dir.exists() {
            debug!("Posts directory {} does not exist, skipping", source.dir.display());
            continue;
        }
        for path in list_markdown_files(&source.dir)? {
            if let Some(entry) = parse_post_path(&path, source, history) {
                entries.push(entry);
            }
        }
    }

    entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    debug!("Collected {} posts", entries.len());
    Ok(entries)
}

/// Collect the static pages in `pages` that exist under `root`
pub fn collect_static_pages(
    root: &Path,
    pages: &[&str],
    history: &dyn ModificationHistory,
) -> Vec<StaticEntry> {
    pages
        .iter()
        .map(Path::new)
        .filter(|relative| root.join(relative).exists())
        .map(|relative| StaticEntry {
            url_path: path_to_url(relative),
            lastmod: Some(last_modified_or_now(history, &root.join(relative))),
        })
        .collect()
}
