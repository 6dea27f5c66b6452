use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use log::{debug, warn};

use crate::utils::error::{BoxResult, MigrateError};
use crate::utils::fs::list_markdown_files;

/// Header of the column holding the stale URLs
pub const URL_COLUMN: &str = "URL";

/// Read the non-empty `URL` values from a 404 report, in file order
pub fn read_urls<P: AsRef<Path>>(csv_path: P) -> BoxResult<Vec<String>> {
    let path = csv_path.as_ref();
    let file = File::open(path).map_err(|e| {
        MigrateError::Csv(format!("Cannot open {}: {}", path.display(), e))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file);

    let column = reader
        .headers()
        .map_err(MigrateError::from)?
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}') == URL_COLUMN);

    let Some(column) = column else {
        warn!("{} has no {} column", path.display(), URL_COLUMN);
        return Ok(Vec::new());
    };

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record.map_err(MigrateError::from)?;
        match record.get(column) {
            Some(url) if !url.is_empty() => urls.push(url.to_string()),
            _ => {},
        }
    }

    debug!("Read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Slugs of the posts currently in `blog_dir` (stems of its `.md` files)
pub fn known_slugs<P: AsRef<Path>>(blog_dir: P) -> BoxResult<BTreeSet<String>> {
    let dir = blog_dir.as_ref();
    if !dir.is_dir() {
        warn!("Blog directory {} does not exist; no slugs known", dir.display());
    }

    let slugs = list_markdown_files(dir)?
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .collect();
    Ok(slugs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("404.csv");
        fs::write(
            &path,
            "URL,Last crawled\n/2022/01/29/a/,2024-01-01\n,2024-01-02\n/tags.html\n\"/x,y/\",2024-01-03\n",
        ).unwrap();

        let urls = read_urls(&path).unwrap();
        assert_eq!(urls, vec!["/2022/01/29/a/", "/tags.html", "/x,y/"]);
    }

    #[test]
    fn test_read_urls_with_bom_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("404.csv");
        fs::write(&path, "\u{feff}URL\n/search.html\n").unwrap();
        assert_eq!(read_urls(&path).unwrap(), vec!["/search.html"]);
    }

    #[test]
    fn test_missing_url_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("404.csv");
        fs::write(&path, "Page\n/tags.html\n").unwrap();
        assert!(read_urls(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_csv_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls(dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(crate::utils::error::exit_code_for(err.as_ref()), 1);
    }

    #[test]
    fn test_known_slugs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-post.md"), "").unwrap();
        fs::write(dir.path().join("a-post.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let slugs: Vec<String> = known_slugs(dir.path()).unwrap().into_iter().collect();
        assert_eq!(slugs, vec!["a-post", "b-post"]);
        assert!(known_slugs(dir.path().join("missing")).unwrap().is_empty());
    }
}
