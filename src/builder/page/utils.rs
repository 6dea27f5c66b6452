use std::path::Path;

use crate::utils::path::to_posix;

const INDEX_FILE: &str = "index.html";

/// Turn a slug into a display title: hyphens become spaces and every word
/// is capitalized, the rest of each word lowercased
pub fn title_from_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut title = String::with_capacity(spaced.len());
    let mut previous_cased = false;

    for c in spaced.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && previous_cased {
            title.extend(c.to_lowercase());
        } else if cased {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        previous_cased = cased;
    }

    title
}

/// Site-relative URL for a static file; `index.html` maps to its directory
pub fn path_to_url(relative_path: &Path) -> String {
    let parts = to_posix(relative_path);
    match parts.strip_suffix(INDEX_FILE) {
        Some("") => "/".to_string(),
        Some(dir) => format!("/{}", dir),
        None => format!("/{}", parts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("gke-iam-role"), "Gke Iam Role");
        assert_eq!(title_from_slug("AWS-SAA"), "Aws Saa");
        assert_eq!(title_from_slug("k8s-setup"), "K8S Setup");
        assert_eq!(title_from_slug("2022-retrospective"), "2022 Retrospective");
        assert_eq!(title_from_slug("keda-사용하기"), "Keda 사용하기");
    }

    #[test]
    fn test_path_to_url() {
        assert_eq!(path_to_url(Path::new("index.html")), "/");
        assert_eq!(path_to_url(Path::new("en/index.html")), "/en/");
        assert_eq!(path_to_url(Path::new("tags.html")), "/tags.html");
        assert_eq!(path_to_url(Path::new("en/tags.html")), "/en/tags.html");
    }
}
