use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::TranslateConfig;
use crate::utils::error::BoxResult;
use crate::utils::fs::{is_markdown, list_markdown_files_recursive, write_file};
use crate::utils::path::{make_relative, resolve_against, to_posix};

pub mod client;
pub mod document;
pub mod prompt;
pub mod response;

pub use client::{CompletionClient, OpenAiClient};
pub use document::{merge_front_matter, read_source_post, render_document};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use response::split_front_matter;

/// Counts for one translate run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateSummary {
    /// English posts written
    pub created: usize,
    /// Posts skipped because a translation already exists
    pub existing: usize,
    /// Posts skipped because reading or translating them failed
    pub failed: usize,
}

/// Korean posts to translate, sorted. With an explicit list only the
/// listed paths that lie inside `source_dir`, exist and are Markdown are
/// kept; relative paths resolve against `cwd`.
pub fn discover_posts(source_dir: &Path, only: &[PathBuf], cwd: &Path) -> BoxResult<Vec<PathBuf>> {
    let source_dir = resolve_against(cwd, source_dir);
    if only.is_empty() {
        return list_markdown_files_recursive(&source_dir);
    }

    let mut selected = BTreeSet::new();
    for requested in only {
        let path = resolve_against(cwd, requested);
        if make_relative(&path, &source_dir).is_none() {
            debug!("Ignoring {}: not under {}", requested.display(), source_dir.display());
            continue;
        }
        if path.is_file() && is_markdown(&path) {
            selected.insert(path);
        } else {
            debug!("Ignoring {}: not an existing Markdown file", requested.display());
        }
    }
    Ok(selected.into_iter().collect())
}

/// Where the English version of `source` goes
pub fn destination_for(source: &Path, source_dir: &Path, dest_dir: &Path) -> Option<PathBuf> {
    make_relative(source, source_dir).map(|relative| dest_dir.join(relative))
}

/// Translate one post and write it to `destination`
pub async fn translate_post<C: CompletionClient>(
    client: &C,
    source: &Path,
    destination: &Path,
) -> BoxResult<()> {
    let post = read_source_post(source)?;
    let prompt = build_prompt(&post.front_matter, &post.body)?;
    let answer = client.complete(SYSTEM_PROMPT, &prompt).await?;

    let (translated, body) = split_front_matter(&answer);
    let front_matter = merge_front_matter(translated, &post.front_matter);
    document::check_untranslated(&front_matter);

    write_file(destination, &render_document(&front_matter, &body)?)
}

/// Translate the configured posts one after another. Failures are logged
/// and counted; only setup errors abort the run.
pub async fn translate_posts<C: CompletionClient>(
    config: &TranslateConfig,
    client: &C,
    cwd: &Path,
) -> BoxResult<TranslateSummary> {
    let source_dir = resolve_against(cwd, &config.source_dir);
    let dest_dir = resolve_against(cwd, &config.dest_dir);
    let force = !config.only.is_empty();

    let posts = discover_posts(&source_dir, &config.only, cwd)?;
    info!("Found {} candidate posts in {}", posts.len(), config.source_dir.display());

    let mut summary = TranslateSummary::default();
    for source in posts {
        let Some(destination) = destination_for(&source, &source_dir, &dest_dir) else {
            continue;
        };
        let label = make_relative(&source, &source_dir).map_or_else(|| source.display().to_string(), to_posix);

        if destination.exists() {
            if !force {
                debug!("Skipping {}: already translated", label);
                summary.existing += 1;
                continue;
            }
            info!("Overwriting existing translation of {}", label);
        }

        info!("Translating {}", label);
        match translate_post(client, &source, &destination).await {
            Ok(()) => {
                info!("Created/Updated: {}", destination.display());
                summary.created += 1;
            },
            Err(e) => {
                warn!("Skipping {}: {}", label, e);
                summary.failed += 1;
            },
        }
    }

    debug!("{} posts already translated", summary.existing);
    info!("New English posts: {}", summary.created);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;

    use crate::utils::error::MigrateError;

    /// Replays canned answers and records the prompts it was sent
    struct ScriptedClient {
        answers: RefCell<Vec<BoxResult<String>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(answers: Vec<BoxResult<String>>) -> Self {
            ScriptedClient { answers: RefCell::new(answers), prompts: RefCell::new(Vec::new()) }
        }
    }

    impl CompletionClient for ScriptedClient {
        async fn complete(&self, system: &str, user: &str) -> BoxResult<String> {
            assert_eq!(system, SYSTEM_PROMPT);
            self.prompts.borrow_mut().push(user.to_string());
            self.answers.borrow_mut().remove(0)
        }
    }

    fn config(root: &Path, only: Vec<PathBuf>) -> TranslateConfig {
        TranslateConfig {
            api_key: "sk-test".to_string(),
            model: "gpt-4.1-mini".to_string(),
            api_base: "http://localhost/v1".to_string(),
            source_dir: root.join("blog"),
            dest_dir: root.join("blog-en"),
            only,
        }
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_only_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("blog/a.md"), "");
        write(&root.join("blog/nested/b.md"), "");
        write(&root.join("blog/c.txt"), "");
        write(&root.join("other/d.md"), "");

        let only = vec![
            PathBuf::from("blog/nested/b.md"),
            PathBuf::from("blog/a.md"),
            root.join("blog/a.md"),
            PathBuf::from("blog/c.txt"),
            PathBuf::from("blog/missing.md"),
            PathBuf::from("other/d.md"),
            PathBuf::from("blog/../other/d.md"),
        ];
        let posts = discover_posts(Path::new("blog"), &only, root).unwrap();
        assert_eq!(posts, vec![root.join("blog/a.md"), root.join("blog/nested/b.md")]);
    }

    #[test]
    fn test_discover_all() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("blog/z.md"), "");
        write(&root.join("blog/sub/a.md"), "");

        let posts = discover_posts(&root.join("blog"), &[], root).unwrap();
        assert_eq!(posts, vec![root.join("blog/sub/a.md"), root.join("blog/z.md")]);
    }

    #[test]
    fn test_destination_for() {
        let dest = destination_for(Path::new("/s/blog/x/y.md"), Path::new("/s/blog"), Path::new("/s/blog-en"));
        assert_eq!(dest, Some(PathBuf::from("/s/blog-en/x/y.md")));
        assert_eq!(destination_for(Path::new("/elsewhere.md"), Path::new("/s/blog"), Path::new("/s/en")), None);
    }

    #[tokio::test]
    async fn test_translate_new_posts_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("blog/done.md"), "---\ntitle: 완료\n---\n본문");
        write(&root.join("blog-en/done.md"), "already there");
        write(&root.join("blog/k8s.md"), "---\ntitle: 쿠버네티스\ntags: [k8s]\n---\n\n설치 과정\n");

        let client = ScriptedClient::new(vec![Ok(
            "```markdown\n---\ntitle: Setting Up Kubernetes\n---\n\nInstallation steps\n```".to_string(),
        )]);
        let summary = translate_posts(&config(root, Vec::new()), &client, root).await.unwrap();

        assert_eq!(summary, TranslateSummary { created: 1, existing: 1, failed: 0 });
        assert_eq!(
            fs::read_to_string(root.join("blog-en/k8s.md")).unwrap(),
            "---\ntitle: Setting Up Kubernetes\ntags:\n- k8s\n---\n\nInstallation steps\n"
        );
        assert_eq!(fs::read_to_string(root.join("blog-en/done.md")).unwrap(), "already there");

        let prompts = client.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("---\ntitle: 쿠버네티스\ntags:\n- k8s\n---\n\n설치 과정"));
    }

    #[tokio::test]
    async fn test_only_list_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("blog/post.md"), "---\ntitle: 제목\n---\n본문");
        write(&root.join("blog-en/post.md"), "stale");

        let client = ScriptedClient::new(vec![Ok("no front matter at all".to_string())]);
        let cfg = config(root, vec![root.join("blog/post.md")]);
        let summary = translate_posts(&cfg, &client, root).await.unwrap();

        assert_eq!(summary.created, 1);
        // unparseable front matter falls back to the original
        assert_eq!(
            fs::read_to_string(root.join("blog-en/post.md")).unwrap(),
            "---\ntitle: 제목\n---\n\nno front matter at all\n"
        );
    }

    #[tokio::test]
    async fn test_failed_call_skips_post() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("blog/a.md"), "---\ntitle: 가\n---\n");
        write(&root.join("blog/b.md"), "---\ntitle: 나\n---\n");

        let client = ScriptedClient::new(vec![
            Err(MigrateError::Translation("connection reset".to_string()).into()),
            Ok("---\ntitle: B\n---\nbody".to_string()),
        ]);
        let summary = translate_posts(&config(root, Vec::new()), &client, root).await.unwrap();

        assert_eq!(summary, TranslateSummary { created: 1, existing: 0, failed: 1 });
        assert!(!root.join("blog-en/a.md").exists());
        assert!(root.join("blog-en/b.md").exists());
    }
}
