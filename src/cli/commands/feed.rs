use log::info;

use crate::builder::{self, GitHistory, SiteBuild};
use crate::cli::logging::{command_log_level, set_log_level};
use crate::cli::types::Commands;
use crate::utils::error::BoxResult;

/// Handle the feed command
pub fn handle_feed_command(command: &Commands, debug: bool) -> BoxResult<()> {
    let Commands::Feed {
        root,
        config,
        sitemap,
        feed,
        limit,
        no_layout_prelude,
        quiet,
        verbose,
    } = command else {
        return Ok(());
    };

    if let Some(level) = command_log_level(debug, *verbose, *quiet) {
        set_log_level(level);
    }

    let mut build = SiteBuild::for_root(root);
    build.config_file = config.clone();
    if let Some(path) = sitemap {
        build.sitemap_path = path.clone();
    }
    if let Some(path) = feed {
        build.feed_path = path.clone();
    }
    build.feed.limit = *limit;
    build.feed.layout_prelude = !*no_layout_prelude;

    let history = GitHistory::new(root);
    let summary = builder::build_site(&build, &history)?;

    info!(
        "Generated sitemap with {} static pages and {} posts; feed has {} items",
        summary.static_pages, summary.posts, summary.feed_items
    );
    Ok(())
}
