use log::{info, warn};

use crate::cli::types::Commands;
use crate::redirects::{self, format_unmatched, SlugTable};
use crate::utils::error::BoxResult;
use crate::utils::fs::write_file;

/// Handle the redirects command
pub fn handle_redirects_command(command: &Commands) -> BoxResult<()> {
    let Commands::Redirects { csv, blog_dir, slug_table, format, output } = command else {
        return Ok(());
    };

    let mut table = SlugTable::builtin();
    if let Some(path) = slug_table {
        let extra = SlugTable::from_yaml_file(path)?;
        info!("Loaded {} slug mappings from {}", extra.len(), path.display());
        table.merge(extra);
    }

    let urls = redirects::read_urls(csv)?;
    let known = redirects::known_slugs(blog_dir)?;
    info!("Read {} URLs; {} current posts", urls.len(), known.len());

    let result = redirects::generate_redirects(&urls, &known, &table);
    info!("Generated {} redirects", result.redirects.len());

    let rendered = format.render(&result.redirects)?;
    match output {
        Some(path) => {
            write_file(path, &rendered)?;
            info!("Wrote {}", path.display());
        },
        None => print!("{}", rendered),
    }

    if !result.unmatched.is_empty() {
        for line in format_unmatched(&result.unmatched).lines() {
            warn!("{}", line);
        }
    }

    Ok(())
}
