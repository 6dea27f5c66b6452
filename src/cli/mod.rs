pub mod types;
pub mod commands;
pub mod logging;

use clap::{CommandFactory, Parser};
use log::error;

use crate::utils::error::exit_code_for;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        Some(command @ types::Commands::Feed { .. }) => {
            commands::handle_feed_command(command, cli.debug)
        },
        Some(command @ types::Commands::Redirects { .. }) => {
            commands::handle_redirects_command(command)
        },
        Some(command @ types::Commands::Translate { .. }) => {
            commands::handle_translate_command(command).await
        },
        None => {
            let _ = types::Cli::command().print_help();
            Ok(())
        },
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(exit_code_for(e.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::types::{Cli, Commands};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    use crate::redirects::RedirectFormat;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_redirects_alias_and_defaults() {
        let cli = Cli::try_parse_from(["blog-migrate", "r", "404.csv", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Redirects { csv, blog_dir, format, output, slug_table }) => {
                assert_eq!(csv, PathBuf::from("404.csv"));
                assert_eq!(blog_dir, PathBuf::from("src/content/blog"));
                assert_eq!(format, RedirectFormat::Json);
                assert!(output.is_none());
                assert!(slug_table.is_none());
            },
            _ => panic!("expected redirects command"),
        }
    }

    #[test]
    fn test_feed_flags() {
        let cli = Cli::try_parse_from(["blog-migrate", "-g", "feed", "--root", "site", "-n", "10", "--no-layout-prelude"]).unwrap();
        assert!(cli.debug);
        match cli.command {
            Some(Commands::Feed { root, limit, no_layout_prelude, .. }) => {
                assert_eq!(root, PathBuf::from("site"));
                assert_eq!(limit, 10);
                assert!(no_layout_prelude);
            },
            _ => panic!("expected feed command"),
        }
    }

    #[test]
    fn test_translate_only_accepts_several_files() {
        let cli = Cli::try_parse_from([
            "blog-migrate", "translate", "--only", "src/content/blog/a.md", "src/content/blog/b.md",
        ]).unwrap();
        match cli.command {
            Some(Commands::Translate { only, .. }) => assert_eq!(only.len(), 2),
            _ => panic!("expected translate command"),
        }
    }
}
