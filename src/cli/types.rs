use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::builder::feed::DEFAULT_FEED_LIMIT;
use crate::config::{DEFAULT_API_BASE, DEFAULT_TRANSLATION_MODEL};
use crate::redirects::RedirectFormat;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "blog-migrate")]
#[command(about = "Jekyll to Astro blog migration: sitemap/RSS, 404 redirects, post translation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate sitemap.xml and feed.xml for a Jekyll blog
    #[command(alias = "f")]
    Feed {
        /// Site root holding _config.yml, _posts and _posts_en
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Custom configuration file (defaults to <root>/_config.yml)
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Sitemap output path (defaults to <root>/sitemap.xml)
        #[arg(long, value_name = "FILE")]
        sitemap: Option<PathBuf>,

        /// Feed output path (defaults to <root>/feed.xml)
        #[arg(long, value_name = "FILE")]
        feed: Option<PathBuf>,

        /// Maximum number of feed items
        #[arg(short = 'n', long, default_value_t = DEFAULT_FEED_LIMIT)]
        limit: usize,

        /// Do not prepend the Jekyll `layout: null` front matter to the feed
        #[arg(long, default_value_t = false)]
        no_layout_prelude: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Map 404 URLs from the old site to their new Astro paths
    #[command(alias = "r")]
    Redirects {
        /// 404 report exported from Search Console (needs a URL column)
        #[arg(value_name = "CSV")]
        csv: PathBuf,

        /// Directory holding the current posts
        #[arg(short, long, value_name = "DIR", default_value = "src/content/blog")]
        blog_dir: PathBuf,

        /// YAML mapping of old slug to new slug, merged over the built-in table
        #[arg(short, long, value_name = "FILE")]
        slug_table: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RedirectFormat::Astro)]
        format: RedirectFormat,

        /// Write the mapping to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Translate Korean posts to English with a chat completion API
    #[command(alias = "t")]
    Translate {
        /// Directory holding the Korean posts
        #[arg(short, long, value_name = "DIR", default_value = "src/content/blog")]
        source: PathBuf,

        /// Directory the English posts are written to
        #[arg(short, long, value_name = "DIR", default_value = "src/content/blog-en")]
        dest: PathBuf,

        /// Only (re-)translate these posts
        #[arg(long, value_name = "FILE", num_args = 1..)]
        only: Vec<PathBuf>,

        /// Model identifier
        #[arg(short, long, env = "TRANSLATION_MODEL", default_value = DEFAULT_TRANSLATION_MODEL)]
        model: String,

        /// API key for the completion endpoint
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Base URL of the completion API
        #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_API_BASE)]
        api_base: String,
    },
}
