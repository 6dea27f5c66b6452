use std::env;

use log::info;

use crate::cli::types::Commands;
use crate::config;
use crate::translate::{self, OpenAiClient};
use crate::utils::error::BoxResult;

/// Environment variable with extra posts to translate, one per line
const ONLY_FILES_ENV: &str = "ONLY_FILES";

/// Handle the translate command
pub async fn handle_translate_command(command: &Commands) -> BoxResult<()> {
    let Commands::Translate { source, dest, only, model, api_key, api_base } = command else {
        return Ok(());
    };

    let only_env = env::var(ONLY_FILES_ENV).ok();
    let config = config::load_translate_config(
        api_key.clone(),
        model.clone(),
        api_base.clone(),
        source.clone(),
        dest.clone(),
        only.clone(),
        only_env.as_deref(),
    )?;

    let client = OpenAiClient::new(&config)?;
    info!("Using model {} at {}", config.model, client.endpoint());

    let cwd = env::current_dir()?;
    let summary = translate::translate_posts(&config, &client, &cwd).await?;
    if summary.failed > 0 {
        info!("{} posts could not be translated", summary.failed);
    }
    Ok(())
}
