// Module declarations
mod builder;
mod cli;
mod config;
mod front_matter;
mod redirects;
mod translate;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
