mod types;
mod loader;
mod validation;

pub use types::*;
pub use loader::{load_site_config, load_translate_config};
pub use validation::{check_post_directories, validate_base_url, validate_site_root};
