mod feed;
mod redirects;
mod translate;

pub use feed::handle_feed_command;
pub use redirects::handle_redirects_command;
pub use translate::handle_translate_command;
