mod model;
mod collector;
mod utils;
mod lastmod;

pub use model::{Language, PageEntry, PostSource, StaticEntry};
pub use collector::{collect_posts, collect_static_pages, STATIC_PAGES};
pub use lastmod::{GitHistory, ModificationHistory};
