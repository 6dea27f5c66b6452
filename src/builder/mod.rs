pub mod site;
pub mod page;
pub mod xml;
pub mod sitemap;
pub mod feed;
pub mod types;

pub use site::{build_site, SiteBuild};
pub use page::GitHistory;
