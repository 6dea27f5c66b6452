mod builder;

pub use builder::{build_site, SiteBuild};
