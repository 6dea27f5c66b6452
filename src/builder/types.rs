/// Common boxed result type for the builder module
pub use crate::utils::error::BoxResult;
