pub mod types;
pub mod parser;
pub mod extractor;

// Re-export the most common items for convenience
pub use extractor::{extract_excerpt, extract_front_matter, split_document, EXCERPT_WORDS};
