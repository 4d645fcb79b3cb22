//! Output writers for discovered contexts and request fixtures.

pub mod fixture;
pub mod json;

// Re-export main functions
pub use fixture::Fixture;
pub use json::{read_json, write_json};
