//! Listing and tree display
//!
//! - `json` - the directory tree as JSON
//! - `listing` - flat listings for the console, with colors

mod config;
mod json;
mod listing;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, to_json_string, to_json_value};
pub use listing::ListingFormatter;
