//! Shared utilities.

mod regex;
mod selector;

// Re-export public API
pub use self::regex::compile_regex_unsafe;
pub use self::selector::parse_selector_unsafe;
