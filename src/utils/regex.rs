//! Regex compilation utilities.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// # Arguments
///
/// * `pattern` - The regex pattern to compile
/// * `context` - Context description for error messages
///
/// # Panics
///
/// Panics if compilation fails (indicates a programming error).
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::compile_regex_unsafe;

    #[test]
    fn test_compile_regex_unsafe_valid() {
        let re = compile_regex_unsafe("(?i)icon", "test");
        assert!(re.is_match("shortcut ICON"));
    }
}
