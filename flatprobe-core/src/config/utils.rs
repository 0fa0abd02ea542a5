//! Configuration utility functions
//!
//! Helpers for reading configuration values from environment variables.

use std::path::PathBuf;

/// Get a string value from an environment variable or use the default
pub fn get_env_string(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

/// Get an optional path from an environment variable. Empty values count as unset.
pub fn get_env_path_opt(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variables_use_defaults() {
        let key = "FLATPROBE_TEST_SURELY_UNSET_VARIABLE";
        assert_eq!(get_env_string(key, "INFO".to_string()), "INFO");
        assert_eq!(get_env_path_opt(key), None);
    }
}
