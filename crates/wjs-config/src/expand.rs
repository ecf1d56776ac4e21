//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WJS_TEST_KEY", "s3cret");
        }
        let result = expand_env("${WJS_TEST_KEY}", "api.key").unwrap();
        assert_eq!(result, "s3cret");
        unsafe {
            std::env::remove_var("WJS_TEST_KEY");
        }
    }

    #[test]
    fn test_expand_default_applies_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WJS_TEST_UNSET");
        }
        let result = expand_env("${WJS_TEST_UNSET:-fallback}", "api.key").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_expand_embedded_in_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WJS_TEST_HOST", "wiki.example.com");
        }
        let result = expand_env("https://${WJS_TEST_HOST}/graphql", "api.url").unwrap();
        assert_eq!(result, "https://wiki.example.com/graphql");
        unsafe {
            std::env::remove_var("WJS_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_missing_var_names_the_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WJS_TEST_MISSING");
        }
        let err = expand_env("${WJS_TEST_MISSING}", "api.url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("WJS_TEST_MISSING"));
        assert!(err.to_string().contains("api.url"));
    }

    #[test]
    fn test_literal_strings_pass_through() {
        let result = expand_env("https://wiki.example.com/graphql", "api.url").unwrap();
        assert_eq!(result, "https://wiki.example.com/graphql");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("pa$$word", "api.key").unwrap();
        assert_eq!(result, "pa$$word");
    }
}
