//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_string() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_expand_default_value() {
        let value = expand_env("${WIKI_TEST_SURELY_UNSET_VAR:-0.0.0.0}", "server.host").unwrap();

        assert_eq!(value, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_variable() {
        let err = expand_env("${WIKI_TEST_SURELY_UNSET_VAR}", "server.host").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Environment variable error in server.host: ${WIKI_TEST_SURELY_UNSET_VAR} not set"
        );
    }
}
