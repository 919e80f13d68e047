//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a config value.
///
/// Values without `${` are returned unchanged. Bare `$VAR` is not expanded.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut unset = Vec::new();
    let expanded = shellexpand::env_with_context_no_errors(value, |var| {
        std::env::var(var)
            .inspect_err(|_| unset.push(var.to_owned()))
            .ok()
    });

    // Unset variables with a `:-default` were substituted; bare ones are left as-is.
    if let Some(var) = unset
        .iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }
    Ok(expanded.into_owned())
}
