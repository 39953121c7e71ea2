//! Field-level fallback for malformed configuration values.

use serde::Deserialize;
use serde::de::IgnoredAny;

/// A value that either parsed as `T` or was discarded.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Resolve an optional lenient field, warning when a present value was invalid.
pub(crate) fn resolve<T>(value: Option<Lenient<T>>, field: &str, default: T) -> T {
    match value {
        Some(Lenient::Valid(value)) => value,
        Some(Lenient::Invalid(_)) => {
            tracing::warn!(field, "Invalid configuration value, using default");
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        flag: Option<Lenient<bool>>,
    }

    #[test]
    fn test_valid_value_is_kept() {
        let probe: Probe = serde_json::from_str(r#"{"flag": false}"#).unwrap();
        assert!(!resolve(probe.flag, "flag", true));
    }

    #[test]
    fn test_invalid_value_uses_default() {
        let probe: Probe = serde_json::from_str(r#"{"flag": "yes please"}"#).unwrap();
        assert!(resolve(probe.flag, "flag", true));
    }

    #[test]
    fn test_missing_value_uses_default() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(resolve(probe.flag, "flag", true));
    }
}
