//! Sensor request options.

use serde::{Deserialize, Serialize};

/// Options for one sensor read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocateOptions {
    /// Request the most precise reading at greater latency/power cost
    pub enable_high_accuracy: bool,
    /// Maximum time before the request fails with `Timeout`
    pub timeout_ms: u64,
    /// Maximum acceptable age of a cached reading; 0 forces a fresh read
    pub maximum_age_ms: u64,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 0,
        }
    }
}

/// Partial options, merged field-wise over the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocateOverrides {
    pub enable_high_accuracy: Option<bool>,
    pub timeout_ms: Option<u64>,
    pub maximum_age_ms: Option<u64>,
}

impl LocateOverrides {
    /// Apply these overrides over the defaults. Unset fields keep the default.
    pub fn resolve(&self) -> LocateOptions {
        let defaults = LocateOptions::default();
        LocateOptions {
            enable_high_accuracy: self
                .enable_high_accuracy
                .unwrap_or(defaults.enable_high_accuracy),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
            maximum_age_ms: self.maximum_age_ms.unwrap_or(defaults.maximum_age_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LocateOptions::default();

        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.maximum_age_ms, 0);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        assert_eq!(LocateOverrides::default().resolve(), LocateOptions::default());
    }

    #[test]
    fn test_merge_is_field_wise() {
        let overrides = LocateOverrides {
            timeout_ms: Some(4_000),
            ..Default::default()
        };

        let options = overrides.resolve();
        assert_eq!(options.timeout_ms, 4_000);
        assert!(options.enable_high_accuracy);
        assert_eq!(options.maximum_age_ms, 0);
    }
}
