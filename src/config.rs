//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Bytes of input shown on each side of the failing offset by default.
pub const DEFAULT_CONTEXT_RADIUS: usize = 5;

/// Name reported for the input in rich diagnostics when none is given.
pub const DEFAULT_SOURCE_NAME: &str = "input";

/// Settings that shape diagnostics; they never change how input is read.
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Name attached to the input in `miette` reports.
    pub source_name: String,
    /// Bytes of input shown before and after the failing offset.
    pub context_radius: usize,
}

impl ScanConfig {
    pub fn named(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ScanConfig = serde_json::from_str(r#"{"source_name": "grammar.txt"}"#).unwrap();
        assert_eq!(config.source_name, "grammar.txt");
        assert_eq!(config.context_radius, DEFAULT_CONTEXT_RADIUS);
    }
}
