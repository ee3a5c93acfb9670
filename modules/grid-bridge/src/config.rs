use serde::{Deserialize, Serialize};

/// Configuration for the `grid_bridge` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Upper bound on concurrently registered resource handles.
    #[serde(default = "default_max_open_resources")]
    pub max_open_resources: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_open_resources: default_max_open_resources(),
        }
    }
}

fn default_max_open_resources() -> usize {
    1024
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_empty_config() {
        let config: BridgeConfig = serde_json::from_str("{}").expect("empty config parses");
        assert_eq!(config.max_open_resources, 1024);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<BridgeConfig>(r#"{"max_open_files": 7}"#);
        assert!(result.is_err());
    }
}
