//! Emitter configuration.

use serde::{Deserialize, Serialize};

/// Default name of the wildcard channel.
pub const WILDCARD: &str = "*";

/// Configuration for an [`Emitter`](crate::Emitter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Channel that receives a copy of every emitted event. `None` disables
    /// wildcard delivery.
    pub wildcard: Option<String>,
    /// Listener count per channel above which a warning is logged.
    /// Zero disables the warning.
    pub max_listeners: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            wildcard: Some(WILDCARD.to_string()),
            max_listeners: 10,
        }
    }
}

impl EmitterConfig {
    /// A configuration without wildcard delivery.
    pub fn without_wildcard() -> Self {
        Self {
            wildcard: None,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_wildcard() {
        let config = EmitterConfig::default();
        assert_eq!(config.wildcard.as_deref(), Some("*"));
        assert_eq!(config.max_listeners, 10);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: EmitterConfig = serde_json::from_str(r#"{"max_listeners": 3}"#).unwrap();
        assert_eq!(config.max_listeners, 3);
        assert_eq!(config.wildcard.as_deref(), Some("*"));
    }

    #[test]
    fn without_wildcard_disables_channel() {
        assert!(EmitterConfig::without_wildcard().wildcard.is_none());
    }
}
