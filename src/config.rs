//! Compiler configuration
//!
//! Values can be overridden from the environment:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `EMOJIC_SUBSTITUTION_MODE` | `cascading`, `isolated` | `cascading` |
//! | `EMOJIC_INJECT_STD_INCLUDE` | `true`/`false`/`1`/`0` | `true` |

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EmojicError, Result};
use crate::substitution::SubstitutionMode;

pub const ENV_SUBSTITUTION_MODE: &str = "EMOJIC_SUBSTITUTION_MODE";
pub const ENV_INJECT_STD_INCLUDE: &str = "EMOJIC_INJECT_STD_INCLUDE";

/// Options shared by the compile and transform operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Scheduling of key replacement
    pub substitution_mode: SubstitutionMode,

    /// Prepend `#include <stdio.h>` to compiled code that needs it
    pub inject_std_include: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            substitution_mode: SubstitutionMode::Cascading,
            inject_std_include: true,
        }
    }
}

impl CompilerConfig {
    /// Build from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup(ENV_SUBSTITUTION_MODE) {
            config.substitution_mode = mode.parse().map_err(|_| EmojicError::Config {
                key: ENV_SUBSTITUTION_MODE.to_string(),
                message: format!("unknown mode '{}', expected cascading or isolated", mode),
            })?;
        }

        if let Some(flag) = lookup(ENV_INJECT_STD_INCLUDE) {
            config.inject_std_include = parse_flag(ENV_INJECT_STD_INCLUDE, &flag)?;
        }

        info!(
            "Compiler config: mode={:?}, inject_std_include={}",
            config.substitution_mode, config.inject_std_include
        );

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(EmojicError::Config {
            key: key.to_string(),
            message: format!("expected a boolean, found '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CompilerConfig::default());
        assert_eq!(config.substitution_mode, SubstitutionMode::Cascading);
        assert!(config.inject_std_include);
    }

    #[test]
    fn test_overrides() {
        let config = CompilerConfig::from_lookup(lookup_from(&[
            (ENV_SUBSTITUTION_MODE, "isolated"),
            (ENV_INJECT_STD_INCLUDE, "off"),
        ]))
        .unwrap();
        assert_eq!(config.substitution_mode, SubstitutionMode::Isolated);
        assert!(!config.inject_std_include);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = CompilerConfig::from_lookup(lookup_from(&[(ENV_SUBSTITUTION_MODE, "eager")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_SUBSTITUTION_MODE));

        let err = CompilerConfig::from_lookup(lookup_from(&[(ENV_INJECT_STD_INCLUDE, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CompilerConfig =
            serde_json::from_str(r#"{"substitution_mode": "isolated"}"#).unwrap();
        assert_eq!(config.substitution_mode, SubstitutionMode::Isolated);
        assert!(config.inject_std_include);
    }
}
