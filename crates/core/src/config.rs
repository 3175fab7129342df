use crate::error::{Result, TrueGotoError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// How a change notification updates the index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChangePolicy {
    /// Append the changed element and leave earlier entries in place.
    /// Repeated edits accumulate duplicates for one declaration.
    Append,
    /// Drop every entry sharing the element's full path, then append.
    #[default]
    ReplaceByPath,
}

/// What an ambiguous lookup does when no candidate lives in an active namespace.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NarrowingFallback {
    /// Pick from the candidates as they were before narrowing.
    Unnarrowed,
    /// Report no match.
    NoMatch,
}

impl FromStr for ChangePolicy {
    type Err = TrueGotoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(ChangePolicy::Append),
            "replace_by_path" | "replace" => Ok(ChangePolicy::ReplaceByPath),
            other => Err(TrueGotoError::Config(format!("unknown change policy: {other}"))),
        }
    }
}

impl FromStr for NarrowingFallback {
    type Err = TrueGotoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "unnarrowed" => Ok(NarrowingFallback::Unnarrowed),
            "no_match" | "none" => Ok(NarrowingFallback::NoMatch),
            other => Err(TrueGotoError::Config(format!(
                "unknown narrowing fallback: {other}"
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub change_policy: ChangePolicy,
    /// Fallback for name-only lookups.
    pub name_fallback: NarrowingFallback,
    /// Fallback for qualified lookups.
    pub qualified_fallback: NarrowingFallback,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            change_policy: ChangePolicy::default(),
            name_fallback: NarrowingFallback::Unnarrowed,
            qualified_fallback: NarrowingFallback::NoMatch,
        }
    }
}

impl SessionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults overridden by `TRUEGOTO_CHANGE_POLICY`, `TRUEGOTO_NAME_FALLBACK`
    /// and `TRUEGOTO_QUALIFIED_FALLBACK`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup("TRUEGOTO_CHANGE_POLICY") {
            self.change_policy = value.parse()?;
        }
        if let Some(value) = lookup("TRUEGOTO_NAME_FALLBACK") {
            self.name_fallback = value.parse()?;
        }
        if let Some(value) = lookup("TRUEGOTO_QUALIFIED_FALLBACK") {
            self.qualified_fallback = value.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_keep_divergent_fallbacks() {
        let config = SessionConfig::default();
        assert_eq!(config.name_fallback, NarrowingFallback::Unnarrowed);
        assert_eq!(config.qualified_fallback, NarrowingFallback::NoMatch);
        assert_eq!(config.change_policy, ChangePolicy::ReplaceByPath);
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let vars: HashMap<&str, &str> = [
            ("TRUEGOTO_CHANGE_POLICY", "append"),
            ("TRUEGOTO_QUALIFIED_FALLBACK", "unnarrowed"),
        ]
        .into_iter()
        .collect();
        let config = SessionConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.change_policy, ChangePolicy::Append);
        assert_eq!(config.name_fallback, NarrowingFallback::Unnarrowed);
        assert_eq!(config.qualified_fallback, NarrowingFallback::Unnarrowed);
    }

    #[test]
    fn unknown_override_is_rejected() {
        let err = SessionConfig::default()
            .with_overrides(|key| (key == "TRUEGOTO_NAME_FALLBACK").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, TrueGotoError::Config(_)));
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truegoto.json");
        std::fs::write(&path, r#"{ "change_policy": "append" }"#).unwrap();

        let config = SessionConfig::from_file(&path).unwrap();
        assert_eq!(config.change_policy, ChangePolicy::Append);
        assert_eq!(config.name_fallback, NarrowingFallback::Unnarrowed);
        assert_eq!(config.qualified_fallback, NarrowingFallback::NoMatch);
    }
}
