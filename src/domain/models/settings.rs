//! Parsed settings document and dotted-key lookup.

use serde_yaml::{Mapping, Value};

use crate::domain::errors::{SettingsError, SettingsResult};

/// Parsed settings document
///
/// A nested mapping exactly as the YAML file describes it. Keys are looked
/// up with dotted paths such as `database.port`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    root: Mapping,
}

impl Settings {
    /// Parse a YAML document into settings
    ///
    /// An empty document yields empty settings. A document whose root is
    /// not a mapping is rejected as a parse error.
    pub fn from_yaml_str(content: &str) -> SettingsResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut value = serde_yaml::from_str::<Value>(content)?;
        value.apply_merge()?;

        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            _ => Err(SettingsError::Parse(
                "expected a mapping at the document root".to_string(),
            )),
        }
    }

    /// Look up a dotted key, returning `None` when any segment is absent
    pub fn get(&self, key: &str) -> SettingsResult<Option<&Value>> {
        let mut current = &self.root;
        let mut segments = key.split('.').peekable();
        let mut consumed = 0usize;

        while let Some(segment) = segments.next() {
            consumed += segment.len();
            let Some(value) = current.get(segment) else {
                return Ok(None);
            };

            if segments.peek().is_none() {
                return Ok(Some(value));
            }

            match value {
                Value::Mapping(inner) => current = inner,
                _ => {
                    return Err(SettingsError::InvalidType {
                        key: key[..consumed].to_string(),
                        expected: "mapping",
                    })
                }
            }
            // account for the '.' separator
            consumed += 1;
        }

        Ok(None)
    }

    /// Look up a dotted key that must be present
    pub fn require(&self, key: &str) -> SettingsResult<&Value> {
        self.get(key)?
            .ok_or_else(|| SettingsError::MissingKey(key.to_string()))
    }

    /// Look up a key holding a YAML string
    pub fn require_str(&self, key: &str) -> SettingsResult<&str> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| SettingsError::InvalidType {
                key: key.to_string(),
                expected: "string",
            })
    }

    /// Look up a key and render its value for display
    ///
    /// Strings come back unchanged, numbers and booleans in their YAML
    /// form (`5432`, `1.5`, `true`), null as `null`. Sequences and mappings
    /// render as inline JSON, or as YAML when a key has no JSON form.
    pub fn require_display(&self, key: &str) -> SettingsResult<String> {
        match self.require(key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok("null".to_string()),
            other => match serde_json::to_string(other) {
                Ok(json) => Ok(json),
                Err(_) => Ok(serde_yaml::to_string(other)?.trim_end().to_string()),
            },
        }
    }

    /// Names of the top-level sections
    pub fn sections(&self) -> Vec<String> {
        self.root
            .keys()
            .filter_map(|k| match k {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect()
    }

    /// Number of top-level sections
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the document has no top-level sections
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
