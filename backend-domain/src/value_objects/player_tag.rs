// Player tag value object
// Tags are case-sensitive upstream, so normalization only adds the `#` prefix

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTag(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTag {
    #[error("player tag must not be empty")]
    Empty,
    #[error("player tag '{0}' must contain only letters and digits after '#'")]
    Malformed(String),
}

/// Trims the raw input and prefixes `#` when missing. Idempotent.
pub fn normalize_tag(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{}", trimmed)
    }
}

impl PlayerTag {
    pub fn parse(raw: &str) -> Result<Self, InvalidTag> {
        let normalized = normalize_tag(raw);
        let body = &normalized[1..];
        if body.is_empty() {
            return Err(InvalidTag::Empty);
        }
        if !body.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(InvalidTag::Malformed(normalized));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
