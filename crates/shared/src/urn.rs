//! URN - Identifiers of entities in the metadata graph
//!
//! Every entity and group is addressed by a string of the form
//! `urn:li:<entityType>:<key>`. The key is opaque and may itself contain
//! colons and nested URNs, e.g.
//! `urn:li:dataset:(urn:li:dataPlatform:hive,db.table,PROD)`.

use crate::error::UrnParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const URN_PATTERN: &str = r"^urn:li:([A-Za-z][A-Za-z0-9_]*):(.+)$";

/// A parsed entity URN
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Urn {
    raw: String,
    type_end: usize,
}

impl Urn {
    /// Parse a URN string
    pub fn parse(value: &str) -> Result<Self, UrnParseError> {
        let invalid = |reason: &str| UrnParseError {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if !value.starts_with("urn:li:") {
            return Err(invalid("missing 'urn:li:' prefix"));
        }

        let captures = Regex::new(URN_PATTERN)
            .ok()
            .and_then(|regex| regex.captures(value))
            .ok_or_else(|| invalid("expected 'urn:li:<entityType>:<key>'"))?;
        let entity_type = captures
            .get(1)
            .ok_or_else(|| invalid("missing entity type"))?;

        if value[entity_type.end() + 1..].trim().is_empty() {
            return Err(invalid("empty entity key"));
        }

        Ok(Self {
            raw: value.to_string(),
            type_end: entity_type.end(),
        })
    }

    /// Entity type segment (e.g. `corpGroup`)
    pub fn entity_type(&self) -> &str {
        &self.raw["urn:li:".len()..self.type_end]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Urn {
    type Err = UrnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Urn {
    type Error = UrnParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Urn> for String {
    fn from(urn: Urn) -> Self {
        urn.raw
    }
}
