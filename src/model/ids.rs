use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Record identifier as the content API hands it out.
///
/// The API sends ids either as JSON numbers or as strings. Equality and
/// hashing only look at the canonical string form, so `1` and `"1"` match
/// across fetch/update round-trips. The original wire kind is remembered so
/// update requests echo the id back the way it arrived.
#[derive(Clone, Debug)]
pub struct RecordId {
    canonical: String,
    numeric: bool,
}

impl RecordId {
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            canonical: s.into(),
            numeric: false,
        }
    }

    pub fn numeric(n: i64) -> Self {
        Self {
            canonical: n.to_string(),
            numeric: true,
        }
    }

    /// Parses operator input (CLI flags, pickers). Digit-only input is treated
    /// as numeric so requests look like the ones the API itself produced.
    pub fn parse_input(s: &str) -> Self {
        let s = s.trim();
        Self {
            canonical: s.to_string(),
            numeric: !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn to_json(&self) -> serde_json::Value {
        if self.numeric {
            if let Ok(n) = self.canonical.parse::<i64>() {
                return serde_json::Value::from(n);
            }
            if let Ok(n) = self.canonical.parse::<u64>() {
                return serde_json::Value::from(n);
            }
        }
        serde_json::Value::String(self.canonical.clone())
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => Ok(Self {
                canonical: canonical_number(&n),
                numeric: true,
            }),
            serde_json::Value::String(s) => Ok(Self::new(s)),
            other => Err(serde::de::Error::custom(format!(
                "record id must be a number or string, got {}",
                other
            ))),
        }
    }
}

/// `1.0` and `1` name the same record. Floats past 2^53 are not integral ids
/// anyone can round-trip, so they keep their JSON spelling.
fn canonical_number(n: &serde_json::Number) -> String {
    if let Some(f) = n.as_f64()
        && n.is_f64()
        && f.fract() == 0.0
        && f.abs() <= 9_007_199_254_740_992.0
    {
        return format!("{}", f as i64);
    }
    n.to_string()
}

#[cfg(test)]
#[path = "../tests/model/ids_tests.rs"]
mod tests;
