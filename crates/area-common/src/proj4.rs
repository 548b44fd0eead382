//! proj4 projection parameters.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// proj4 arguments as supplied by a caller, before normalization.
///
/// Either one whitespace-separated string (`"+proj=stere +lat_0=90"`) or an
/// already tokenized list (`["proj=stere", "lat_0=90"]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proj4Args {
    Text(String),
    Tokens(Vec<String>),
}

impl From<&str> for Proj4Args {
    fn from(s: &str) -> Self {
        Proj4Args::Text(s.to_string())
    }
}

impl From<String> for Proj4Args {
    fn from(s: String) -> Self {
        Proj4Args::Text(s)
    }
}

impl From<Vec<String>> for Proj4Args {
    fn from(tokens: Vec<String>) -> Self {
        Proj4Args::Tokens(tokens)
    }
}

impl From<&[&str]> for Proj4Args {
    fn from(tokens: &[&str]) -> Self {
        Proj4Args::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Proj4Args {
    fn from(tokens: [&str; N]) -> Self {
        Proj4Args::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Normalized proj4 parameters: an insertion-ordered key/value mapping.
///
/// Keys are unique. Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proj4Params {
    entries: Vec<(String, String)>,
}

impl Proj4Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, overwriting the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Proj4Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Proj4Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Formats as a proj4 definition string, e.g. `+proj=stere +lat_0=90`.
impl fmt::Display for Proj4Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "+{}={}", k, v)?;
        }
        Ok(())
    }
}

impl Serialize for Proj4Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
