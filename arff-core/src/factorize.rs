//! Factorization of categorical values into stable integer codes
//!
//! Codes are assigned in first-seen order starting at zero. Each distinct
//! value also gets a human-readable state label; digit-only values are
//! prefixed with `"Class "` so that numeric class labels stay readable.

use crate::format::constants::CLASS_LABEL_PREFIX;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Integer codes and the codebook produced by [`factorize`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Factorized {
    /// One code per input value
    pub codes: Vec<u32>,
    /// State labels, indexed by code
    pub states: Vec<String>,
}

/// Human-readable label for a raw value
pub fn state_label(value: &str) -> String {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        let mut label = String::with_capacity(CLASS_LABEL_PREFIX.len() + value.len());
        label.push_str(CLASS_LABEL_PREFIX);
        label.push_str(value);
        label
    } else {
        value.to_string()
    }
}

/// Encode `values` with first-seen-wins integer codes
pub fn factorize<S: AsRef<str>>(values: &[S]) -> Factorized {
    let mut codes = Vec::with_capacity(values.len());
    let mut states = Vec::new();
    let mut seen: HashMap<&str, u32> = HashMap::new();

    for value in values {
        let value = value.as_ref();
        let code = match seen.get(value) {
            Some(&code) => code,
            None => {
                let code = states.len() as u32;
                seen.insert(value, code);
                states.push(state_label(value));
                code
            }
        };
        codes.push(code);
    }

    Factorized { codes, states }
}

/// Per-attribute codebooks, keyed by attribute name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StateTable {
    states: BTreeMap<String, Vec<String>>,
}

impl StateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with an empty entry for every name
    pub fn with_attributes<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            states: names
                .into_iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        }
    }

    /// Factorize the values of one attribute
    ///
    /// The attribute's entry is replaced by the freshly built codebook, so
    /// nothing from an earlier factorization survives.
    pub fn factorize<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Vec<u32> {
        let Factorized { codes, states } = factorize(values);
        self.states.insert(name.to_string(), states);
        codes
    }

    /// State labels of one attribute
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.states.get(name).map(Vec::as_slice)
    }

    /// Whether the table has an entry for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Number of attributes in the table
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.states
            .iter()
            .map(|(name, states)| (name.as_str(), states.as_slice()))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.states
    }

    /// Take the underlying map
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.states
    }
}

impl From<BTreeMap<String, Vec<String>>> for StateTable {
    fn from(states: BTreeMap<String, Vec<String>>) -> Self {
        Self { states }
    }
}
