// identity mapping construction + lookups
use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Key, KeyError};

/// A frozen key-to-key mapping: every entry's value is its own key.
///
/// Entries keep the order their keys first appeared in. There is no mutating
/// method, so the identity invariant holds for the lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "IndexMap<Key, Key>", try_from = "IndexMap<Key, Key>")]
pub struct EnumLike {
    entries: IndexMap<Key, Key>,
}

impl EnumLike {
    //construction rules:
    //1. One entry per distinct key, value == key.
    //2. Duplicates fold last-write-wins; the first occurrence fixes the position.
    //3. Empty input -> empty mapping, never an error.
    //4. The input is only read, never mutated.

    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build the identity mapping from a sequence of keys.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = IndexMap::new();
        for key in keys {
            let key = key.as_ref().to_string();
            entries.insert(key.clone(), key);
        }
        Self { entries }
    }

    /// Build the identity mapping from the key set of an existing map.
    /// The map's values are discarded.
    pub fn from_map_keys<I, K, V>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        Self::from_keys(map.into_iter().map(|(key, _)| key))
    }

    //strict variant: a repeated key is an error instead of folding silently
    pub fn try_from_keys<I, K>(keys: I) -> Result<Self, KeyError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = IndexMap::new();
        for key in keys {
            let key = key.as_ref().to_string();
            if entries.contains_key(&key) {
                return Err(KeyError::DuplicateKey { key });
            }
            entries.insert(key.clone(), key);
        }
        Ok(Self { entries })
    }

    //returns Some(key) if the key is part of the mapping, None otherwise
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Index<&str> for EnumLike {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        match self.entries.get(key) {
            Some(v) => v,
            None => panic!("no entry for key {:?}", key),
        }
    }
}

impl<K: AsRef<str>> FromIterator<K> for EnumLike {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::from_keys(keys)
    }
}

impl From<EnumLike> for IndexMap<Key, Key> {
    fn from(mapping: EnumLike) -> Self {
        mapping.entries
    }
}

impl TryFrom<IndexMap<Key, Key>> for EnumLike {
    type Error = KeyError;

    //whole-map sweep: every entry must already satisfy value == key
    fn try_from(entries: IndexMap<Key, Key>) -> Result<Self, KeyError> {
        for (key, value) in entries.iter() {
            if key != value {
                return Err(KeyError::NotIdentity {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(Self { entries })
    }
}
