//! Flat, case-insensitive key/value mapping produced by the providers.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use figment::value::{Dict, Tag, Value};

use crate::key::{KEY_DELIMITER, compose_key};
use crate::{XmlConfigError, XmlConfigResult};

/// Profile name used for a setting's fallback value.
pub const DEFAULT_PROFILE: &str = "(Default)";

/// Child key holding the value of a key that also has children, as in
/// `db=primary` alongside `db:host=localhost`.
pub const SECTION_VALUE_KEY: &str = "(Value)";

/// Ordered mapping of flat keys to values.
///
/// Keys compare case-insensitively by ordinal: each character is upper-cased
/// on its own (characters without a single-character upper case, such as
/// `ß`, compare as themselves). Iteration is sorted by that folded form, so
/// `Bob:(Default)` and `bob:(default)` name the same entry, as do `Ä` and
/// `ä`. The original spelling of the first insertion is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationData {
    entries: BTreeMap<String, Stored>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Stored {
    key: String,
    value: String,
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn fold_case(key: &str) -> String {
    key.chars().map(fold_char).collect()
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().map(fold_char).eq(right.chars().map(fold_char))
}

impl ConfigurationData {
    /// Empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`XmlConfigError::DuplicateKey`] when an equal key (ignoring
    /// case) is already present. The existing value is left untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> XmlConfigResult<()> {
        let key = key.into();
        match self.entries.entry(fold_case(&key)) {
            Entry::Occupied(existing) => Err(Arc::new(XmlConfigError::duplicate_key(
                existing.get().key.as_str(),
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Stored {
                    key,
                    value: value.into(),
                });
                Ok(())
            }
        }
    }

    /// Value stored under `key`, ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&fold_case(key))
            .map(|stored| stored.value.as_str())
    }

    /// `true` when `key` is present, ignoring case.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold_case(key))
    }

    /// Value of setting `name` for `profile`, falling back to the
    /// [`DEFAULT_PROFILE`] value when the profile has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_config_xml::ConfigurationData;
    ///
    /// let mut data = ConfigurationData::new();
    /// data.insert("Bob:(Default)", "John")?;
    /// data.insert("Bob:AnotherProfile", "Johanna")?;
    /// assert_eq!(data.profile_value("Bob", "AnotherProfile"), Some("Johanna"));
    /// assert_eq!(data.profile_value("Bob", "Missing"), Some("John"));
    /// # Ok::<(), std::sync::Arc<ortho_config_xml::XmlConfigError>>(())
    /// ```
    #[must_use]
    pub fn profile_value(&self, name: &str, profile: &str) -> Option<&str> {
        self.get(&compose_key(&[name], profile))
            .or_else(|| self.get(&compose_key(&[name], DEFAULT_PROFILE)))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|stored| (stored.key.as_str(), stored.value.as_str()))
    }

    /// Nest the flat keys into a Figment dictionary, splitting on
    /// [`KEY_DELIMITER`].
    ///
    /// Segments that differ only by case share one dictionary. A key that is
    /// also the parent of other keys keeps its own value under
    /// [`SECTION_VALUE_KEY`] inside its dictionary; an explicit entry with
    /// that name takes precedence.
    ///
    /// ```
    /// use figment::value::Value;
    /// use ortho_config_xml::ConfigurationData;
    ///
    /// let mut data = ConfigurationData::new();
    /// data.insert("db", "primary")?;
    /// data.insert("db:host", "localhost")?;
    /// let dict = data.to_dict();
    /// let Some(Value::Dict(_, db)) = dict.get("db") else { panic!("db is a section") };
    /// assert_eq!(db.get("(Value)").and_then(Value::as_str), Some("primary"));
    /// assert_eq!(db.get("host").and_then(Value::as_str), Some("localhost"));
    /// # Ok::<(), std::sync::Arc<ortho_config_xml::XmlConfigError>>(())
    /// ```
    #[must_use]
    pub fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        for (key, value) in self.iter() {
            let segments: Vec<&str> = key.split(KEY_DELIMITER).collect();
            insert_nested(&mut dict, &segments, value);
        }
        dict
    }
}

fn matching_key(dict: &Dict, segment: &str) -> String {
    dict.keys()
        .find(|existing| eq_ignore_case(existing, segment))
        .cloned()
        .unwrap_or_else(|| segment.to_owned())
}

fn insert_nested(dict: &mut Dict, segments: &[&str], value: &str) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };
    let mut current = dict;
    for segment in parents {
        let slot_key = matching_key(current, segment);
        let slot = current
            .entry(slot_key)
            .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
        if !matches!(slot, Value::Dict(..)) {
            let own_value = std::mem::replace(slot, Value::Dict(Tag::Default, Dict::new()));
            if let Value::Dict(_, inner) = slot {
                inner.insert(SECTION_VALUE_KEY.to_owned(), own_value);
            }
        }
        let Value::Dict(_, inner) = slot else {
            return;
        };
        current = inner;
    }
    let value = Value::String(Tag::Default, value.to_owned());
    let leaf_key = matching_key(current, leaf);
    match current.entry(leaf_key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        // A section's own value moved aside earlier; the explicit entry wins.
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Value::Dict(_, inner) => {
                let own_key = matching_key(inner, SECTION_VALUE_KEY);
                inner.entry(own_key).or_insert(value);
            }
            existing => *existing = value,
        },
    }
}
