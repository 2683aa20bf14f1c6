//! Extraction of keyed sub-values from sequences and mappings.

use crate::class::ComparableClass;
use crate::error::{Error, Result};
use crate::value::{KeyType, MapKey, Value};

/// Indexes `v`, known to be of class `class`, by `key`.
pub fn extract<'a>(v: &'a Value, class: ComparableClass, key: &Value) -> Result<&'a Value> {
    let (v, _) = v.indirect();
    let (key, _) = key.indirect();

    match class {
        ComparableClass::Sequence => {
            let items = v
                .as_sequence()
                .ok_or_else(|| Error::not_indexable(v.type_name()))?;
            let Value::Int(index) = *key else {
                return Err(Error::key_type_mismatch(key.type_name(), v.type_name()));
            };

            usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(|| Error::key_out_of_range(index, items.len()))
        }
        ComparableClass::Mapping => {
            let map = v
                .as_mapping()
                .ok_or_else(|| Error::not_indexable(v.type_name()))?;
            let map_key = map
                .key_type()
                .admit(key)
                .ok_or_else(|| Error::key_type_mismatch(key.type_name(), v.type_name()))?;

            map.get(&map_key)
                .ok_or_else(|| Error::key_not_found(map_key.to_string()))
        }
        ComparableClass::Integer
        | ComparableClass::UnsignedInteger
        | ComparableClass::Float
        | ComparableClass::String
        | ComparableClass::Timestamp
        | ComparableClass::Invalid => Err(Error::not_indexable(v.type_name())),
    }
}

/// A key already checked against the first element, re-applied on every comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedKey {
    Index(usize),
    Entry(MapKey),
}

impl ResolvedKey {
    /// Fixes `key` for elements of `class`. Only meaningful after a successful [`extract`].
    pub fn resolve(class: ComparableClass, key: &Value) -> Option<ResolvedKey> {
        let (key, _) = key.indirect();
        match (class, key) {
            (ComparableClass::Sequence, Value::Int(i)) => {
                usize::try_from(*i).ok().map(ResolvedKey::Index)
            }
            (ComparableClass::Mapping, key) => {
                KeyType::Any.admit(key).map(ResolvedKey::Entry)
            }
            _ => None,
        }
    }

    /// Looks up the keyed sub-value of `v`, dereferenced.
    pub fn lookup<'a>(&self, v: &'a Value) -> Option<&'a Value> {
        let (v, _) = v.indirect();
        let sub = match self {
            ResolvedKey::Index(i) => v.as_sequence()?.get(*i)?,
            ResolvedKey::Entry(k) => v.as_mapping()?.get(k)?,
        };

        Some(sub.indirect().0)
    }
}
