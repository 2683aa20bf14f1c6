//! Runtime-typed values as handed over by the templating host.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// A value whose concrete type is only known at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Time(DateTime<Utc>),
    /// Generic list, the host's untyped sequence.
    List(Vec<Value>),
    /// The host's own sequence wrapper type.
    Slice(Slice),
    /// Fixed-length array.
    Array(Box<[Value]>),
    Map(Mapping),
    /// One level of indirection, see [`Value::indirect`].
    Ptr(Box<Value>),
    /// A host struct without a special-cased representation.
    Opaque(Opaque),
}

impl Value {
    pub fn ptr(inner: impl Into<Value>) -> Value {
        Value::Ptr(Box::new(inner.into()))
    }

    pub fn opaque(type_name: impl Into<String>) -> Value {
        Value::Opaque(Opaque {
            type_name: type_name.into(),
        })
    }

    /// Follows indirection layers until a concrete value is reached.
    ///
    /// Returns the dereferenced value and whether any layer was removed.
    pub fn indirect(&self) -> (&Value, bool) {
        let mut cur = self;
        let mut was_wrapped = false;
        while let Value::Ptr(inner) = cur {
            cur = inner;
            was_wrapped = true;
        }

        (cur, was_wrapped)
    }

    /// Owned version of [`Value::indirect`].
    pub fn into_indirect(self) -> (Value, bool) {
        let mut cur = self;
        let mut was_wrapped = false;
        while let Value::Ptr(inner) = cur {
            cur = *inner;
            was_wrapped = true;
        }

        (cur, was_wrapped)
    }

    /// Name of the runtime type, used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Value::Nil => "nil".into(),
            Value::Bool(_) => "bool".into(),
            Value::Int(_) => "int".into(),
            Value::Uint(_) => "uint".into(),
            Value::Float(_) => "float".into(),
            Value::Str(_) => "string".into(),
            Value::Time(_) => "time".into(),
            Value::List(_) => "list".into(),
            Value::Slice(_) => "slice".into(),
            Value::Array(items) => format!("array[{}]", items.len()),
            Value::Map(map) => format!("map[{}]", map.key_type()),
            Value::Ptr(inner) => format!("*{}", inner.type_name()),
            Value::Opaque(opaque) => opaque.type_name.clone(),
        }
    }

    /// The elements of a sequence-like value, without dereferencing.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            Value::Slice(items) => Some(items),
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut [Value]> {
        match self {
            Value::List(items) => Some(items),
            Value::Slice(items) => Some(items),
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            Value::Slice(items) => Some(items.0),
            Value::Array(items) => Some(items.into_vec()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Number of elements or entries of a container value.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Map(map) => Some(map.len()),
            other => other.as_sequence().map(<[Value]>::len),
        }
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Int(val.into())
    }
}

impl From<u64> for Value {
    fn from(val: u64) -> Self {
        Value::Uint(val)
    }
}

impl From<u32> for Value {
    fn from(val: u32) -> Self {
        Value::Uint(val.into())
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Str(val.to_owned())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Str(val)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(val: DateTime<Utc>) -> Self {
        Value::Time(val)
    }
}

impl From<Vec<Value>> for Value {
    fn from(val: Vec<Value>) -> Self {
        Value::List(val)
    }
}

impl From<Slice> for Value {
    fn from(val: Slice) -> Self {
        Value::Slice(val)
    }
}

impl From<Mapping> for Value {
    fn from(val: Mapping) -> Self {
        Value::Map(val)
    }
}

/// The host's sequence wrapper. Sorting a `Slice` yields a `Slice`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slice(pub Vec<Value>);

impl Slice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for Slice {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Slice {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Value>> for Slice {
    fn from(items: Vec<Value>) -> Self {
        Slice(items)
    }
}

impl FromIterator<Value> for Slice {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Slice(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opaque {
    pub type_name: String,
}

/// The declared key type of a [`Mapping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    Any,
    Bool,
    Int,
    Uint,
    String,
}

impl KeyType {
    /// Converts `key` into a map key if it is assignable to this key type.
    pub fn admit(self, key: &Value) -> Option<MapKey> {
        let (key, _) = key.indirect();
        match (self, key) {
            (KeyType::Any | KeyType::Bool, Value::Bool(b)) => Some(MapKey::Bool(*b)),
            (KeyType::Any | KeyType::Int, Value::Int(i)) => Some(MapKey::Int(*i)),
            (KeyType::Any | KeyType::Uint, Value::Uint(u)) => Some(MapKey::Uint(*u)),
            (KeyType::Any | KeyType::String, Value::Str(s)) => Some(MapKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Any => "any",
            KeyType::Bool => "bool",
            KeyType::Int => "int",
            KeyType::Uint => "uint",
            KeyType::String => "string",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Str(String),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(b) => write!(f, "{b}"),
            MapKey::Int(i) => write!(f, "{i}"),
            MapKey::Uint(u) => write!(f, "{u}"),
            MapKey::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Key/value container with a declared key type.
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    key_type: KeyType,
    entries: BTreeMap<MapKey, Value>,
}

impl Mapping {
    pub fn new(key_type: KeyType) -> Self {
        Self {
            key_type,
            entries: BTreeMap::new(),
        }
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry, failing if `key` is not assignable to the declared key type.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = key.into();
        let map_key = self
            .key_type
            .admit(&key)
            .ok_or_else(|| Error::key_type_mismatch(key.type_name(), format!("map[{}]", self.key_type)))?;

        Ok(self.entries.insert(map_key, value.into()))
    }

    pub fn get(&self, key: &MapKey) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &Value)> {
        self.entries.iter()
    }
}

/// String-keyed mappings, the common case in templates.
impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            key_type: KeyType::String,
            entries: iter
                .into_iter()
                .map(|(k, v)| (MapKey::Str(k.into()), v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indirect_reports_wrapping() {
        let plain = Value::Int(3);
        assert_eq!(plain.indirect(), (&Value::Int(3), false));

        let wrapped = Value::ptr(Value::ptr(3));
        assert_eq!(wrapped.indirect(), (&Value::Int(3), true));
        assert_eq!(wrapped.into_indirect(), (Value::Int(3), true));
    }

    #[test]
    fn key_type_assignability() {
        assert_eq!(KeyType::String.admit(&"age".into()), Some(MapKey::Str("age".into())));
        assert_eq!(KeyType::String.admit(&Value::Int(0xbeef)), None);
        assert_eq!(KeyType::Any.admit(&Value::ptr(7)), Some(MapKey::Int(7)));
        assert_eq!(KeyType::Any.admit(&Value::Float(1.0)), None);
        assert_eq!(KeyType::Uint.admit(&Value::Int(1)), None);
    }

    #[test]
    fn mapping_insert_checks_key_type() {
        let mut map = Mapping::new(KeyType::Int);
        assert!(map.insert(1, "a").unwrap().is_none());
        assert_eq!(map.insert(1, "b").unwrap(), Some(Value::from("a")));
        assert!(map.insert("x", 1).is_err());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn container_lengths() {
        let map: Mapping = [("a", Value::Int(1)), ("b", Value::Int(2))].into_iter().collect();
        assert_eq!(Value::Map(map).len(), Some(2));
        assert_eq!(Value::Array(vec![Value::Nil; 3].into_boxed_slice()).len(), Some(3));
        assert_eq!(Value::Int(1).len(), None);
    }
}
