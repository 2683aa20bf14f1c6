use std::fmt;

use crate::value::Value;

/// The closed set of value categories the engine knows how to order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComparableClass {
    Integer,
    UnsignedInteger,
    Float,
    String,
    Timestamp,
    Sequence,
    Mapping,
    Invalid,
}

impl ComparableClass {
    pub fn is_indexable(self) -> bool {
        matches!(self, ComparableClass::Sequence | ComparableClass::Mapping)
    }
}

impl fmt::Display for ComparableClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComparableClass::Integer => "int",
            ComparableClass::UnsignedInteger => "uint",
            ComparableClass::Float => "float",
            ComparableClass::String => "string",
            ComparableClass::Timestamp => "time",
            ComparableClass::Sequence => "sequence",
            ComparableClass::Mapping => "map",
            ComparableClass::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Returns the comparable class of `v` after dereferencing it.
pub fn classify(v: &Value) -> ComparableClass {
    let (v, _) = v.indirect();
    match v {
        Value::Int(_) => ComparableClass::Integer,
        Value::Uint(_) => ComparableClass::UnsignedInteger,
        Value::Float(_) => ComparableClass::Float,
        Value::Str(_) => ComparableClass::String,
        Value::Time(_) => ComparableClass::Timestamp,
        Value::List(_) | Value::Slice(_) | Value::Array(_) => ComparableClass::Sequence,
        Value::Map(_) => ComparableClass::Mapping,
        // `indirect` never stops on a pointer, kept for exhaustiveness.
        Value::Ptr(inner) => classify(inner),
        Value::Nil | Value::Bool(_) | Value::Opaque(_) => ComparableClass::Invalid,
    }
}
