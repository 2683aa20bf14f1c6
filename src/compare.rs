//! Per-class strict less-than functions.
//!
//! All comparators expect dereferenced values of the class they were looked up for. Nested
//! sequences and mappings are ordered by their length only.

use once_cell::sync::OnceCell;

use crate::class::ComparableClass;
use crate::value::Value;

pub type LessFn = fn(&Value, &Value) -> bool;

macro_rules! native_less {
    ($($name:ident => $variant:ident),* $(,)?) => {
        paste::paste! {
            $(
                fn [<$name _less>](a: &Value, b: &Value) -> bool {
                    match (a, b) {
                        (Value::$variant(a), Value::$variant(b)) => a < b,
                        _ => false,
                    }
                }
            )*
        }
    };
}

native_less!(
    int => Int,
    uint => Uint,
    float => Float,
    string => Str,
    time => Time,
);

fn len_less(a: &Value, b: &Value) -> bool {
    match (a.len(), b.len()) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Immutable table from comparable class to comparator.
#[derive(Debug)]
pub struct ComparatorRegistry {
    int: LessFn,
    uint: LessFn,
    float: LessFn,
    string: LessFn,
    time: LessFn,
    sequence: LessFn,
    mapping: LessFn,
}

impl ComparatorRegistry {
    fn new() -> Self {
        Self {
            int: int_less,
            uint: uint_less,
            float: float_less,
            string: string_less,
            time: time_less,
            sequence: len_less,
            mapping: len_less,
        }
    }

    /// Returns the comparator for `class`, `None` for [`ComparableClass::Invalid`].
    pub fn get(&self, class: ComparableClass) -> Option<LessFn> {
        match class {
            ComparableClass::Integer => Some(self.int),
            ComparableClass::UnsignedInteger => Some(self.uint),
            ComparableClass::Float => Some(self.float),
            ComparableClass::String => Some(self.string),
            ComparableClass::Timestamp => Some(self.time),
            ComparableClass::Sequence => Some(self.sequence),
            ComparableClass::Mapping => Some(self.mapping),
            ComparableClass::Invalid => None,
        }
    }
}

/// The process-wide registry, built on first use.
pub fn registry() -> &'static ComparatorRegistry {
    static REGISTRY: OnceCell<ComparatorRegistry> = OnceCell::new();
    REGISTRY.get_or_init(ComparatorRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Duration, Utc};

    use crate::value::{Mapping, Slice};

    fn less(class: ComparableClass) -> LessFn {
        registry().get(class).unwrap()
    }

    #[test]
    fn numeric_order() {
        let int = less(ComparableClass::Integer);
        assert!(int(&Value::Int(-3), &Value::Int(2)));
        assert!(!int(&Value::Int(2), &Value::Int(2)));

        let uint = less(ComparableClass::UnsignedInteger);
        assert!(uint(&Value::Uint(2), &Value::Uint(u64::MAX)));

        let float = less(ComparableClass::Float);
        assert!(float(&Value::Float(-1.5), &Value::Float(0.1)));
        assert!(!float(&Value::Float(f64::NAN), &Value::Float(0.0)));
        assert!(!float(&Value::Float(0.0), &Value::Float(f64::NAN)));
    }

    #[test]
    fn string_order_is_bytewise() {
        let string = less(ComparableClass::String);
        assert!(string(&"C".into(), &"a".into()));
        assert!(string(&"ab".into(), &"b".into()));
        assert!(!string(&"b".into(), &"b".into()));
    }

    #[test]
    fn time_order_is_chronological() {
        let t0 = Utc::now();
        let t1 = t0 - Duration::minutes(5);
        let time = less(ComparableClass::Timestamp);
        assert!(time(&t1.into(), &t0.into()));
        assert!(!time(&t0.into(), &t1.into()));
    }

    #[test]
    fn containers_order_by_len() {
        let seq = less(ComparableClass::Sequence);
        let short = Value::List(vec!["z".into()]);
        let long = Value::Slice(Slice(vec!["a".into(), "b".into()]));
        assert!(seq(&short, &long));
        assert!(!seq(&long, &short));

        let map = less(ComparableClass::Mapping);
        let empty = Value::Map(Mapping::from_iter(Vec::<(&str, Value)>::new()));
        let one = Value::Map(Mapping::from_iter([("k", Value::Nil)]));
        assert!(map(&empty, &one));
    }

    #[test]
    fn invalid_has_no_comparator() {
        assert!(registry().get(ComparableClass::Invalid).is_none());
    }
}
