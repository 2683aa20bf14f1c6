//! Categorization mode: bucket elements by comparable class, then sort every bucket.

use std::collections::BTreeMap;

use log::trace;

use crate::class::{classify, ComparableClass};
use crate::compare::registry;
use crate::driver;
use crate::error::{Error, Result};
use crate::value::{Slice, Value};

/// Elements grouped by comparable class. Only classes present in the input have a bucket.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategorizedResult {
    buckets: BTreeMap<ComparableClass, Slice>,
}

macro_rules! bucket_accessors {
    ($($name:ident => $class:ident),* $(,)?) => {
        paste::paste! {
            impl CategorizedResult {
                $(
                    pub fn $name(&self) -> Option<&Slice> {
                        self.get(ComparableClass::$class)
                    }

                    pub fn [<take_ $name>](&mut self) -> Option<Slice> {
                        self.buckets.remove(&ComparableClass::$class)
                    }
                )*
            }
        }
    };
}

bucket_accessors!(
    ints => Integer,
    uints => UnsignedInteger,
    floats => Float,
    strings => String,
    times => Timestamp,
    sequences => Sequence,
    maps => Mapping,
);

impl CategorizedResult {
    pub fn get(&self, class: ComparableClass) -> Option<&Slice> {
        self.buckets.get(&class)
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComparableClass, &Slice)> {
        self.buckets.iter().map(|(class, slice)| (*class, slice))
    }

    pub fn into_inner(self) -> BTreeMap<ComparableClass, Slice> {
        self.buckets
    }
}

impl<const N: usize> From<[(ComparableClass, Slice); N]> for CategorizedResult {
    fn from(buckets: [(ComparableClass, Slice); N]) -> Self {
        Self {
            buckets: buckets.into_iter().collect(),
        }
    }
}

/// Moves every element, dereferenced, into the bucket of its class.
pub fn partition(items: Vec<Value>) -> Result<CategorizedResult> {
    let mut buckets: BTreeMap<ComparableClass, Slice> = BTreeMap::new();
    for item in items {
        let (item, _) = item.into_indirect();
        let class = classify(&item);
        if class == ComparableClass::Invalid {
            return Err(Error::unsupported_element(item.type_name()));
        }

        buckets.entry(class).or_default().push(item);
    }

    Ok(CategorizedResult { buckets })
}

/// Partitions `items` and sorts each bucket with its class comparator.
pub fn partition_and_sort(items: Vec<Value>, stable: bool, reverse: bool) -> Result<CategorizedResult> {
    let mut result = partition(items)?;
    for (class, bucket) in result.buckets.iter_mut() {
        // Buckets only exist for valid classes.
        let Some(less) = registry().get(*class) else {
            continue;
        };

        trace!("sorting {} bucket of {} elements", class, bucket.len());
        driver::sort_by(bucket.as_mut_slice(), less, stable, reverse);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn buckets_only_present_classes() {
        let items = vec![Value::Int(1), "a".into(), Value::Float(2.5), "b".into(), Value::Int(3)];
        let result = partition(items).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.uints().is_none());
        assert!(result.maps().is_none());
        assert_eq!(result.ints(), Some(&Slice(vec![Value::Int(1), Value::Int(3)])));
    }

    #[test]
    fn buckets_hold_dereferenced_values() {
        let result = partition(vec![Value::ptr(2), Value::Int(1)]).unwrap();
        assert_eq!(result.ints(), Some(&Slice(vec![Value::Int(2), Value::Int(1)])));
    }

    #[test]
    fn sorts_each_bucket() {
        let items = vec!["joe".into(), "bob".into(), Value::Int(2), "abby".into(), Value::Int(4), Value::Int(3)];
        let mut result = partition_and_sort(items, false, true).unwrap();
        assert_eq!(
            result.take_ints(),
            Some(Slice(vec![Value::Int(4), Value::Int(3), Value::Int(2)]))
        );
        assert_eq!(
            result.strings(),
            Some(&Slice(vec!["joe".into(), "bob".into(), "abby".into()]))
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn rejects_unsupported() {
        let err = partition(vec![Value::Int(1), Value::Bool(true)]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedElementType { .. }));
    }

    #[test]
    fn empty_input_has_no_buckets() {
        let result = partition_and_sort(Vec::new(), true, false).unwrap();
        assert!(result.is_empty());
        assert_eq!(result, CategorizedResult::default());
    }
}
