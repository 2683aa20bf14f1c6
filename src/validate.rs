//! Homogeneity check and construction of the element comparator.
//!
//! A single pass over the collection rejects malformed input before anything gets reordered,
//! so a failed sort leaves the collection in its original order.

use log::debug;

use crate::class::{classify, ComparableClass};
use crate::compare::{registry, LessFn};
use crate::error::{Error, Result};
use crate::key::{extract, ResolvedKey};
use crate::value::Value;
use crate::view::CollectionView;

/// Comparison function for the elements of a validated collection.
#[derive(Clone, Debug)]
pub enum ElementOrder {
    /// Compare the elements themselves.
    Direct(LessFn),
    /// Compare the sub-values found at `key` in every element.
    Keyed { key: ResolvedKey, less: LessFn },
}

impl ElementOrder {
    pub fn is_less(&self, a: &Value, b: &Value) -> bool {
        match self {
            ElementOrder::Direct(less) => less(a.indirect().0, b.indirect().0),
            ElementOrder::Keyed { key, less } => match (key.lookup(a), key.lookup(b)) {
                (Some(a), Some(b)) => less(a, b),
                _ => false,
            },
        }
    }
}

/// Checks that all elements of `view` (and their keyed sub-values, if `key` is set) share one
/// comparable class and returns the comparator for them.
///
/// `view` must not be empty.
pub fn element_order<V>(view: &V, key: Option<&Value>) -> Result<ElementOrder>
where
    V: CollectionView<Item = Value> + ?Sized,
{
    let (first, _) = view.get(0).indirect();
    let elem_class = classify(first);
    let less_for = |class: ComparableClass| registry().get(class);

    let Some(elem_less) = less_for(elem_class) else {
        return Err(Error::unsupported_element(first.type_name()));
    };

    let indexed = match key {
        Some(key) => {
            let sub = indexed_value(first, elem_class, key)?;
            let class = classify(sub);
            match less_for(class) {
                Some(less) => Some((sub, class, less)),
                None => return Err(Error::unsupported_indexed(sub.type_name())),
            }
        }
        None => None,
    };

    for i in 1..view.len() {
        let (cur, _) = view.get(i).indirect();
        let cur_class = classify(cur);
        if cur_class == ComparableClass::Invalid {
            return Err(Error::unsupported_element(cur.type_name()));
        }

        if cur_class != elem_class {
            debug!("element {i} is {cur_class}, expected {elem_class}");
            return Err(Error::heterogeneous_elements(cur.type_name(), first.type_name()));
        }

        if let (Some(key), Some((first_sub, indexed_class, _))) = (key, &indexed) {
            let sub = indexed_value(cur, cur_class, key)?;
            let sub_class = classify(sub);
            if sub_class == ComparableClass::Invalid {
                return Err(Error::unsupported_indexed(sub.type_name()));
            }

            if sub_class != *indexed_class {
                debug!("indexed value of element {i} is {sub_class}, expected {indexed_class}");
                return Err(Error::heterogeneous_indexed(
                    sub.type_name(),
                    first_sub.type_name(),
                ));
            }
        }
    }

    match (key, indexed) {
        (Some(key), Some((_, _, less))) => {
            let key = ResolvedKey::resolve(elem_class, key)
                .ok_or_else(|| Error::not_indexable(first.type_name()))?;
            Ok(ElementOrder::Keyed { key, less })
        }
        _ => Ok(ElementOrder::Direct(elem_less)),
    }
}

/// The dereferenced sub-value of `v` at `key`.
fn indexed_value<'a>(v: &'a Value, class: ComparableClass, key: &Value) -> Result<&'a Value> {
    let sub = extract(v, class, key)?;
    Ok(sub.indirect().0)
}
