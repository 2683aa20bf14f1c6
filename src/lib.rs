//! Sorting of runtime-typed collections for the templating host.
//!
//! [`sort`] takes a collection whose element type is only known at runtime, checks that all
//! elements are mutually comparable and orders them in place, keeping the container type the
//! caller handed in. In categorization mode the elements are instead grouped by
//! [`ComparableClass`] and every group is sorted on its own.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::driver::ViewSort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_by<V, F>(v: &mut V, is_less: F)
            where
                V: $crate::view::CollectionView + ?Sized,
                F: FnMut(&V::Item, &V::Item) -> bool,
            {
                sort_by(v, is_less);
            }
        }
    };
}

pub mod class;
pub mod compare;
pub mod driver;
pub mod error;
pub mod key;
pub mod options;
pub mod partition;
pub mod patterns;
pub mod validate;
pub mod value;
pub mod view;

use log::debug;

pub use class::{classify, ComparableClass};
pub use error::{Error, ErrorKind, Result};
pub use options::SortOptions;
pub use partition::CategorizedResult;
pub use value::{KeyType, MapKey, Mapping, Opaque, Slice, Value};
pub use view::CollectionView;

/// Outcome of [`sort`].
#[derive(Clone, Debug, PartialEq)]
pub enum Sorted {
    /// The sorted collection, same container variant as the input.
    Sequence(Value),
    Categorized(CategorizedResult),
}

impl Sorted {
    pub fn into_sequence(self) -> Option<Value> {
        match self {
            Sorted::Sequence(v) => Some(v),
            Sorted::Categorized(_) => None,
        }
    }

    pub fn into_categorized(self) -> Option<CategorizedResult> {
        match self {
            Sorted::Categorized(c) => Some(c),
            Sorted::Sequence(_) => None,
        }
    }
}

/// Sorts `collection` according to `options`.
///
/// The collection is dereferenced first and must be a sequence. Without categorization the
/// sequence is sorted in place and returned as the same variant it came in as. Nothing is
/// reordered unless the whole collection passed validation.
pub fn sort(collection: Value, options: &SortOptions) -> Result<Sorted> {
    let (mut collection, _) = collection.into_indirect();
    if collection.as_sequence().is_none() {
        return Err(Error::not_a_collection(collection.type_name()));
    }

    options.validate()?;

    debug!(
        "sorting {} of {} elements (reverse: {}, stable: {}, categorize: {}, keyed: {})",
        collection.type_name(),
        collection.len().unwrap_or_default(),
        options.reverse,
        options.stable,
        options.categorize,
        options.key.is_some(),
    );

    if options.categorize {
        let items = collection.into_sequence().unwrap_or_default();
        let categorized = partition::partition_and_sort(items, options.stable, options.reverse)?;
        return Ok(Sorted::Categorized(categorized));
    }

    // Nothing to classify.
    if collection.len() == Some(0) {
        return Ok(Sorted::Sequence(collection));
    }

    if let Some(items) = collection.as_sequence_mut() {
        let order = validate::element_order(&*items, options.key.as_ref()).map_err(|err| {
            debug!("rejected collection: {err}");
            err
        })?;

        driver::sort_by(
            items,
            |a: &Value, b: &Value| order.is_less(a, b),
            options.stable,
            options.reverse,
        );
    }

    Ok(Sorted::Sequence(collection))
}

/// Sorts `collection` with options given as the template's flat `name, value, ...` list.
pub fn sort_with_args(collection: Value, args: &[Value]) -> Result<Sorted> {
    let (target, _) = collection.indirect();
    if target.as_sequence().is_none() {
        return Err(Error::not_a_collection(target.type_name()));
    }

    let options = SortOptions::from_args(args)?;
    sort(collection, &options)
}
