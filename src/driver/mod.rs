//! In-place sorting through a [`CollectionView`].
//!
//! Both strategies only take a strict less-than function and move elements exclusively with
//! [`CollectionView::swap`].

use crate::view::CollectionView;

pub mod stable;
pub mod unstable;

/// A sorting strategy over collection views.
pub trait ViewSort {
    fn name() -> String;

    fn sort_by<V, F>(v: &mut V, is_less: F)
    where
        V: CollectionView + ?Sized,
        F: FnMut(&V::Item, &V::Item) -> bool;
}

/// Sorts `v` by `is_less`.
///
/// `reverse` flips the arguments of `is_less` instead of reversing the output, so a stable
/// reversed sort keeps equal elements in input order.
pub fn sort_by<V, F>(v: &mut V, mut is_less: F, stable: bool, reverse: bool)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    if reverse {
        dispatch(v, |a: &V::Item, b: &V::Item| is_less(b, a), stable);
    } else {
        dispatch(v, is_less, stable);
    }
}

#[inline]
fn dispatch<V, F>(v: &mut V, is_less: F, stable: bool)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    if stable {
        stable::sort_by(v, is_less);
    } else {
        unstable::sort_by(v, is_less);
    }
}

/// Stable insertion sort of `v[lo..hi]`.
pub(crate) fn insertion_sort<V, F>(v: &mut V, lo: usize, hi: usize, is_less: &mut F)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && is_less(v.get(j), v.get(j - 1)) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_flips_comparator() {
        let mut v = [3, 1, 2];
        sort_by(&mut v[..], |a, b| a < b, false, true);
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn stable_reverse_keeps_input_order_of_equals() {
        let mut v = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        sort_by(&mut v[..], |a, b| a.0 < b.0, true, true);
        assert_eq!(v, [(2, 'b'), (2, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn insertion_sort_sub_range() {
        let mut v = [9, 4, 3, 2, 0];
        insertion_sort(&mut v[..], 1, 4, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [9, 2, 3, 4, 0]);
    }
}
