//! Stable in-place merge sort. Insertion sorted blocks merged bottom-up without a buffer.

use std::cmp;

use crate::driver::insertion_sort;
use crate::view::CollectionView;

sort_impl!("view_merge_stable");

const BLOCK_LEN: usize = 20;

#[inline]
pub fn sort_by<V, F>(v: &mut V, mut is_less: F)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    merge_sort(v, &mut is_less);
}

fn merge_sort<V, F>(v: &mut V, is_less: &mut F)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut start = 0;
    while start < len {
        let end = cmp::min(start + BLOCK_LEN, len);
        insertion_sort(v, start, end, is_less);
        start = end;
    }

    let mut width = BLOCK_LEN;
    while width < len {
        let mut lo = 0;
        while lo + width < len {
            let mid = lo + width;
            let hi = cmp::min(mid + width, len);
            merge(v, lo, mid, hi, is_less);
            lo = hi;
        }

        width *= 2;
    }
}

/// Merges the sorted runs `v[lo..mid]` and `v[mid..hi]`.
fn merge<V, F>(v: &mut V, lo: usize, mid: usize, hi: usize, is_less: &mut F)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    if lo == mid || mid == hi {
        return;
    }

    // Runs that already line up need no work, this keeps sorted input linear.
    if !is_less(v.get(mid), v.get(mid - 1)) {
        return;
    }

    if mid - lo == 1 {
        let pos = lower_bound(v, mid, hi, lo, is_less);
        rotate(v, lo, mid, pos);
        return;
    }

    if hi - mid == 1 {
        let pos = upper_bound(v, lo, mid, mid, is_less);
        rotate(v, pos, mid, hi);
        return;
    }

    // Split the longer run in half and find the matching cut in the other one. Everything in
    // `v[mid..cut_right]` is strictly less than everything in `v[cut_left..mid]`.
    let (cut_left, cut_right) = if mid - lo >= hi - mid {
        let cut_left = lo + (mid - lo) / 2;
        (cut_left, lower_bound(v, mid, hi, cut_left, is_less))
    } else {
        let cut_right = mid + (hi - mid) / 2;
        (upper_bound(v, lo, mid, cut_right, is_less), cut_right)
    };

    rotate(v, cut_left, mid, cut_right);

    let new_mid = cut_left + (cut_right - mid);
    merge(v, lo, cut_left, new_mid, is_less);
    merge(v, new_mid, cut_right, hi, is_less);
}

/// First index in `v[lo..hi]` whose element is not less than `v[pivot]`.
fn lower_bound<V, F>(v: &V, mut lo: usize, mut hi: usize, pivot: usize, is_less: &mut F) -> usize
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    while lo < hi {
        let middle = lo + (hi - lo) / 2;
        if is_less(v.get(middle), v.get(pivot)) {
            lo = middle + 1;
        } else {
            hi = middle;
        }
    }

    lo
}

/// First index in `v[lo..hi]` whose element is greater than `v[pivot]`.
fn upper_bound<V, F>(v: &V, mut lo: usize, mut hi: usize, pivot: usize, is_less: &mut F) -> usize
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    while lo < hi {
        let middle = lo + (hi - lo) / 2;
        if is_less(v.get(pivot), v.get(middle)) {
            hi = middle;
        } else {
            lo = middle + 1;
        }
    }

    lo
}

/// Exchanges the adjacent blocks `v[start..mid]` and `v[mid..end]`.
fn rotate<V>(v: &mut V, mut start: usize, mid: usize, end: usize)
where
    V: CollectionView + ?Sized,
{
    let mut left_len = mid - start;
    let mut right_len = end - mid;

    while left_len > 0 && right_len > 0 {
        if left_len <= right_len {
            block_swap(v, start, start + left_len, left_len);
            start += left_len;
            right_len -= left_len;
        } else {
            block_swap(v, start + left_len - right_len, start + left_len, right_len);
            left_len -= right_len;
        }
    }
}

fn block_swap<V>(v: &mut V, a: usize, b: usize, block_len: usize)
where
    V: CollectionView + ?Sized,
{
    for i in 0..block_len {
        v.swap(a + i, b + i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_blocks() {
        let mut v = [1, 2, 3, 4, 5, 6, 7];
        rotate(&mut v[..], 1, 3, 7);
        assert_eq!(v, [1, 4, 5, 6, 7, 2, 3]);

        let mut v = [1, 2, 3, 4, 5];
        rotate(&mut v[..], 0, 4, 5);
        assert_eq!(v, [5, 1, 2, 3, 4]);
    }

    #[test]
    fn merge_keeps_left_run_first() {
        let mut v = [(1, 'a'), (3, 'a'), (5, 'a'), (1, 'b'), (3, 'b'), (4, 'b')];
        merge(&mut v[..], 0, 3, 6, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(
            v,
            [(1, 'a'), (1, 'b'), (3, 'a'), (3, 'b'), (4, 'b'), (5, 'a')]
        );
    }

    #[test]
    fn bounds() {
        let v = [1, 2, 2, 2, 5, 2];
        let mut is_less = |a: &i32, b: &i32| a < b;
        assert_eq!(lower_bound(&v[..], 0, 5, 5, &mut is_less), 1);
        assert_eq!(upper_bound(&v[..], 0, 5, 5, &mut is_less), 4);
    }
}
