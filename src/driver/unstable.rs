//! Introsort: quicksort with median-of-three pivots, heapsort once the depth budget runs out.

use crate::driver::insertion_sort;
use crate::view::CollectionView;

sort_impl!("view_introsort_unstable");

/// Slices up to this length get sorted using insertion sort.
const MAX_INSERTION: usize = 12;

#[inline]
pub fn sort_by<V, F>(v: &mut V, mut is_less: F)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Limit the number of partitioning rounds to twice the bit length of `len`.
    let limit = 2 * (usize::BITS - len.leading_zeros());

    recurse(v, 0, len, &mut is_less, limit);
}

fn recurse<V, F>(v: &mut V, mut lo: usize, mut hi: usize, is_less: &mut F, mut limit: u32)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    loop {
        let len = hi - lo;
        if len <= MAX_INSERTION {
            insertion_sort(v, lo, hi, is_less);
            return;
        }

        // Too many bad pivot choices, fall back to heapsort to guarantee `O(n * log(n))`.
        if limit == 0 {
            heapsort(v, lo, hi, is_less);
            return;
        }
        limit -= 1;

        let pivot = choose_pivot(v, lo, hi, is_less);
        v.swap(lo, pivot);
        let mid = partition(v, lo, hi, is_less);

        // Recurse into the shorter side only to bound stack usage, continue with the longer one.
        if mid - lo < hi - (mid + 1) {
            recurse(v, lo, mid, is_less, limit);
            lo = mid + 1;
        } else {
            recurse(v, mid + 1, hi, is_less, limit);
            hi = mid;
        }
    }
}

/// Returns the index of the median of the first, middle and last element of `v[lo..hi]`.
fn choose_pivot<V, F>(v: &V, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    let a = lo;
    let b = lo + (hi - lo) / 2;
    let c = hi - 1;

    let ab = is_less(v.get(a), v.get(b));
    let bc = is_less(v.get(b), v.get(c));
    let ac = is_less(v.get(a), v.get(c));

    if ab == bc {
        b
    } else if ab == ac {
        c
    } else {
        a
    }
}

/// Lomuto partition of `v[lo..hi]` around the pivot stored at `v[lo]`.
///
/// Returns the final position of the pivot. Elements before it are less than the pivot.
fn partition<V, F>(v: &mut V, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    let mut l = lo + 1;
    for r in (lo + 1)..hi {
        if is_less(v.get(r), v.get(lo)) {
            v.swap(l, r);
            l += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(lo, l - 1);
    l - 1
}

/// Sorts `v[lo..hi]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
fn heapsort<V, F>(v: &mut V, lo: usize, hi: usize, is_less: &mut F)
where
    V: CollectionView + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> bool,
{
    // This binary heap respects the invariant `parent >= child`.
    let mut sift_down = |v: &mut V, mut node: usize, end: usize| {
        loop {
            // Children of `node`.
            let mut child = 2 * node + 1;
            if child >= end {
                break;
            }

            // Choose the greater child.
            if child + 1 < end && is_less(v.get(lo + child), v.get(lo + child + 1)) {
                child += 1;
            }

            // Stop if the invariant holds at `node`.
            if !is_less(v.get(lo + node), v.get(lo + child)) {
                break;
            }

            v.swap(lo + node, lo + child);
            node = child;
        }
    };

    let len = hi - lo;

    // Build the heap in linear time.
    for i in (0..len / 2).rev() {
        sift_down(v, i, len);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(lo, lo + i);
        sift_down(v, 0, i);
    }
}
