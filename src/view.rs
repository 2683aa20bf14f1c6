use std::collections::VecDeque;

/// In-place mutable access to a collection, independent of how it is stored.
///
/// The sort driver only ever reads elements and swaps them, so no element is cloned while
/// sorting.
pub trait CollectionView {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> &Self::Item;

    fn get_mut(&mut self, index: usize) -> &mut Self::Item;

    fn swap(&mut self, a: usize, b: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> CollectionView for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> CollectionView for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate_left_by_one<V: CollectionView + ?Sized>(v: &mut V) {
        for i in 1..v.len() {
            v.swap(i - 1, i);
        }
    }

    #[test]
    fn slice_view() {
        let mut v = vec![1, 2, 3];
        let view: &mut [i32] = &mut v;
        rotate_left_by_one(view);
        *<[i32] as CollectionView>::get_mut(&mut *view, 0) = 20;
        assert_eq!(*<[i32] as CollectionView>::get(&*view, 2), 1);
        assert_eq!(v, [20, 3, 1]);
    }

    #[test]
    fn deque_view_wraps_around() {
        let mut v: VecDeque<i32> = VecDeque::with_capacity(4);
        v.extend([2, 3]);
        v.push_front(1);
        rotate_left_by_one(&mut v);
        assert_eq!(<VecDeque<i32> as CollectionView>::len(&v), 3);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [2, 3, 1]);
    }
}
