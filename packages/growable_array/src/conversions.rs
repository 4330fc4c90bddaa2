use std::slice;

use crate::{CapacityRequest, GrowableArray, OwnedBuffer};

/// Creates an empty array with the requested number of default-valued spare slots.
impl<T: Default> From<CapacityRequest> for GrowableArray<T> {
    fn from(request: CapacityRequest) -> Self {
        Self::from_parts(
            OwnedBuffer::from_fn(request.capacity(), |_| T::default()),
            0,
        )
    }
}

/// Moves the items of the array literal in, with capacity equal to `N`.
impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut source = items.into_iter();

        let buffer = OwnedBuffer::from_fn(N, |_| {
            source
                .next()
                .expect("buffer is exactly as long as the source")
        });

        Self::from_parts(buffer, N)
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

/// Collects by appending one item at a time, so capacity follows the usual doubling policy.
impl<T: Default> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Default> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn from_capacity_request_has_no_items() {
        let array = GrowableArray::<String>::from(CapacityRequest::new(5));

        assert!(array.is_empty());
        assert_eq!(array.capacity(), 5);
    }

    #[test]
    fn from_array_moves_items() {
        let array = GrowableArray::from(["a".to_string(), "b".to_string()]);

        assert_eq!(array.len(), 2);
        assert_eq!(array.capacity(), 2);
        assert_eq!(array[0], "a");
        assert_eq!(array[1], "b");
    }

    #[test]
    fn from_empty_array() {
        let array = GrowableArray::<u32>::from([]);

        assert!(array.is_empty());
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn from_slice_ref_clones() {
        let source = vec![1, 2, 3];
        let array = GrowableArray::from(source.as_slice());

        assert_eq!(array, [1, 2, 3]);
        assert_eq!(source, [1, 2, 3]);
    }

    #[test]
    fn collect_follows_doubling() {
        let array = (0..5).collect::<GrowableArray<u32>>();

        assert_eq!(array, [0, 1, 2, 3, 4]);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn extend_appends() {
        let mut array = GrowableArray::from([1, 2]);

        array.extend([3, 4]);
        array.extend(&[5]);

        assert_eq!(array, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn into_iterator_for_references() {
        let mut array = GrowableArray::from([1, 2, 3]);

        for item in &mut array {
            *item += 1;
        }

        let mut sum = 0;
        for item in &array {
            sum += *item;
        }

        assert_eq!(sum, 9);
    }
}
