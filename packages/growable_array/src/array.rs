use std::any::type_name;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::{fmt, mem, slice};

use tracing::trace;

use crate::{CapacityRequest, Error, OwnedBuffer, Result};

/// A growable array of `T` stored in one contiguous, exclusively owned heap buffer.
///
/// The array tracks how many items are live (its length) and how many slots are allocated
/// (its capacity), with `len() <= capacity()` at all times. Items at indexes `0..len()` are the
/// content of the array. Slots at `len()..capacity()` are spare capacity: they always hold
/// constructed values, but those values are unspecified and not part of the content.
///
/// # Growth
///
/// Capacity only changes in [`resize()`][1] (and everything built on it, such as
/// [`insert()`][2] and [`push_back()`][3]) and [`reserve()`][4]. When a resize needs more room
/// than is allocated, the new capacity is the larger of the requested length and double the
/// old capacity, so an empty array goes straight from 0 to the requested length. This keeps
/// repeated appends amortized O(1).
///
/// Growing relocates the items into a new buffer. Any raw pointer obtained from the array
/// (for example via `as_ptr()` on the slice) is invalidated by growth, by swapping and by
/// assignment. Indexes remain meaningful across growth.
///
/// Shrinking never releases memory: [`resize()`][1] to a smaller length, [`pop_back()`][5],
/// [`erase()`][6] and [`clear()`][7] only change which slots are live.
///
/// Operations that grow the array require `T: Default` because every new slot must hold a
/// constructed value.
///
/// # Access
///
/// The array dereferences to a slice of its live items, so all slice methods are available.
/// Indexing with `[]` panics if the index is not below [`len()`][8]; [`at()`][9] returns an
/// [`Error::OutOfRange`] instead.
///
/// # Examples
///
/// ```
/// use growable_array::GrowableArray;
///
/// let mut numbers = GrowableArray::new();
///
/// numbers.push_back(1);
/// numbers.push_back(2);
/// numbers.push_back(3);
/// assert_eq!(numbers, [1, 2, 3]);
/// assert_eq!(numbers.capacity(), 4);
///
/// numbers.insert(1, 9);
/// assert_eq!(numbers, [1, 9, 2, 3]);
///
/// numbers.erase(0);
/// assert_eq!(numbers, [9, 2, 3]);
///
/// numbers.clear();
/// assert!(numbers.is_empty());
/// assert_eq!(numbers.capacity(), 4);
/// ```
///
/// [1]: Self::resize
/// [2]: Self::insert
/// [3]: Self::push_back
/// [4]: Self::reserve
/// [5]: Self::pop_back
/// [6]: Self::erase
/// [7]: Self::clear
/// [8]: Self::len
/// [9]: Self::at
pub struct GrowableArray<T> {
    /// All allocated slots. The length of the buffer is the capacity of the array.
    buffer: OwnedBuffer<T>,

    /// Number of live items at the front of the buffer.
    len: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array without allocating.
    ///
    /// # Example
    ///
    /// ```
    /// use growable_array::GrowableArray;
    ///
    /// let array = GrowableArray::<String>::new();
    ///
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: OwnedBuffer::new(),
            len: 0,
        }
    }

    pub(crate) fn from_parts(buffer: OwnedBuffer<T>, len: usize) -> Self {
        assert!(
            len <= buffer.len(),
            "length {len} exceeds capacity {} in GrowableArray of {}",
            buffer.len(),
            type_name::<T>()
        );

        Self { buffer, len }
    }

    /// The number of live items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of allocated slots, live or spare.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the array has no live items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live items.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer
            .as_slice()
            .get(..self.len)
            .expect("length never exceeds capacity")
    }

    /// The live items.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;

        self.buffer
            .as_mut_slice()
            .get_mut(..len)
            .expect("length never exceeds capacity")
    }

    /// Iterates over the live items in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live items in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use growable_array::{Error, GrowableArray};
    ///
    /// let array = GrowableArray::from_elem(3, &7);
    ///
    /// assert_eq!(array.at(2), Ok(&7));
    /// assert_eq!(array.at(5), Err(Error::OutOfRange { index: 5, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns the item at `index` for modification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Removes the last item by shrinking the length by one. Does nothing if the array is empty.
    ///
    /// The vacated slot becomes spare capacity and keeps its value until overwritten.
    pub fn pop_back(&mut self) {
        self.len = self.len.saturating_sub(1);
    }

    /// Removes the item at `index`, shifting every later item one slot towards the front.
    ///
    /// Returns the index that now holds the item that followed the removed one, which equals
    /// the new `len()` if the last item was removed. Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index {index} is out of bounds for length {} in GrowableArray of {}",
            self.len,
            type_name::<T>()
        );

        // Rotating the removed item to the back of the live range shifts the tail left by one
        // and leaves the removed item in what becomes the first spare slot.
        self.as_mut_slice()
            .get_mut(index..)
            .expect("guarded by assertion above")
            .rotate_left(1);

        self.len = self
            .len
            .checked_sub(1)
            .expect("guarded by assertion above, which implies a non-zero length");

        index
    }

    /// Sets the length to zero without touching capacity, so the buffer can be reused.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges the buffers, lengths and capacities of two arrays in constant time.
    ///
    /// No item is moved or copied.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap_with(&mut other.buffer);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out of this array, leaving it empty with zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use growable_array::GrowableArray;
    ///
    /// let mut source = GrowableArray::from([1, 2, 3]);
    /// let destination = source.take();
    ///
    /// assert_eq!(destination, [1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap_with(&mut taken);
        taken
    }
}

impl<T: Default> GrowableArray<T> {
    /// Creates an array of `len` default-valued items, with capacity equal to `len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self::from_parts(OwnedBuffer::from_fn(len, |_| T::default()), len)
    }

    /// Creates an empty array with `capacity` allocated slots.
    ///
    /// Shorthand for `GrowableArray::from(CapacityRequest::new(capacity))`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(CapacityRequest::new(capacity))
    }

    /// Ensures there is room for at least the requested number of items.
    ///
    /// If the request exceeds the current capacity, the live items are relocated in order into
    /// a new buffer of exactly the requested capacity. Otherwise nothing happens. Neither the
    /// length nor the live items change either way.
    ///
    /// # Example
    ///
    /// ```
    /// use growable_array::GrowableArray;
    ///
    /// let mut array = GrowableArray::from([1, 2]);
    ///
    /// array.reserve(10);
    /// assert_eq!(array.capacity(), 10);
    ///
    /// array.reserve(5);
    /// assert_eq!(array.capacity(), 10);
    /// assert_eq!(array, [1, 2]);
    /// ```
    pub fn reserve(&mut self, request: impl Into<CapacityRequest>) {
        let requested = request.into().capacity();

        if requested <= self.capacity() {
            return;
        }

        self.relocate(requested);
    }

    /// Changes the length to `new_len`.
    ///
    /// * Shrinking only changes the length. No item is dropped and capacity is kept.
    /// * Growing within capacity only changes the length. The newly live slots expose whatever
    ///   values the spare slots held.
    /// * Growing beyond capacity relocates the items into a new buffer of capacity
    ///   `max(new_len, 2 * capacity())`, with default values in the new slots.
    ///
    /// # Example
    ///
    /// ```
    /// use growable_array::GrowableArray;
    ///
    /// let mut array = GrowableArray::from([1, 2, 3]);
    ///
    /// array.resize(5);
    /// assert_eq!(array, [1, 2, 3, 0, 0]);
    /// assert_eq!(array.capacity(), 6);
    ///
    /// array.resize(2);
    /// assert_eq!(array, [1, 2]);
    /// assert_eq!(array.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        let capacity = self.capacity();

        if new_len > capacity {
            self.relocate(new_len.max(capacity.saturating_mul(2)));
        }

        self.len = new_len;
    }

    /// Inserts `value` at `index`, shifting the item there and every later item one slot
    /// towards the back. Inserting at `index == len()` appends.
    ///
    /// Grows with the same policy as [`resize()`][1] when the array is full. Returns `index`,
    /// which now holds `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use growable_array::GrowableArray;
    ///
    /// let mut array = GrowableArray::from([1, 2, 3]);
    ///
    /// assert_eq!(array.insert(1, 9), 1);
    /// assert_eq!(array, [1, 9, 2, 3]);
    ///
    /// array.insert(4, 10);
    /// assert_eq!(array, [1, 9, 2, 3, 10]);
    /// ```
    ///
    /// [1]: Self::resize
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.len,
            "insert index {index} is out of bounds for length {} in GrowableArray of {}",
            self.len,
            type_name::<T>()
        );

        // Only the index survives the resize; the buffer may be a different one afterwards.
        let new_len = self
            .len
            .checked_add(1)
            .expect("a full array of usize::MAX items cannot be grown");
        self.resize(new_len);

        // The last live slot is the former first spare slot. Rotating it to the front of the
        // tail shifts the tail right by one and frees up `index` for the new value.
        let tail = self
            .as_mut_slice()
            .get_mut(index..)
            .expect("guarded by assertion above");
        tail.rotate_right(1);

        *tail
            .first_mut()
            .expect("tail includes at least the slot added by the resize") = value;

        index
    }

    /// Appends `value` after the last item. Equivalent to `insert(len(), value)`.
    ///
    /// When the array is full, capacity doubles (or becomes 1 if it was 0).
    pub fn push_back(&mut self, value: T) {
        _ = self.insert(self.len, value);
    }

    /// Moves the live items in order into a new buffer of `new_capacity` default-valued slots
    /// and adopts it, dropping the old buffer.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);

        trace!(
            item_type = type_name::<T>(),
            len = self.len,
            old_capacity = self.capacity(),
            new_capacity,
            "relocating items to a new buffer"
        );

        let mut live = self.as_mut_slice().iter_mut();

        let mut replacement = OwnedBuffer::from_fn(new_capacity, |_| {
            live.next().map_or_else(T::default, mem::take)
        });

        self.buffer.swap_with(&mut replacement);
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Creates an array of `len` clones of `value`, with capacity equal to `len`.
    #[must_use]
    pub fn from_elem(len: usize, value: &T) -> Self {
        Self::from_parts(OwnedBuffer::from_fn(len, |_| value.clone()), len)
    }

    /// Creates an array holding clones of `items` in order, with capacity equal to their count.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        let mut source = items.iter();

        let buffer = OwnedBuffer::from_fn(items.len(), |_| {
            source
                .next()
                .expect("buffer is exactly as long as the source")
                .clone()
        });

        Self::from_parts(buffer, items.len())
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning allocates exactly as many slots as there are live items; spare capacity of the
/// source is not carried over.
impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap_with(&mut replacement);
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;

        self.as_slice().get(index).unwrap_or_else(|| {
            panic!(
                "index {index} is out of bounds for length {len} in GrowableArray of {}",
                type_name::<T>()
            )
        })
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;

        self.as_mut_slice().get_mut(index).unwrap_or_else(|| {
            panic!(
                "index {index} is out of bounds for length {len} in GrowableArray of {}",
                type_name::<T>()
            )
        })
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic comparison of the live items.
impl<T: PartialOrd> PartialOrd for GrowableArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowableArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}
