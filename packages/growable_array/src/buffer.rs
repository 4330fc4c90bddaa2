use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::any::type_name;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};
use std::{fmt, mem, slice};

use scopeguard::ScopeGuard;

/// A heap block of `T` slots owned by exactly one instance at a time.
///
/// Every slot in the block is a constructed value for the entire life of the buffer, so the
/// buffer can hand out the whole block as a slice. The length of the block is fixed at
/// construction; growing means building a new buffer and exchanging it for the old one via
/// [`swap_with()`][1].
///
/// Ownership of the block can be released with [`into_raw_parts()`][2] and adopted again with
/// [`from_raw_parts()`][3]. Dropping the buffer drops every slot and frees the block.
///
/// Zero-length buffers and buffers of zero-sized types never touch the allocator.
///
/// # Examples
///
/// ```
/// use growable_array::OwnedBuffer;
///
/// let mut squares = OwnedBuffer::from_fn(4, |index| index * index);
/// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
///
/// let mut empty = OwnedBuffer::new();
/// squares.swap_with(&mut empty);
///
/// assert!(squares.is_empty());
/// assert_eq!(empty.len(), 4);
/// ```
///
/// [1]: Self::swap_with
/// [2]: Self::into_raw_parts
/// [3]: Self::from_raw_parts
pub struct OwnedBuffer<T> {
    /// First slot of the block. Dangling if no block is allocated.
    ptr: NonNull<T>,

    /// Number of slots in the block, all of them constructed.
    len: usize,

    _owns: PhantomData<T>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer that owns no block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates a block of `len` slots and constructs slot `i` as `f(i)`, in index order.
    ///
    /// If `f` panics, the slots constructed so far are dropped and the block is freed before
    /// the panic continues.
    ///
    /// # Panics
    ///
    /// Panics if the size of the block in bytes would overflow `isize::MAX`.
    #[must_use]
    pub fn from_fn<F>(len: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        if len == 0 {
            return Self::new();
        }

        let ptr = Self::allocate_block(len);

        let mut constructed = scopeguard::guard(0_usize, |constructed| {
            // SAFETY: Exactly `constructed` leading slots have been written and nothing else
            // refers to them, so we are the ones who must drop them.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), constructed));
            }

            // SAFETY: The block came from `allocate_block()` with the same length.
            unsafe {
                Self::free_block(ptr, len);
            }
        });

        for index in 0..len {
            let value = f(index);

            // SAFETY: `index < len` so the slot is inside the block, and it has not been
            // written yet so there is no previous value to drop.
            unsafe {
                ptr.add(index).write(value);
            }

            *constructed = index
                .checked_add(1)
                .expect("guarded by loop range, which ends at a valid usize");
        }

        // Every slot is constructed, the block now belongs to the buffer.
        _ = ScopeGuard::into_inner(constructed);

        Self {
            ptr,
            len,
            _owns: PhantomData,
        }
    }

    /// Adopts a block previously released by [`into_raw_parts()`][1].
    ///
    /// # Safety
    ///
    /// `ptr` and `len` must be exactly the pair returned by [`into_raw_parts()`][1] on an
    /// `OwnedBuffer<T>`, and the block must not have been adopted since. The caller must not
    /// access the block through `ptr` after this call.
    ///
    /// [1]: Self::into_raw_parts
    #[must_use]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            len,
            _owns: PhantomData,
        }
    }

    /// Releases ownership of the block, returning its first slot and its length.
    ///
    /// The caller becomes responsible for the slots and the memory. The only way to free them
    /// is to adopt the block again via [`from_raw_parts()`][1] and drop the resulting buffer.
    ///
    /// [1]: Self::from_raw_parts
    #[must_use]
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        (this.ptr, this.len)
    }

    /// The number of slots in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer owns no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw pointer to the first slot, or null if the buffer has no slots.
    ///
    /// The pointer is only valid until the buffer is dropped, released or swapped.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        if self.is_empty() {
            ptr::null()
        } else {
            self.ptr.as_ptr()
        }
    }

    /// Mutable raw pointer to the first slot, or null if the buffer has no slots.
    ///
    /// The pointer is only valid until the buffer is dropped, released or swapped.
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.is_empty() {
            ptr::null_mut()
        } else {
            self.ptr.as_ptr()
        }
    }

    /// All slots of the block.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All `len` slots are constructed and the pointer is either a live block of
        // that many slots or dangling-but-aligned with `len == 0` (or a zero-sized `T`).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// All slots of the block.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As in `as_slice()`, and we hold the only reference to the buffer.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Exchanges the owned blocks of two buffers. No slot is moved or copied.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.len, &mut other.len);
    }

    #[must_use]
    fn layout(len: usize) -> Layout {
        Layout::array::<T>(len).unwrap_or_else(|_| {
            panic!(
                "buffer of {len} slots of {} exceeds the maximum allocation size",
                type_name::<T>()
            )
        })
    }

    fn allocate_block(len: usize) -> NonNull<T> {
        let layout = Self::layout(len);

        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: The layout is valid for an array of `T` and has a non-zero size.
        let raw = unsafe { alloc(layout) };

        NonNull::new(raw.cast::<T>()).unwrap_or_else(|| handle_alloc_error(layout))
    }

    /// # Safety
    ///
    /// `ptr` must come from `allocate_block(len)` and all slots must already be dropped
    /// or moved out.
    unsafe fn free_block(ptr: NonNull<T>, len: usize) {
        let layout = Self::layout(len);

        if layout.size() == 0 {
            return;
        }

        // SAFETY: Forwarding the caller's guarantee that the pointer and layout match the
        // original allocation.
        unsafe {
            dealloc(ptr.as_ptr().cast(), layout);
        }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        let ptr = self.ptr;
        let len = self.len;

        // The block is freed even if dropping one of the slots panics.
        let _free = scopeguard::guard((), move |()| {
            // SAFETY: The block came from `allocate_block(len)` and its slots are dropped
            // (or being unwound out of) by the time this guard runs.
            unsafe {
                Self::free_block(ptr, len);
            }
        });

        // SAFETY: All `len` slots are constructed and this is the last use of them.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
        }
    }
}

impl<T> fmt::Debug for OwnedBuffer<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: The buffer exclusively owns its slots, so moving it to another thread moves the
// slots, which is fine as long as `T` itself can move between threads.
unsafe impl<T: Send> Send for OwnedBuffer<T> {}

// SAFETY: Shared access to the buffer only yields shared access to the slots.
unsafe impl<T: Sync> Sync for OwnedBuffer<T> {}
