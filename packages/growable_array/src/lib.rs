#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A growable array over a single contiguous, exclusively owned heap buffer.
//!
//! [`GrowableArray`] provides vector-like value semantics: indexed access, positional insertion
//! and removal, resizing and bulk construction. It does not build on `Vec`; storage comes from
//! [`OwnedBuffer`], a block of constructed slots that is owned by exactly one instance at a time
//! and can be exchanged with another in constant time.
//!
//! Every allocated slot always holds a constructed value. Slots beyond the length of the array
//! are spare capacity whose values are unspecified until they become live again. Growing
//! therefore requires `T: Default`.
//!
//! # Capacity management
//!
//! * [`GrowableArray::resize()`] grows capacity to the larger of the requested length and twice
//!   the current capacity, which keeps appends amortized O(1).
//! * [`GrowableArray::reserve()`] grows capacity to exactly the requested value.
//! * Nothing ever shrinks capacity except replacing the array via assignment, cloning or
//!   [`GrowableArray::take()`].
//!
//! [`CapacityRequest`] distinguishes "this many reserved slots" from "this many items" where a
//! bare count would be ambiguous.
//!
//! # Example
//!
//! ```
//! use growable_array::{CapacityRequest, Error, GrowableArray, growable_array};
//!
//! let mut array = growable_array![1, 2, 3];
//! array.insert(1, 9);
//! assert_eq!(array, [1, 9, 2, 3]);
//!
//! assert_eq!(array.at(10), Err(Error::OutOfRange { index: 10, len: 4 }));
//!
//! let reserved = GrowableArray::<u64>::from(CapacityRequest::new(16));
//! assert!(reserved.is_empty());
//! assert_eq!(reserved.capacity(), 16);
//! ```
//!
//! # Thread safety
//!
//! The array can be moved between threads if `T` can, and shared if `T` can be shared, but it
//! performs no synchronization of its own.

mod array;
mod buffer;
mod capacity;
mod conversions;
mod error;
mod macros;

pub use array::GrowableArray;
pub use buffer::OwnedBuffer;
pub use capacity::CapacityRequest;
pub use error::*;
