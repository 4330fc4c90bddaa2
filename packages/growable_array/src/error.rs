use thiserror::Error;

/// Errors that can occur when accessing a [`GrowableArray`][crate::GrowableArray].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A checked accessor was asked for an index that does not hold a live item.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,

        /// The number of live items at the time of the request.
        len: usize,
    },
}

/// A specialized `Result` type for growable array operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let error = Error::OutOfRange { index: 5, len: 3 };

        assert_eq!(error.to_string(), "index 5 is out of range for length 3");
    }
}
