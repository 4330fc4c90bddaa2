/// Creates a [`GrowableArray`][crate::GrowableArray] from a list of items, or from an item
/// repeated a number of times.
///
/// The capacity of the result equals the number of items.
///
/// ```
/// use growable_array::growable_array;
///
/// let listed = growable_array![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
///
/// let repeated = growable_array!["x"; 2];
/// assert_eq!(repeated, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! growable_array {
    () => {
        $crate::GrowableArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::GrowableArray::from_elem($len, &$value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($item),+])
    };
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::GrowableArray;

    #[test]
    fn empty() {
        let array: GrowableArray<u32> = growable_array![];

        assert!(array.is_empty());
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn listed_with_trailing_comma() {
        let array = growable_array![1, 2, 3,];

        assert_eq!(array, [1, 2, 3]);
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn repeated() {
        let array = growable_array![String::from("ab"); 3];

        assert_eq!(array.len(), 3);
        assert!(array.iter().all(|item| item == "ab"));
    }
}
