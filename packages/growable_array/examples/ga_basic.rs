//! Basic usage of the `growable_array` crate:
//!
//! * Creating an array.
//! * Appending, inserting and removing items.
//! * Observing capacity growth.
//! * Checked and unchecked access.

use growable_array::{GrowableArray, growable_array};

fn main() {
    let mut names = GrowableArray::new();

    // Capacity doubles whenever an append finds the array full, starting from 1.
    for name in ["Alice", "Bob", "Charlie"] {
        names.push_back(name.to_string());
        println!(
            "Pushed {name}: {} items, capacity {}",
            names.len(),
            names.capacity()
        );
    }

    // Inserting shifts later items towards the back.
    names.insert(1, "Zed".to_string());
    println!("After insert: {names:?}");

    // Erasing shifts later items towards the front. Capacity stays.
    names.erase(0);
    println!("After erase: {names:?}");

    // `[]` panics on a bad index, `at()` reports it as an error instead.
    println!("First item: {}", names[0]);

    match names.at(10) {
        Ok(name) => println!("Item 10: {name}"),
        Err(error) => println!("Item 10: {error}"),
    }

    // Clearing keeps the buffer for reuse.
    names.clear();
    println!(
        "After clear: {} items, capacity {}",
        names.len(),
        names.capacity()
    );

    // Literal construction allocates exactly as many slots as there are items.
    let primes = growable_array![2, 3, 5, 7];
    println!("Primes: {primes:?}");
}
