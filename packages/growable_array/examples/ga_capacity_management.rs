//! Capacity management with the `growable_array` crate:
//!
//! * Reserving room up front with a capacity request.
//! * Growing and shrinking via `resize()`.
//! * Releasing spare capacity by cloning.

use growable_array::{CapacityRequest, GrowableArray};

fn main() {
    // Reserve slots without creating items. A bare count would create items instead.
    let mut readings = GrowableArray::<f64>::from(CapacityRequest::new(8));
    println!(
        "Reserved: {} items, capacity {}",
        readings.len(),
        readings.capacity()
    );

    for reading in [0.5, 1.5, 2.5] {
        readings.push_back(reading);
    }

    // Growing past capacity picks the larger of the request and double the capacity.
    readings.resize(10);
    println!(
        "Resized to 10: {} items, capacity {}",
        readings.len(),
        readings.capacity()
    );

    // Shrinking only forgets items, the memory stays allocated.
    readings.resize(2);
    println!(
        "Resized to 2: {} items, capacity {}",
        readings.len(),
        readings.capacity()
    );

    // A clone only allocates as many slots as there are items.
    let compact = readings.clone();
    println!(
        "Clone: {} items, capacity {}",
        compact.len(),
        compact.capacity()
    );

    // Explicit reservation grows to exactly the requested capacity.
    readings.reserve(100);
    println!("After reserve(100): capacity {}", readings.capacity());
}
