//! Capacity growth policy shared by every operation that may reallocate.

/// Returns the capacity to allocate when a buffer of `current` slots must
/// hold at least `required` elements.
///
/// Doubling keeps appends amortized O(1): an empty buffer grows to one slot,
/// anything else to twice its size, unless `required` asks for more. The
/// result saturates at `usize::MAX`; layout validation rejects it later.
///
/// # Examples
///
/// ```
/// use simple_vector::next_capacity;
///
/// assert_eq!(next_capacity(0, 1), 1);
/// assert_eq!(next_capacity(4, 5), 8);
/// assert_eq!(next_capacity(4, 11), 11);
/// ```
#[must_use]
pub const fn next_capacity(current: usize, required: usize) -> usize {
    let doubled = if current == 0 {
        1
    } else {
        current.saturating_mul(2)
    };

    if required > doubled {
        required
    } else {
        doubled
    }
}
