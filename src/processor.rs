//! Number list processing.

/// Sorts numbers in descending order.
///
/// The result holds the same values (duplicates included) ordered from
/// largest to smallest. Equal values have no meaningful identity, so the sort
/// is not stable.
///
/// # Example
/// Input:  `[5, 3, 9, 1]`
/// Output: `[9, 5, 3, 1]`
pub fn sort_descending(mut numbers: Vec<i32>) -> Vec<i32> {
    numbers.sort_unstable_by(|a, b| b.cmp(a));
    numbers
}

/// Returns `true` if every number is greater than or equal to the next one.
pub fn is_descending(numbers: &[i32]) -> bool {
    numbers.windows(2).all(|pair| pair[0] >= pair[1])
}
