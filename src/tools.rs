//! Some helper functions

/// Number of indices in the truth table of a function with the given number of variables.
pub fn domain_size(variables: usize) -> usize {
    1 << variables
}

/// Reflected binary (Gray) code of a position.
///
/// Two successive codes differ in a single bit, which is the property used to lay out
/// the rows and columns of a Karnaugh map.
///
/// ```
/// # use qmkit::tools::gray_code;
/// let codes: Vec<usize> = (0..4).map(gray_code).collect();
/// assert_eq!(codes, vec![0b00, 0b01, 0b11, 0b10]);
/// ```
pub fn gray_code(position: usize) -> usize {
    position ^ (position >> 1)
}

/// Position of a Gray code in the reflected sequence, inverse of [gray_code].
///
/// ```
/// # use qmkit::tools::{gray_code, gray_rank};
/// assert_eq!(gray_rank(0b10), 3);
/// assert_eq!(gray_rank(gray_code(11)), 11);
/// ```
pub fn gray_rank(code: usize) -> usize {
    let mut rank = code;
    let mut shift = code >> 1;
    while shift != 0 {
        rank ^= shift;
        shift >>= 1;
    }
    rank
}

/// Write the `width` lowest bits of a value, most significant first
pub fn binary_string(value: usize, width: usize) -> String {
    (0..width)
        .rev()
        .map(|bit| match value & (1 << bit) != 0 {
            true => '1',
            false => '0',
        })
        .collect()
}
