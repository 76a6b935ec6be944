//! Individual value generators.
//!
//! Each submodule draws one family of values from a caller-supplied RNG.

pub mod numeric;
pub mod semantic;
pub mod text;

/// Order a pair of bounds so that the first is not greater than the second.
pub(crate) fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
