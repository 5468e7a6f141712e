use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E> = core::result::Result<T, E>;

/// Failure to build an [`Alphabet`](crate::Alphabet).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// A symbol appears more than once.
    #[error("invalid alphabet: symbol {symbol:?} is repeated")]
    Duplicate { symbol: char },
    /// Fewer than two symbols were given; no midpoint can exist.
    #[error("invalid alphabet: need at least 2 symbols, got {len}")]
    TooSmall { len: usize },
}

/// Failure of the fixed-width integer codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("value {value} is outside [0, {max}]", max = crate::fixed::MAX_ALLOWED_INTEGER)]
    OutOfRange { value: i64 },
    /// A floating-point input with a fractional part, or not finite. A refinement
    /// of [`CodecError::OutOfRange`]; see [`CodecError::is_out_of_range`].
    #[error("value is not an integer")]
    NotAnInteger,
    #[error("expected {expected} symbols, got {len}", expected = crate::fixed::KEY_LEN)]
    BadLength { len: usize },
    #[error("unknown symbol {symbol:?}")]
    UnknownSymbol { symbol: char },
}

impl CodecError {
    /// True for inputs that cannot be encoded: out of bounds or not an integer.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NotAnInteger)
    }
}

/// The requested number of values does not fit between the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no solution: gap too narrow for the requested count")]
pub struct NoSolution;

/// Failure of [`Inserter::insert`](crate::Inserter::insert).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// A bound contains a symbol outside the inserter's alphabet.
    #[error("unknown symbol {symbol:?} in bound key")]
    UnknownSymbol { symbol: char },
    /// `start` sorts after `end`.
    #[error("start key sorts after end key")]
    InvertedRange,
    /// The bounds are too close for `count` distinct keys.
    #[error(transparent)]
    NoSolution(#[from] NoSolution),
}
