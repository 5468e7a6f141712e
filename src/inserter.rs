//! Arbitrary-precision key allocation over a caller-chosen alphabet.
//!
//! A key is read as a base-`base` fraction, most significant symbol first, with
//! missing trailing digits taken as zero. New keys are computed as evenly spaced
//! points between the two bounds, carrying just enough extra digits for
//! `count` points to stay distinct, then rounded and trimmed.
use num_bigint::BigUint;
use num_traits::{One, Zero};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::alphabet::Alphabet;
use crate::bound::{End, Start};
use crate::error::{AlphabetError, InsertError, NoSolution, Result};

/// Creates keys between existing keys for a fixed alphabet.
///
/// The inserter is immutable after construction and can be shared freely.
///
/// ```
/// use ordkey::{End, Inserter, Start};
/// let hex = Inserter::new("0123456789ABCDEF").unwrap();
/// let mid = hex.insert_one(Start::ListHead, End::ListTail).unwrap();
/// assert_eq!(mid, "8");
///
/// let before = hex.insert_one(Start::ListHead, End::Key(mid.as_str())).unwrap();
/// assert!(before < mid);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inserter {
    alphabet: Alphabet,
}

impl Inserter {
    /// Build an inserter over the symbols of `alphabet`.
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        Ok(Self::with_alphabet(Alphabet::new(alphabet)?))
    }

    #[inline]
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Create one key strictly between `start` and `end`.
    #[inline]
    pub fn insert_one(&self, start: Start<&str>, end: End<&str>) -> Result<String, InsertError> {
        let mut keys = self.insert(start, end, 1)?;
        Ok(keys.swap_remove(0))
    }

    /// Create `count` keys roughly evenly spaced strictly between `start` and
    /// `end`.
    ///
    /// The result is strictly increasing and every key is canonical (no
    /// trailing zero symbol). A `count` of zero yields an empty vector.
    ///
    /// # Errors
    ///
    /// - [`InsertError::UnknownSymbol`] if a bound uses a symbol outside the alphabet.
    /// - [`InsertError::InvertedRange`] if `start` sorts after `end`.
    /// - [`InsertError::NoSolution`] if the bounds are equal, or so close that
    ///   the per-key step is zero even with the extra working digits, or if
    ///   `count` keys cannot be held in memory.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn insert(
        &self,
        start: Start<&str>,
        end: End<&str>,
        count: usize,
    ) -> Result<Vec<String>, InsertError> {
        let base = self.alphabet.base();
        let start_len = start.key().map_or(0, |k| k.chars().count());
        let end_len = end.key().map_or(0, |k| k.chars().count());

        // More keys need more digits of precision to stay distinct.
        let workspace_len =
            (((count as f64) + 1.0).ln() / f64::from(base).ln()).round() as usize + 1;
        let calculation_len = start_len.max(end_len).max(1) + workspace_len;

        let sv = match start {
            Start::ListHead => BigUint::zero(),
            Start::Key(k) => self.decode(k, calculation_len)?,
        };
        let ev = match end {
            End::Key(k) => self.decode(k, calculation_len)?,
            End::ListTail => BigUint::from(base).pow(calculation_len as u32),
        };
        if ev < sv {
            return Err(InsertError::InvertedRange);
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let Some(slots) = u64::try_from(count).ok().and_then(|c| c.checked_add(1)) else {
            return Err(NoSolution.into());
        };
        let delta = (&ev - &sv) / BigUint::from(slots);
        if delta.is_zero() {
            #[cfg(feature = "tracing")]
            tracing::debug!(count, calculation_len, "no room between bounds");
            return Err(NoSolution.into());
        }

        // A small leading step digit would make gaps visibly uneven after
        // truncation, so keep a second extra digit.
        let delta_digits = to_digits(&delta, base);
        let extra = if delta_digits[0] < self.alphabet.cutoff() { 2 } else { 1 };
        let output_len = calculation_len - delta_digits.len() + extra;

        let mut keys: Vec<String> = Vec::new();
        if keys.try_reserve_exact(count).is_err() {
            #[cfg(feature = "tracing")]
            tracing::debug!(count, "too many keys to hold");
            return Err(NoSolution.into());
        }
        let mut value = sv;
        for _ in 0..count {
            value += &delta;
            let rounded = round_to_len(&value, base, calculation_len, output_len);
            keys.push(self.encode(&rounded, output_len));
        }
        Ok(keys)
    }

    /// Read `key` as a `length`-digit numeral, right-padding with zero.
    fn decode(&self, key: &str, length: usize) -> Result<BigUint, InsertError> {
        let base = BigUint::from(self.alphabet.base());
        let mut value = BigUint::zero();
        let mut digits = 0;
        for symbol in key.chars() {
            let rank = self
                .alphabet
                .rank(symbol)
                .ok_or(InsertError::UnknownSymbol { symbol })?;
            value = value * &base + rank;
            digits += 1;
        }
        Ok(value * base.pow((length - digits) as u32))
    }

    /// Render `value` as `length` symbols, then drop trailing zero symbols.
    fn encode(&self, value: &BigUint, length: usize) -> String {
        let digits = to_digits(value, self.alphabet.base());
        let zero = self.alphabet.zero();
        let mut key: String = std::iter::repeat(zero)
            .take(length.saturating_sub(digits.len()))
            .chain(digits.iter().filter_map(|&d| self.alphabet.symbol(d)))
            .collect();
        let trimmed = key.trim_end_matches(zero).len();
        key.truncate(trimmed);
        key
    }
}

/// Keep the leading `output_len` of `calculation_len` digits, rounding half up
/// on the first dropped digit.
fn round_to_len(value: &BigUint, base: u32, calculation_len: usize, output_len: usize) -> BigUint {
    if output_len >= calculation_len {
        return value * BigUint::from(base).pow((output_len - calculation_len) as u32);
    }
    let unit = BigUint::from(base).pow((calculation_len - output_len) as u32);
    let truncated = value / &unit;
    let remainder = value % &unit;
    // First dropped digit >= base / 2.
    let half = BigUint::from(base).pow((calculation_len - output_len - 1) as u32);
    let first_dropped = remainder / half;
    if first_dropped * 2u32 >= BigUint::from(base) {
        truncated + BigUint::one()
    } else {
        truncated
    }
}

/// Digits of `value` in `base`, most significant first; zero is `[0]`.
fn to_digits(value: &BigUint, base: u32) -> Vec<u32> {
    if value.is_zero() {
        return vec![0];
    }
    let radix = BigUint::from(base);
    let mut rest = value.clone();
    let mut digits = Vec::new();
    while !rest.is_zero() {
        let rem = &rest % &radix;
        digits.push(rem.to_u32_digits().first().copied().unwrap_or(0));
        rest /= &radix;
    }
    digits.reverse();
    digits
}
