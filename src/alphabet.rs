use std::collections::HashMap;

use crate::error::{AlphabetError, Result};

/// The default, pre-ordered 64-symbol alphabet used by [`Inserter`](crate::Inserter).
///
/// URI-safe without escaping. `-` and `.` sort before the digits, so this is
/// deliberately not any RFC base64 alphabet.
pub const DEFAULT_ALPHABET: &str =
    "-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered set of distinct symbols that act as the digits of a numeral.
///
/// Symbols are sorted ascending on construction, so a symbol's rank equals its
/// digit value and lexicographic order of keys equals numeric order.
///
/// ```
/// use ordkey::Alphabet;
/// let hex = Alphabet::new("FEDCBA9876543210").unwrap();
/// assert_eq!(hex.base(), 16);
/// assert_eq!(hex.zero(), '0');
/// assert_eq!(hex.rank('A'), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    lookup: HashMap<char, u32>,
    cutoff: u32,
}

impl Alphabet {
    /// Build an alphabet from the symbols of `symbols`, in any order.
    ///
    /// Fails if a symbol repeats or if there are fewer than two symbols.
    ///
    /// Symbols sort by Unicode code point, the order `str` comparison uses.
    /// This differs from UTF-16 code unit order only when an alphabet mixes
    /// symbols above U+FFFF with symbols in U+E000..=U+FFFF.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let mut sorted: Vec<char> = symbols.chars().collect();
        sorted.sort_unstable();
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(AlphabetError::Duplicate { symbol: w[0] });
        }
        if sorted.len() < 2 {
            return Err(AlphabetError::TooSmall { len: sorted.len() });
        }

        Ok(Self::from_sorted(sorted))
    }

    fn from_sorted(symbols: Vec<char>) -> Self {
        let lookup = symbols
            .iter()
            .enumerate()
            .map(|(rank, &c)| (c, rank as u32))
            .collect();
        let cutoff = (symbols.len() as f64).sqrt().round() as u32;
        Self {
            symbols,
            lookup,
            cutoff,
        }
    }

    /// Number of symbols; the radix of every key.
    #[inline]
    pub fn base(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// The lowest symbol, i.e. digit zero.
    #[inline]
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Leading-digit threshold below which the inserter keeps one extra
    /// digit of precision: `round(sqrt(base))`.
    #[inline]
    pub fn cutoff(&self) -> u32 {
        self.cutoff
    }

    /// Symbols in ascending order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Digit value of `symbol`.
    #[inline]
    pub fn rank(&self, symbol: char) -> Option<u32> {
        self.lookup.get(&symbol).copied()
    }

    /// Symbol for digit value `rank`.
    #[inline]
    pub fn symbol(&self, rank: u32) -> Option<char> {
        self.symbols.get(rank as usize).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.lookup.contains_key(&symbol)
    }

    /// True if every symbol of `key` is in this alphabet and `key` carries no
    /// trailing zero symbol.
    pub fn is_canonical(&self, key: &str) -> bool {
        key.chars().all(|c| self.contains(c)) && !key.ends_with(self.zero())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        // Already sorted and distinct.
        Self::from_sorted(DEFAULT_ALPHABET.chars().collect())
    }
}
