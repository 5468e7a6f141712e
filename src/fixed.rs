//! Fixed-width codec: 30-bit integers as 5-symbol sortable strings.
//!
//! Each symbol carries 6 bits, most significant group first. The symbol table
//! is in ascending byte order, so comparing two encoded keys as strings gives
//! the same answer as comparing the integers.
//!
//! ```
//! use ordkey::fixed;
//! assert_eq!(fixed::encode(0).unwrap(), "+++++");
//! assert_eq!(fixed::encode(fixed::MAX_ALLOWED_INTEGER).unwrap(), "zzzzz");
//! assert_eq!(fixed::decode("U++++"), Ok(1 << 29));
//! ```
use bytes::BufMut;

use crate::error::{CodecError, Result};

/// Largest encodable value, `2^30 - 1`.
pub const MAX_ALLOWED_INTEGER: i64 = (1 << 30) - 1;

/// Number of symbols in every fixed-width key.
pub const KEY_LEN: usize = 5;

/// Symbol table, in rank order.
pub const ALPHABET: &[u8; 64] =
    b"+-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BITS_PER_SYMBOL: u32 = 6;
const MASK: u32 = 0x3F;
const NO_VALUE: u8 = 255;

const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

#[inline]
fn check_range(v: i64) -> Result<u32, CodecError> {
    if !(0..=MAX_ALLOWED_INTEGER).contains(&v) {
        return Err(CodecError::OutOfRange { value: v });
    }
    Ok(v as u32)
}

#[inline]
fn symbols(v: u32) -> [u8; KEY_LEN] {
    let mut out = [0u8; KEY_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = (KEY_LEN - 1 - i) as u32 * BITS_PER_SYMBOL;
        *slot = ALPHABET[((v >> shift) & MASK) as usize];
    }
    out
}

/// Encode `v` as exactly [`KEY_LEN`] symbols.
///
/// Fails with [`CodecError::OutOfRange`] outside `[0, MAX_ALLOWED_INTEGER]`.
pub fn encode(v: i64) -> Result<String, CodecError> {
    let syms = symbols(check_range(v)?);
    Ok(syms.iter().map(|&b| b as char).collect())
}

/// Encode a floating-point position, rejecting anything that is not a whole
/// number.
///
/// Fractional, NaN and infinite input fails with [`CodecError::NotAnInteger`],
/// a refinement of out-of-range: [`CodecError::is_out_of_range`] holds for it.
pub fn encode_f64(v: f64) -> Result<String, CodecError> {
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(CodecError::NotAnInteger);
    }
    if v < 0.0 || v > MAX_ALLOWED_INTEGER as f64 {
        return Err(CodecError::OutOfRange { value: v as i64 });
    }
    encode(v as i64)
}

/// Append the encoding of `v` into `dst`. Returns the number of bytes written
/// (always [`KEY_LEN`]); nothing is written on error.
#[inline]
pub fn encode_into<B: BufMut>(dst: &mut B, v: i64) -> Result<usize, CodecError> {
    let syms = symbols(check_range(v)?);
    dst.put_slice(&syms);
    Ok(KEY_LEN)
}

/// Decode a key produced by [`encode`].
///
/// Length is counted in symbols, so a multi-byte character is reported as
/// [`CodecError::UnknownSymbol`] rather than a length mismatch.
pub fn decode(s: &str) -> Result<u32, CodecError> {
    let len = s.chars().count();
    if len != KEY_LEN {
        return Err(CodecError::BadLength { len });
    }
    s.chars().try_fold(0u32, |acc, c| {
        let rank = if c.is_ascii() {
            LOOKUP[c as usize]
        } else {
            NO_VALUE
        };
        if rank == NO_VALUE {
            return Err(CodecError::UnknownSymbol { symbol: c });
        }
        Ok((acc << BITS_PER_SYMBOL) + u32::from(rank))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_known_values() {
        assert_eq!(encode(0).unwrap(), "+++++");
        assert_eq!(encode(1).unwrap(), "++++-");
        assert_eq!(encode(1_073_741_823).unwrap(), "zzzzz");
        assert_eq!(encode(536_870_912).unwrap(), "U++++");
    }

    #[test]
    fn should_reject_values_outside_range() {
        assert_eq!(encode(-1), Err(CodecError::OutOfRange { value: -1 }));
        assert_eq!(
            encode(1_073_741_824),
            Err(CodecError::OutOfRange {
                value: 1_073_741_824
            })
        );
    }

    #[test]
    fn should_reject_non_integral_floats() {
        assert_eq!(encode_f64(1.1), Err(CodecError::NotAnInteger));
        assert_eq!(encode_f64(f64::NAN), Err(CodecError::NotAnInteger));
        assert_eq!(encode_f64(f64::INFINITY), Err(CodecError::NotAnInteger));
        assert_eq!(encode_f64(-1.0), Err(CodecError::OutOfRange { value: -1 }));
        assert_eq!(encode_f64(2.0).unwrap(), "++++0");
        assert!(encode_f64(1.1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn should_decode_known_keys() {
        assert_eq!(decode("+++++"), Ok(0));
        assert_eq!(decode("++++-"), Ok(1));
        assert_eq!(decode("zzzzz"), Ok(1_073_741_823));
        assert_eq!(decode("U++++"), Ok(536_870_912));
    }

    #[test]
    fn should_reject_malformed_keys() {
        assert_eq!(decode(""), Err(CodecError::BadLength { len: 0 }));
        assert_eq!(decode("++++++++"), Err(CodecError::BadLength { len: 8 }));
        assert_eq!(decode("~#%@!"), Err(CodecError::UnknownSymbol { symbol: '~' }));
        assert_eq!(decode("++++é"), Err(CodecError::UnknownSymbol { symbol: 'é' }));
    }

    #[test]
    fn should_order_consecutive_values() {
        for i in 0..65 {
            let left = encode(i).unwrap();
            let right = encode(i + 1).unwrap();
            assert!(left < right, "encoded {i} ({left}) >= {} ({right})", i + 1);
        }
    }

    #[test]
    fn should_write_into_buffer_and_leave_it_untouched_on_error() {
        // Arrange
        let mut buf: Vec<u8> = Vec::new();

        // Act
        let n = encode_into(&mut buf, 1).unwrap();
        let err = encode_into(&mut buf, -5);

        // Assert
        assert_eq!(n, KEY_LEN);
        assert_eq!(&buf[..], b"++++-");
        assert!(err.is_err());
        assert_eq!(buf.len(), KEY_LEN);
    }
}
