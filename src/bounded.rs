//! Midpoint allocation over the bounded 30-bit integer space.
//!
//! Pairs with [`crate::fixed`]: allocate integers here, store them as
//! fixed-width keys there. No precision is adapted; when the integer gap is
//! exhausted the caller gets [`NoSolution`] and must re-derive positions for
//! the whole list itself.
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::bound::{End, Start};
use crate::error::{NoSolution, Result};
use crate::fixed::MAX_ALLOWED_INTEGER;

#[inline]
fn lower(left: Start<i64>) -> Result<i64, NoSolution> {
    let v = match left {
        Start::ListHead => -1,
        Start::Key(v) => v,
    };
    if !(-1..=MAX_ALLOWED_INTEGER).contains(&v) {
        return Err(NoSolution);
    }
    Ok(v)
}

#[inline]
fn upper(right: End<i64>) -> Result<i64, NoSolution> {
    let v = match right {
        End::Key(v) => v,
        End::ListTail => MAX_ALLOWED_INTEGER + 1,
    };
    if !(0..=MAX_ALLOWED_INTEGER + 1).contains(&v) {
        return Err(NoSolution);
    }
    Ok(v)
}

/// Return `count` strictly increasing integers strictly between `left` and
/// `right`, evenly spaced by integer division.
///
/// ```
/// use ordkey::{bounded, End, Start};
/// assert_eq!(
///     bounded::insert_many(Start::Key(100), End::Key(200), 3),
///     Ok(vec![125, 150, 175])
/// );
/// assert!(bounded::insert_many(Start::Key(100), End::Key(102), 2).is_err());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn insert_many(
    left: Start<i64>,
    right: End<i64>,
    count: usize,
) -> Result<Vec<i64>, NoSolution> {
    let left = lower(left)?;
    let right = upper(right)?;
    let count = i64::try_from(count).map_err(|_| NoSolution)?;
    let diff = right - left;
    // diff <= 2^30 + 1, so any count that passes this check keeps count + 1
    // and i * diff in i64.
    if diff <= count {
        #[cfg(feature = "tracing")]
        tracing::debug!(left, right, count, "integer gap exhausted");
        return Err(NoSolution);
    }

    Ok((1..=count).map(|i| left + i * diff / (count + 1)).collect())
}

/// Return the single midpoint between `left` and `right`.
///
/// ```
/// use ordkey::{bounded, End, Start};
/// assert_eq!(bounded::insert(Start::ListHead, End::ListTail), Ok(536_870_911));
/// assert!(bounded::insert(Start::Key(100), End::Key(101)).is_err());
/// ```
#[inline]
pub fn insert(left: Start<i64>, right: End<i64>) -> Result<i64, NoSolution> {
    insert_many(left, right, 1).map(|v| v[0])
}
