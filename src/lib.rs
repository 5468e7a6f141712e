//! Ordkey: allocate order keys between existing list positions without renumbering.
//!
//! An order key is a value whose natural ordering matches list order. Inserting an element
//! between two neighbours only needs a fresh key between theirs; no sibling is rewritten.
//!
//! This crate provides two independent schemes:
//! - [`fixed`] + [`bounded`]: 30-bit integers stored as 5-symbol sortable strings. Cheap and
//!   fixed-width, but the integer gap runs out; allocation then fails with [`NoSolution`] and the
//!   caller must re-derive positions for the whole list.
//! - [`Inserter`]: variable-length string keys over any alphabet, computed with
//!   arbitrary-precision arithmetic. Keys grow as needed and stay as short as the neighbours and
//!   requested count allow.
//!
//! Both are pure: no I/O, no shared mutable state.
//!
//! Quick start
//!
//! ```
//! use ordkey::{bounded, fixed, End, Inserter, Start};
//!
//! // Bounded integers, stored as fixed-width keys
//! let mid = bounded::insert(Start::ListHead, End::ListTail).unwrap();
//! let key = fixed::encode(mid).unwrap();
//! assert_eq!(fixed::decode(&key), Ok(mid as u32));
//!
//! // Variable-length keys over the default alphabet
//! let ins = Inserter::default();
//! let first = ins.insert_one(Start::ListHead, End::ListTail).unwrap();
//! let batch = ins.insert(Start::Key(first.as_str()), End::ListTail, 3).unwrap();
//! assert!(batch.windows(2).all(|w| w[0] < w[1]));
//! assert!(first < batch[0]);
//! ```
//!
//! Enable the `tracing` feature to get trace spans on allocation calls and debug events when a
//! gap is exhausted.
pub mod alphabet;
pub mod bound;
pub mod bounded;
pub mod error;
pub mod fixed;
pub mod inserter;

// Re-export commonly used types at the crate root for convenient imports in tests and consumers
pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use bound::{End, Start};
pub use error::{AlphabetError, CodecError, InsertError, NoSolution};
pub use fixed::MAX_ALLOWED_INTEGER;
pub use inserter::Inserter;
