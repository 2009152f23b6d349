//! Value types of the reporting pipeline.
//!
//! # Examples
//!
//! ```
//! use error_relay::{Failure, Severity};
//!
//! let failure = Failure::new("payment declined");
//! assert_eq!(failure.message(), "payment declined");
//! assert_eq!(Severity::default(), Severity::Error);
//! ```
use smallvec::SmallVec;

pub mod error_record;
pub mod failure;
pub mod severity;

pub use error_record::*;
pub use failure::*;
pub use severity::*;

/// SmallVec-backed collection used for short, usually shallow sequences.
///
/// Render frames and element attributes rarely exceed a handful of entries,
/// so inline storage avoids heap allocations in the common case.
pub type InlineVec<T, const N: usize> = SmallVec<[T; N]>;
