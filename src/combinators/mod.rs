//! Sequence combinators
//!
//! Each combinator returns a new [`Generator`](crate::Generator) whose
//! producer pulls from the generators it was given. Nothing is materialized:
//! an element is computed only when the consumer asks for it, and upstream
//! errors pass through unchanged.
//!
//! ```
//! use zzz::{filter, from_iter, map, take};
//!
//! let squares_of_evens = take(
//!     map(filter(from_iter(1..), |x| x % 2 == 0), |x| x * x),
//!     3,
//! );
//! let values: Vec<i32> = squares_of_evens.collect::<Result<_, _>>()?;
//! assert_eq!(values, vec![4, 16, 36]);
//! # Ok::<(), zzz::GeneratorError>(())
//! ```

mod range;
mod sequence;
mod slice;
mod transform;

pub use range::{iota, iota_by, repeat, Integer};
pub use sequence::{enumerate, enumerate_from, zip, ZipSources};
pub use slice::{drop, drop_while, take, take_while};
pub use transform::{filter, map, try_filter, try_map};
