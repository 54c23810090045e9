//! # Lazy generators and sequence combinators
//!
//! This library provides a pull-based [`Generator`] whose producer logic is
//! suspended between elements, plus a set of combinators that compose
//! generators into lazy pipelines.
//!
//! ## Core Pieces
//!
//! 1. **Generator**: single-traversal sequence with at most one buffered element
//! 2. **Cursor**: forward-only position over a generator
//! 3. **Combinators**: `enumerate`, `zip`, `iota`, `filter`, `map`, `take`,
//!    `take_while`, `drop`, `drop_while`, `repeat`
//! 4. **Utilities**: container and string helpers, line input, and a
//!    periodic timer thread
//!
//! Every combinator pulls from its input only when its own output is
//! advanced, so infinite sources are fine as long as something bounds the
//! pipeline.
//!
//! ## Usage Example
//!
//! ```
//! use zzz::{filter, iota, map, take};
//!
//! let evens = filter(iota(0, i32::MAX), |n| n % 2 == 0);
//! let squares = map(take(evens, 4), |n| n * n);
//! let collected: Vec<i32> = squares.collect::<Result<_, _>>()?;
//! assert_eq!(collected, vec![0, 4, 16, 36]);
//! # Ok::<(), zzz::GeneratorError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;   // Suspended producers and cursors
pub mod combinators; // Lazy sequence adapters
pub mod util;        // Container, string and I/O helpers
pub mod timer;       // Periodic callback thread

// Re-exports for convenience
pub use generator::{from_iter, Cursor, Generator, GeneratorError, GeneratorState, Producer};
pub use combinators::{
    drop, drop_while, enumerate, enumerate_from, filter, iota, iota_by, map, repeat, take,
    take_while, try_filter, try_map, zip, Integer, ZipSources,
};
pub use timer::{TimerConfig, TimerError, TimerThread};
