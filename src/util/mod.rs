//! Utility functions

pub mod chars;
pub mod container;
pub mod io;
pub mod string;

pub use container::{
    contains, contains_fn, find, head, lookup, reduce, reduce_fn, reducer, tail, Mapping,
};
pub use string::StringError;
