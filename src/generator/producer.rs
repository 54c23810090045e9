//! Suspension units
//!
//! A [`Producer`] is resumable producer logic written as an explicit state
//! machine: the struct's fields are the locals that survive between yields,
//! and [`Producer::resume`] runs one step up to the next yield point.

use std::fmt;

use super::GeneratorError;

/// Producer logic driven by a [`Generator`](super::Generator).
///
/// Each call to `resume` continues from the previous yield point and returns
/// exactly one of:
/// - `Ok(Some(value))`: yield `value` and suspend,
/// - `Ok(None)`: the producer is complete,
/// - `Err(error)`: the producer failed.
///
/// The owning generator never calls `resume` again after `Ok(None)` or
/// `Err(_)`, so implementations do not need to guard against it.
pub trait Producer {
    /// Element type yielded by this producer.
    type Item;

    /// Run until the next yield point.
    fn resume(&mut self) -> Result<Option<Self::Item>, GeneratorError>;
}

/// Producer backed by an infallible closure.
pub(crate) struct FromFn<F> {
    step: F,
}

impl<F> FromFn<F> {
    pub(crate) fn new(step: F) -> Self {
        Self { step }
    }
}

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        Ok((self.step)())
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Producer backed by a fallible closure.
pub(crate) struct TryFromFn<F> {
    step: F,
}

impl<F> TryFromFn<F> {
    pub(crate) fn new(step: F) -> Self {
        Self { step }
    }
}

impl<T, F> Producer for TryFromFn<F>
where
    F: FnMut() -> anyhow::Result<Option<T>>,
{
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        (self.step)().map_err(GeneratorError::from)
    }
}

/// Producer that forwards an ordinary iterator.
///
/// With `iter_mut()` this yields references into caller-owned storage.
#[derive(Debug)]
pub(crate) struct FromIter<I> {
    iter: I,
}

impl<I> FromIter<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> Producer for FromIter<I> {
    type Item = I::Item;

    fn resume(&mut self) -> Result<Option<I::Item>, GeneratorError> {
        Ok(self.iter.next())
    }
}
