//! Element-wise combinators: `filter` and `map`, with fallible variants.

use crate::generator::{Generator, GeneratorError, Producer};

struct Filter<'a, T, P> {
    upstream: Generator<'a, T>,
    predicate: P,
}

impl<'a, T, P> Producer for Filter<'a, T, P>
where
    P: FnMut(&T) -> anyhow::Result<bool>,
{
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        while let Some(value) = self.upstream.next_value()? {
            if (self.predicate)(&value)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// Keep the elements for which `predicate` holds.
pub fn filter<'a, T, P>(seq: Generator<'a, T>, mut predicate: P) -> Generator<'a, T>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    try_filter(seq, move |value| Ok(predicate(value)))
}

/// Like [`filter`], but the predicate may fail. A failure ends the sequence
/// with [`GeneratorError::Producer`].
pub fn try_filter<'a, T, P>(seq: Generator<'a, T>, predicate: P) -> Generator<'a, T>
where
    T: 'a,
    P: FnMut(&T) -> anyhow::Result<bool> + 'a,
{
    Generator::new(Filter {
        upstream: seq,
        predicate,
    })
}

struct Map<'a, T, F> {
    upstream: Generator<'a, T>,
    func: F,
}

impl<'a, T, U, F> Producer for Map<'a, T, F>
where
    F: FnMut(T) -> anyhow::Result<U>,
{
    type Item = U;

    fn resume(&mut self) -> Result<Option<U>, GeneratorError> {
        match self.upstream.next_value()? {
            Some(value) => Ok(Some((self.func)(value)?)),
            None => Ok(None),
        }
    }
}

/// Transform each element with `func`.
pub fn map<'a, T, U, F>(seq: Generator<'a, T>, mut func: F) -> Generator<'a, U>
where
    T: 'a,
    F: FnMut(T) -> U + 'a,
{
    try_map(seq, move |value| Ok(func(value)))
}

/// Like [`map`], but the function may fail. A failure ends the sequence
/// with [`GeneratorError::Producer`].
pub fn try_map<'a, T, U, F>(seq: Generator<'a, T>, func: F) -> Generator<'a, U>
where
    T: 'a,
    F: FnMut(T) -> anyhow::Result<U> + 'a,
{
    Generator::new(Map {
        upstream: seq,
        func,
    })
}
