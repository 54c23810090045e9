//! Prefix and suffix combinators: `take`, `take_while`, `drop`, `drop_while`.
//!
//! The `take` family stops pulling from upstream as soon as its bound is
//! reached, so side-effecting sources are never over-consumed.

use crate::generator::{Generator, GeneratorError, Producer};

struct Take<'a, T> {
    upstream: Generator<'a, T>,
    remaining: usize,
}

impl<'a, T> Producer for Take<'a, T> {
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        self.upstream.next_value()
    }
}

/// The first `count` elements, or fewer if the input is shorter.
pub fn take<'a, T: 'a>(seq: Generator<'a, T>, count: usize) -> Generator<'a, T> {
    Generator::new(Take {
        upstream: seq,
        remaining: count,
    })
}

struct TakeWhile<'a, T, P> {
    upstream: Generator<'a, T>,
    predicate: P,
}

impl<'a, T, P> Producer for TakeWhile<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        match self.upstream.next_value()? {
            Some(value) if (self.predicate)(&value) => Ok(Some(value)),
            _ => Ok(None),
        }
    }
}

/// The longest prefix whose elements satisfy `predicate`.
///
/// The first failing element is consumed from upstream but not yielded.
pub fn take_while<'a, T, P>(seq: Generator<'a, T>, predicate: P) -> Generator<'a, T>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Generator::new(TakeWhile {
        upstream: seq,
        predicate,
    })
}

struct Skip<'a, T> {
    upstream: Generator<'a, T>,
    to_skip: usize,
}

impl<'a, T> Producer for Skip<'a, T> {
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        while self.to_skip > 0 {
            self.to_skip -= 1;
            if self.upstream.next_value()?.is_none() {
                return Ok(None);
            }
        }
        self.upstream.next_value()
    }
}

/// Everything after the first `count` elements.
///
/// Skipping happens lazily, on the first advance.
pub fn drop<'a, T: 'a>(seq: Generator<'a, T>, count: usize) -> Generator<'a, T> {
    Generator::new(Skip {
        upstream: seq,
        to_skip: count,
    })
}

struct SkipWhile<'a, T, P> {
    upstream: Generator<'a, T>,
    /// Cleared after the first element that fails the predicate.
    predicate: Option<P>,
}

impl<'a, T, P> Producer for SkipWhile<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        let Some(mut predicate) = self.predicate.take() else {
            return self.upstream.next_value();
        };

        while let Some(value) = self.upstream.next_value()? {
            if !predicate(&value) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// Skip elements while `predicate` holds, then yield the rest unchecked.
pub fn drop_while<'a, T, P>(seq: Generator<'a, T>, predicate: P) -> Generator<'a, T>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Generator::new(SkipWhile {
        upstream: seq,
        predicate: Some(predicate),
    })
}
