//! Lazy sequences
//!
//! A [`Generator`] is a pull-based, single-traversal stream whose producer
//! logic is suspended between elements. Consumers drive it one element at a
//! time with [`Generator::resume`], a [`Cursor`], or the `Iterator` impl.
//!
//! Key properties:
//! - at most one element is buffered, and a borrow of it lasts only until
//!   the next advance
//! - exhaustion is terminal: once complete or failed, every further advance
//!   reports exhaustion again
//! - generators are move-only; dropping one drops the producer state without
//!   resuming it
//! - generators are `!Send`; one consumer drives one generator

mod cursor;
mod producer;
mod state;

pub use cursor::Cursor;
pub use producer::Producer;
pub use state::GeneratorState;

use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;

use producer::{FromFn, FromIter, TryFromFn};

/// Errors surfaced while driving a generator.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Dereferenced a cursor or slot that is past the end.
    #[error("generator is exhausted")]
    Exhausted,

    /// Dereferenced a generator that was never advanced.
    #[error("generator has not been started")]
    NotStarted,

    /// A zipped input ran out while the first input still had elements.
    #[error("zip input {index} ended before the first input")]
    LengthMismatch {
        /// Position of the short input within the zipped tuple
        index: usize,
    },

    /// `enumerate` needed an index past `usize::MAX`.
    #[error("enumerate index overflowed usize")]
    IndexOverflow,

    /// Producer logic failed.
    #[error("producer failed: {0}")]
    Producer(#[source] anyhow::Error),
}

impl From<anyhow::Error> for GeneratorError {
    /// Wraps a producer failure. A bare error that already came from a
    /// generator is unwrapped so nested pipelines report it unchanged; one
    /// with added context stays wrapped so the context is kept.
    fn from(error: anyhow::Error) -> Self {
        if error.chain().count() > 1 {
            return GeneratorError::Producer(error);
        }
        match error.downcast::<GeneratorError>() {
            Ok(inner) => inner,
            Err(error) => GeneratorError::Producer(error),
        }
    }
}

/// A lazy, forward-only sequence of `T`.
///
/// `T` may itself be a reference (`&'a mut X`), in which case the generator
/// only holds borrowed addresses into storage owned by the caller.
pub struct Generator<'a, T> {
    /// `None` once exhausted, or for an empty generator.
    producer: Option<Box<dyn Producer<Item = T> + 'a>>,
    slot: Option<T>,
    state: GeneratorState,
}

impl<'a, T> Generator<'a, T> {
    /// Wrap producer logic. Nothing runs until the first advance.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<Item = T> + 'a,
    {
        Self {
            producer: Some(Box::new(producer)),
            slot: None,
            state: GeneratorState::NotStarted,
        }
    }

    /// A generator that is already exhausted.
    pub fn empty() -> Self {
        Self {
            producer: None,
            slot: None,
            state: GeneratorState::Exhausted,
        }
    }

    /// Build a generator from a closure that yields `Some(value)` per step
    /// and `None` when done.
    pub fn from_fn<F>(step: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Self::new(FromFn::new(step))
    }

    /// Like [`Generator::from_fn`], but the closure may fail. The first
    /// error is surfaced to the consumer and ends the sequence.
    pub fn try_from_fn<F>(step: F) -> Self
    where
        F: FnMut() -> anyhow::Result<Option<T>> + 'a,
    {
        Self::new(TryFromFn::new(step))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// True once the producer completed or failed, or if there never was one.
    pub fn is_exhausted(&self) -> bool {
        self.state.is_finished()
    }

    /// Advance-or-get-first.
    ///
    /// The first call starts the producer; later calls resume it from its
    /// last yield point. Returns the freshly buffered element, or `None` once
    /// the sequence is exhausted. A producer error is returned here and
    /// leaves the generator exhausted.
    pub fn resume(&mut self) -> Result<Option<&mut T>, GeneratorError> {
        self.slot = None;

        let Some(producer) = self.producer.as_mut() else {
            self.state = GeneratorState::Exhausted;
            return Ok(None);
        };

        match producer.resume() {
            Ok(Some(value)) => {
                self.state = GeneratorState::Suspended;
                Ok(Some(self.slot.insert(value)))
            }
            Ok(None) => {
                self.finish();
                Ok(None)
            }
            Err(error) => {
                self.finish();
                Err(error)
            }
        }
    }

    /// Advance and move the produced element out of the buffer.
    pub fn next_value(&mut self) -> Result<Option<T>, GeneratorError> {
        if self.resume()?.is_none() {
            return Ok(None);
        }
        Ok(self.slot.take())
    }

    /// Read the buffered element without advancing.
    pub fn current(&self) -> Result<&T, GeneratorError> {
        match (&self.slot, self.state) {
            (Some(value), _) => Ok(value),
            (None, GeneratorState::NotStarted) => Err(GeneratorError::NotStarted),
            (None, _) => Err(GeneratorError::Exhausted),
        }
    }

    /// Mutable access to the buffered element.
    pub fn current_mut(&mut self) -> Result<&mut T, GeneratorError> {
        match (&mut self.slot, self.state) {
            (Some(value), _) => Ok(value),
            (None, GeneratorState::NotStarted) => Err(GeneratorError::NotStarted),
            (None, _) => Err(GeneratorError::Exhausted),
        }
    }

    /// Advance once and return a cursor positioned on the result.
    ///
    /// Calling this on a generator that is already suspended moves past the
    /// buffered element; a generator supports a single traversal.
    pub fn cursor(&mut self) -> Result<Cursor<'_, 'a, T>, GeneratorError> {
        Cursor::begin(self)
    }

    fn finish(&mut self) {
        self.state = GeneratorState::Exhausted;
        self.slot = None;
        self.producer = None;
    }
}

impl<T> Default for Generator<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Generator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state)
            .field("buffered", &self.slot.is_some())
            .finish()
    }
}

impl<T> Iterator for Generator<'_, T> {
    type Item = Result<T, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().transpose()
    }
}

impl<T> FusedIterator for Generator<'_, T> {}

/// Adapt any iterable into a generator.
///
/// Passing `iter_mut()` yields `&mut` references, so combinators built on top
/// can modify the source collection in place.
pub fn from_iter<'a, I>(iterable: I) -> Generator<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    Generator::new(FromIter::new(iterable.into_iter()))
}
