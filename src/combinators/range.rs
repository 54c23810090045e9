//! Source combinators that need no upstream: `iota` and `repeat`.

use std::fmt::Debug;

use crate::generator::{Generator, GeneratorError, Producer};

/// Primitive integers usable as `iota` bounds and steps.
pub trait Integer: Copy + PartialOrd + Debug {
    /// Additive identity.
    const ZERO: Self;
    /// Default step.
    const ONE: Self;

    /// `self + step`, or `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

struct Iota<T> {
    /// `None` once the range has run past `stop` or overflowed.
    next: Option<T>,
    stop: T,
    step: T,
}

impl<T: Integer> Producer for Iota<T> {
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        let Some(value) = self.next else {
            return Ok(None);
        };

        let in_range = if self.step > T::ZERO {
            value < self.stop
        } else if self.step < T::ZERO {
            value > self.stop
        } else {
            false
        };
        if !in_range {
            self.next = None;
            return Ok(None);
        }

        self.next = value.checked_step(self.step);
        Ok(Some(value))
    }
}

/// Half-open range `start, start + 1, ...` while below `stop`.
pub fn iota<'a, T: Integer + 'a>(start: T, stop: T) -> Generator<'a, T> {
    iota_by(start, stop, T::ONE)
}

/// Range from `start` towards `stop` in increments of `step`.
///
/// A positive step yields while the value is below `stop`, a negative step
/// while it is above `stop`. A zero step yields nothing.
pub fn iota_by<'a, T: Integer + 'a>(start: T, stop: T, step: T) -> Generator<'a, T> {
    Generator::new(Iota {
        next: Some(start),
        stop,
        step,
    })
}

struct Repeat<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Producer for Repeat<T> {
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, GeneratorError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(self.value.clone()))
    }
}

/// Yield `count` clones of `value`.
pub fn repeat<'a, T: Clone + 'a>(value: T, count: usize) -> Generator<'a, T> {
    Generator::new(Repeat {
        value,
        remaining: count,
    })
}
