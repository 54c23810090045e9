//! Index and tuple combinators: `enumerate` and `zip`.

use crate::generator::{Generator, GeneratorError, Producer};

struct Enumerate<'a, T> {
    upstream: Generator<'a, T>,
    /// `None` once `usize::MAX` has been handed out.
    next_index: Option<usize>,
}

impl<'a, T> Producer for Enumerate<'a, T> {
    type Item = (usize, T);

    fn resume(&mut self) -> Result<Option<(usize, T)>, GeneratorError> {
        let Some(value) = self.upstream.next_value()? else {
            return Ok(None);
        };
        let Some(index) = self.next_index else {
            return Err(GeneratorError::IndexOverflow);
        };
        self.next_index = index.checked_add(1);
        Ok(Some((index, value)))
    }
}

/// Pair each element with its position, counting from zero.
pub fn enumerate<'a, T: 'a>(seq: Generator<'a, T>) -> Generator<'a, (usize, T)> {
    enumerate_from(seq, 0)
}

/// Pair each element with its position, counting from `start`.
///
/// An element that would need an index past `usize::MAX` fails the sequence
/// with [`GeneratorError::IndexOverflow`].
pub fn enumerate_from<'a, T: 'a>(seq: Generator<'a, T>, start: usize) -> Generator<'a, (usize, T)> {
    Generator::new(Enumerate {
        upstream: seq,
        next_index: Some(start),
    })
}

/// A tuple of generators that can be advanced in lockstep.
///
/// Implemented for tuples of one to six generators. The first generator
/// decides the length of the zip: when it ends, the zip ends without pulling
/// the others. When a later generator ends first, the zip fails with
/// [`GeneratorError::LengthMismatch`].
pub trait ZipSources {
    /// Tuple of one element per source.
    type Item;

    /// Pull one element from every source.
    fn pull(&mut self) -> Result<Option<Self::Item>, GeneratorError>;
}

macro_rules! impl_zip_sources {
    ($head_ty:ident $head_gen:ident $head_val:ident $(; $ty:ident $gen:ident $val:ident $index:literal)*) => {
        impl<'a, $head_ty $(, $ty)*> ZipSources for (Generator<'a, $head_ty>, $(Generator<'a, $ty>,)*) {
            type Item = ($head_ty, $($ty,)*);

            fn pull(&mut self) -> Result<Option<Self::Item>, GeneratorError> {
                let ($head_gen, $($gen,)*) = self;

                let Some($head_val) = $head_gen.next_value()? else {
                    return Ok(None);
                };
                $(
                    let Some($val) = $gen.next_value()? else {
                        return Err(GeneratorError::LengthMismatch { index: $index });
                    };
                )*

                Ok(Some(($head_val, $($val,)*)))
            }
        }
    };
}

impl_zip_sources!(A a_gen a);
impl_zip_sources!(A a_gen a; B b_gen b 1);
impl_zip_sources!(A a_gen a; B b_gen b 1; C c_gen c 2);
impl_zip_sources!(A a_gen a; B b_gen b 1; C c_gen c 2; D d_gen d 3);
impl_zip_sources!(A a_gen a; B b_gen b 1; C c_gen c 2; D d_gen d 3; E e_gen e 4);
impl_zip_sources!(A a_gen a; B b_gen b 1; C c_gen c 2; D d_gen d 3; E e_gen e 4; F f_gen f 5);

struct Zip<S> {
    sources: S,
}

impl<S: ZipSources> Producer for Zip<S> {
    type Item = S::Item;

    fn resume(&mut self) -> Result<Option<S::Item>, GeneratorError> {
        self.sources.pull()
    }
}

/// Advance a tuple of generators together, yielding one tuple per step.
///
/// Inputs are expected to have equal lengths. See [`ZipSources`] for what
/// happens when they do not.
pub fn zip<'a, S>(sources: S) -> Generator<'a, S::Item>
where
    S: ZipSources + 'a,
{
    Generator::new(Zip { sources })
}
