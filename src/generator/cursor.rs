//! Begin/end stepping over a generator.

use std::fmt;
use std::ptr;

use super::{Generator, GeneratorError};

/// Begin/end style handle over a [`Generator`].
///
/// A cursor either points at a live generator whose buffered element it can
/// read, or is past-the-end. All past-the-end cursors compare equal, which is
/// how the end of a sequence is detected:
///
/// ```
/// use zzz::{iota, Cursor};
///
/// let mut gen = iota(0, 3);
/// let mut cursor = gen.cursor()?;
/// let mut seen = Vec::new();
/// while cursor != Cursor::end() {
///     seen.push(*cursor.get()?);
///     cursor.advance()?;
/// }
/// assert_eq!(seen, vec![0, 1, 2]);
/// # Ok::<(), zzz::GeneratorError>(())
/// ```
pub struct Cursor<'g, 'a, T> {
    generator: Option<&'g mut Generator<'a, T>>,
}

impl<'g, 'a, T> Cursor<'g, 'a, T> {
    pub(super) fn begin(generator: &'g mut Generator<'a, T>) -> Result<Self, GeneratorError> {
        let mut cursor = Self {
            generator: Some(generator),
        };
        cursor.advance()?;
        Ok(cursor)
    }

    /// The past-the-end cursor.
    pub fn end() -> Self {
        Self { generator: None }
    }

    /// True when there is no element under the cursor.
    pub fn is_end(&self) -> bool {
        self.generator.is_none()
    }

    /// Move to the next element. A no-op once past the end.
    ///
    /// On a producer error the cursor moves past the end and the error is
    /// returned.
    pub fn advance(&mut self) -> Result<(), GeneratorError> {
        let Some(generator) = self.generator.as_deref_mut() else {
            return Ok(());
        };

        match generator.resume().map(|value| value.is_some()) {
            Ok(true) => Ok(()),
            Ok(false) => {
                self.generator = None;
                Ok(())
            }
            Err(error) => {
                self.generator = None;
                Err(error)
            }
        }
    }

    /// Read the element under the cursor.
    pub fn get(&self) -> Result<&T, GeneratorError> {
        match self.generator.as_deref() {
            Some(generator) => generator.current(),
            None => Err(GeneratorError::Exhausted),
        }
    }

    /// Mutable access to the element under the cursor.
    pub fn get_mut(&mut self) -> Result<&mut T, GeneratorError> {
        match self.generator.as_deref_mut() {
            Some(generator) => generator.current_mut(),
            None => Err(GeneratorError::Exhausted),
        }
    }
}

impl<T> Default for Cursor<'_, '_, T> {
    fn default() -> Self {
        Self::end()
    }
}

impl<T> PartialEq for Cursor<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.generator.as_deref(), other.generator.as_deref()) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => ptr::eq(lhs, rhs),
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, '_, T> {}

impl<T> fmt::Debug for Cursor<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("at_end", &self.is_end())
            .finish()
    }
}
