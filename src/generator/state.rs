//! Generator lifecycle state
//!
//! ```text
//! NotStarted --first advance--> Suspended <--advance--> Suspended
//!                                   |
//!                  no value / error |
//!                                   v
//!                               Exhausted (terminal)
//! ```

use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Where a generator is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GeneratorState {
    /// Created but never advanced.
    #[default]
    NotStarted,
    /// Parked at a yield point with one buffered element.
    Suspended,
    /// Completed, failed, or never had a producer.
    Exhausted,
}

impl GeneratorState {
    /// Returns true if advancing may still produce a value.
    #[inline]
    pub const fn is_resumable(self) -> bool {
        matches!(self, Self::NotStarted | Self::Suspended)
    }

    /// Returns true once the generator can never produce again.
    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Short lowercase name, used in `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::Suspended => "suspended",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for GeneratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
