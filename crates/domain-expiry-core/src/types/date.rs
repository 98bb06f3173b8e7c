//! Registry date semantics.

use chrono::Months;
use std::num::NonZeroU32;

/// Interval between two renewal anniversaries, in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenewalTerm {
    years: NonZeroU32,
}

impl RenewalTerm {
    /// Annual renewal
    pub const ONE_YEAR: Self = Self {
        years: NonZeroU32::MIN,
    };

    /// Create a term of `years` years; zero is rejected
    #[must_use]
    pub const fn years(years: u32) -> Option<Self> {
        match NonZeroU32::new(years) {
            Some(years) => Some(Self { years }),
            None => None,
        }
    }

    /// Length of the term in years
    #[must_use]
    pub const fn as_years(self) -> u32 {
        self.years.get()
    }

    /// Calendar offset of `count` consecutive terms, or `None` on overflow
    #[must_use]
    pub fn repeated(self, count: u32) -> Option<Months> {
        self.years
            .get()
            .checked_mul(12)?
            .checked_mul(count)
            .map(Months::new)
    }
}

impl Default for RenewalTerm {
    fn default() -> Self {
        Self::ONE_YEAR
    }
}

/// What the date published by a registry means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    /// Registration date; expiry is the next renewal anniversary
    Registered {
        /// Renewal interval counted from the registration date
        term: RenewalTerm,
    },
    /// Expiry date, used verbatim
    Expires,
}
