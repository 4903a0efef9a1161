use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative amount of money held as a whole number of cents.
///
/// Every balance, coin value and price in the machine flows through this type,
/// so comparisons against menu prices are always exact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole dollars portion.
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Cents portion (0-99).
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtracts `rhs`, returning `None` when the result would go below zero.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
