//! Monoid type class - semigroups with an identity element.
//!
//! A `Monoid` extends [`Semigroup`] with an identity value, `empty`,
//! which combines with anything to give it back unchanged.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::{Monoid, Semigroup};
///
/// let empty: Vec<i32> = Vec::empty();
/// assert_eq!(empty.combine(vec![1, 2]), vec![1, 2]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for `combine`.
    #[must_use]
    fn empty() -> Self;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
