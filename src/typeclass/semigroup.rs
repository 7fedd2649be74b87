//! Semigroup type class - associative binary operations.
//!
//! A `Semigroup` is a type with an associative way of combining two
//! values into one.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::Semigroup;
//!
//! let a = String::from("foo");
//! let b = String::from("bar");
//! assert_eq!(a.combine(b), "foobar");
//! ```

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::Semigroup;
///
/// assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(left), None) => Some(left),
            (None, right) => right,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_string_combine() {
        assert_eq!(
            String::from("Hello, ").combine(String::from("World!")),
            "Hello, World!"
        );
    }

    #[rstest]
    fn test_vec_combine() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_option_combine() {
        assert_eq!(
            Some(String::from("a")).combine(Some(String::from("b"))),
            Some(String::from("ab"))
        );
        assert_eq!(Some(String::from("a")).combine(None), Some(String::from("a")));
        assert_eq!(None.combine(Some(String::from("b"))), Some(String::from("b")));
    }

    #[rstest]
    fn test_associativity() {
        let left = vec![1].combine(vec![2]).combine(vec![3]);
        let right = vec![1].combine(vec![2].combine(vec![3]));
        assert_eq!(left, right);
    }
}
