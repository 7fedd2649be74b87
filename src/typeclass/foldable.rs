//! Foldable type class - folding over data structures.
//!
//! A `Foldable` is a structure whose elements can be reduced into a
//! single summary value, from the left or from the right.
//!
//! # Properties
//!
//! Implementations should satisfy:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! and folding an empty structure must return `init` without invoking
//! the function.
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::higher::TypeConstructor;

/// A type class for data structures that can be folded to a summary
/// value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::Foldable;
///
/// let values = vec![1, 2, 3];
/// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
/// let result = values.fold_right(String::new(), |element, accumulator| {
///     format!("{element}{accumulator}")
/// });
/// assert_eq!(result, "123");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// Equivalent to `Iterator::fold`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// The fold of everything after an element is computed first and
    /// passed to the function together with that element.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// assert!(vec![1, 2, 3].exists(|element| *element > 2));
    /// assert!(!vec![1, 2, 3].exists(|element| *element > 5));
    /// ```
    fn exists<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// assert!(vec![2, 4, 6].for_all(|element| element % 2 == 0));
    /// let empty: Vec<i32> = Vec::new();
    /// assert!(empty.for_all(|element| *element > 100));
    /// ```
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(true, |all, element| all && predicate(&element))
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(inner) => function(init, inner),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(inner) => function(inner, init),
            None => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

// =============================================================================
// Tests
// =============================================================================
