//! Functor type class - mapping over container values.
//!
//! A `Functor` is a container whose contents can be transformed without
//! changing the container's shape.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function returns an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can have a function mapped over
/// their contents.
///
/// The mapping function is `FnMut`, so a single closure can be applied
/// to every element of a multi-element container such as
/// [`ConsList`](crate::ConsList) or `Vec`.
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::Functor;
///
/// let values = vec![1, 2, 3];
/// let doubled = values.fmap(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every value inside the functor, consuming
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of the values inside the
    /// functor, leaving it available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// assert_eq!(x, Some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    fn fmap<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(|inner| function(inner))
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(|inner| function(inner))
    }
}

impl<T> Functor for Vec<T> {
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
