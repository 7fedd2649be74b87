//! Higher-kinded type emulation via Generic Associated Types.
//!
//! Rust has no native higher-kinded types, so traits like `Functor`
//! cannot be written directly against a bare type constructor `F<_>`.
//! The [`TypeConstructor`] trait closes the gap: a container names its
//! inner type and how to re-apply itself to a different inner type.

/// A trait for emulating higher-kinded types.
///
/// Implementors describe two things: the element type currently inside
/// the container ([`Inner`](Self::Inner)) and the container re-applied
/// to another element type ([`WithType`](Self::WithType)). Traits such
/// as [`Functor`](super::Functor) build on this to express "same shape,
/// different element type".
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Option<i32>>();
/// assert_inner::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` is
    /// `Option<String>`. The bound keeps the result usable as a type
    /// constructor in its own right, so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn vec_with_type_changes_element() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<String> = Vec<String>>,
        {
        }
        assert_with_type::<Vec<i32>>();
    }
}
