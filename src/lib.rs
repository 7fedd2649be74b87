//! # conslist
//!
//! A persistent singly-linked cons list with a small family of
//! functional combinators.
//!
//! ## Overview
//!
//! The crate provides one data structure, [`ConsList`], and the
//! operations that make it useful as a building block inside larger
//! programs:
//!
//! - **Construction**: `cons` (O(1) prepend with structural sharing),
//!   `singleton`, `from_slice`, `FromIterator`
//! - **Traversal**: `for_each`, borrowing and owning iterators
//! - **Lookup**: `find` (comparator-driven, returns an aliasing suffix)
//! - **Derived lists**: `map`, `copy`, `filter`, `flatten`, `flat_map`
//! - **Reduction**: `fold_right` (a right fold; the empty list yields
//!   the initial accumulator untouched)
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid`
//!
//! The list owns its nodes exclusively and never interprets, copies, or
//! releases element payloads beyond what `T`'s own `Clone` and `Drop`
//! do. Callers who want shallow, pointer-duplicating semantics store
//! `Rc<U>` elements.
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for node links so lists can be
//!   sent across threads
//! - `serde`: `Serialize`/`Deserialize` for [`ConsList`] as a sequence
//!
//! ## Example
//!
//! ```rust
//! use conslist::ConsList;
//!
//! let list = ConsList::new().cons(1).cons(2).cons(3);
//! assert_eq!(list.head(), Some(&3));
//!
//! let odds = list.filter(|element| element % 2 == 1);
//! assert_eq!(format!("{odds}"), "[3, 1]");
//!
//! let sum = list.fold_right(1, |element, accumulator| element + accumulator);
//! assert_eq!(sum, 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the list type and the type class traits.
///
/// # Usage
///
/// ```rust
/// use conslist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::list::*;
    pub use crate::typeclass::*;
}

pub mod list;
pub mod typeclass;

pub use list::ConsList;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type for node links.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Tests
// =============================================================================
