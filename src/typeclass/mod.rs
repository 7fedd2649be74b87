//! Type class traits for functional programming abstractions.
//!
//! This module provides the small set of type classes the list
//! combinators are expressed against:
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Foldable`]: Folding structures to summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor to be defined generically.
//!
//! # Examples
//!
//! ```rust
//! use conslist::ConsList;
//! use conslist::typeclass::{Functor, Foldable, Semigroup, Monoid};
//!
//! let list: ConsList<i32> = (1..=3).collect();
//! let doubled = list.clone().fmap(|element| element * 2);
//! assert_eq!(format!("{doubled}"), "[2, 4, 6]");
//!
//! let sum = doubled.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 12);
//!
//! let empty: ConsList<i32> = ConsList::empty();
//! assert_eq!(empty.combine(list.clone()), list);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
