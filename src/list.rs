//! Persistent singly-linked cons list and its combinators.
//!
//! This module provides [`ConsList`], an immutable singly-linked list
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `ConsList` is a cons-list inspired by Lisp/Scheme. It provides:
//!
//! - O(1) prepend (`cons`)
//! - O(1) head and tail access
//! - O(n) combinators: `find`, `map`, `copy`, `filter`, `flatten`,
//!   `flat_map`, `fold_right`
//!
//! All combinators return new lists without modifying the original. The
//! empty list is the absence of a head node, never a sentinel, and every
//! operation treats it as the base case.
//!
//! # Examples
//!
//! ```rust
//! use conslist::ConsList;
//!
//! // Build a list by prepending
//! let list = ConsList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list with prepended element
//!
//! // Combinators
//! let doubled = list.map(|element| element * 2);
//! assert_eq!(format!("{doubled}"), "[2, 4, 6]");
//! ```
//!
//! # Ownership
//!
//! The list owns its nodes exclusively and nothing else. Elements are
//! stored by value; a caller who wants the classic borrowed-payload
//! split (list frees nodes, caller frees payloads) stores `Rc<U>`
//! elements, which makes `copy`, `filter`, `flatten`, and `flat_map`
//! shallow: they duplicate handles, never the values behind them.
//!
//! # Structural Sharing
//!
//! When you create a new list by prepending an element with `cons`, the
//! new list shares all nodes with the original list:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! Sub-lists returned by [`ConsList::find`] alias the original chain the
//! same way. Reference counting makes either side safe to drop first.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::ReferenceCounter;
use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

/// Internal node structure for the cons list.
///
/// Each node contains an element and an optional link to the next node.
/// Reference counting on the link enables structural sharing between
/// lists.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Link to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent singly-linked cons list.
///
/// `ConsList` is an immutable data structure built from reference-counted
/// nodes. Prepending is O(1) and shares the entire tail with the source
/// list; the derived-list combinators (`map`, `copy`, `filter`,
/// `flatten`, `flat_map`) allocate fresh nodes and leave their input
/// untouched.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1)       |
/// | `len`        | O(1)       |
/// | `get`        | O(n)       |
/// | `find`       | O(n)       |
/// | `map`        | O(n)       |
/// | `copy`       | O(n)       |
/// | `filter`     | O(n)       |
/// | `fold_right` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use conslist::ConsList;
///
/// let list = ConsList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct ConsList<T> {
    /// Link to the head node (if any). `None` is the empty list.
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> ConsList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = ConsList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from a Vec, preserving the Vec's order.
    ///
    /// Uses `Vec::pop()` to consume elements from the end, building the
    /// chain back to front without recursion.
    fn from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends an element to the front of the list.
    ///
    /// This operation creates a new list with the element at the front,
    /// sharing the structure of the original list. The original list
    /// remains valid and is the tail of the result.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// let empty: ConsList<i32> = ConsList::new();
    /// assert_eq!(empty.head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// If the list is empty, returns an empty list. The result shares
    /// structure with the original list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(2).cons(1);
    /// if let Some((head, tail)) = list.uncons() {
    ///     assert_eq!(*head, 1);
    ///     assert_eq!(tail.head(), Some(&2));
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        None
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements from front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> ConsListIterator<'_, T> {
        ConsListIterator {
            current: self.head.as_ref(),
        }
    }

    /// Invokes a function once per element, front to back.
    ///
    /// The function receives read-only access to each element. No
    /// allocation is performed and the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let mut seen = Vec::new();
    /// list.for_each(|element| seen.push(*element));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&T),
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            function(&node.element);
            current = node.next.as_deref();
        }
    }

    /// Finds an element with a three-way comparator and returns the
    /// suffix of the list beginning at it.
    ///
    /// Scans front to back and invokes `compare(target, element)` on
    /// each element; the first element that compares [`Ordering::Equal`]
    /// wins. The returned list aliases the original chain from that node
    /// to the end — no nodes are allocated or copied. Returns an empty
    /// list if there is no match or the input is empty.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let suffix = list.find(&2, |target, element| target.cmp(element));
    /// assert_eq!(suffix.head(), Some(&2));
    /// assert_eq!(suffix.len(), 2);
    ///
    /// let missing = list.find(&9, |target, element| target.cmp(element));
    /// assert!(missing.is_empty());
    /// ```
    #[must_use]
    pub fn find<F>(&self, target: &T, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut current = self.head.as_ref();
        let mut remaining = self.length;

        while let Some(node) = current {
            if compare(target, &node.element).is_eq() {
                return Self {
                    head: Some(ReferenceCounter::clone(node)),
                    length: remaining,
                };
            }
            remaining -= 1;
            current = node.next.as_ref();
        }
        Self::new()
    }

    /// Produces a new list by applying a function to every element.
    ///
    /// The result has the same length and order as the input; each
    /// produced value lives in a newly allocated node. The input list
    /// and its elements are left untouched. An empty input yields an
    /// empty output without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let doubled = list.map(|element| element * 2);
    /// assert_eq!(format!("{doubled}"), "[2, 4, 6]");
    /// assert_eq!(list.len(), doubled.len());
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        F: FnMut(&T) -> B,
    {
        let mapped: Vec<B> = self.iter().map(|element| function(element)).collect();
        ConsList::from_vec(mapped)
    }

    /// Produces a new list by applying a list-valued function to every
    /// element and concatenating the results.
    ///
    /// Equivalent in contents to `flatten` applied to `map`: the outer
    /// traversal order and each produced list's internal order are both
    /// preserved. Each intermediate list is dropped (its nodes
    /// reclaimed) as soon as its contents have been copied into the
    /// result. An empty input yields an empty output without invoking
    /// the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let result = list.flat_map(|element| {
    ///     ConsList::new().cons(element * 10).cons(*element)
    /// });
    /// assert_eq!(format!("{result}"), "[1, 10, 2, 20, 3, 30]");
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        B: Clone,
        F: FnMut(&T) -> ConsList<B>,
    {
        let mut elements = Vec::new();
        for element in self {
            let mapped = function(element);
            elements.extend(mapped.iter().cloned());
            // mapped is dropped here; only its nodes go away
        }
        ConsList::from_vec(elements)
    }

    /// Folds the list from the right into a single value.
    ///
    /// Defined as `combine(head, fold_right(tail, init, combine))`: the
    /// fold of the tail is computed first and passed as the accumulator
    /// together with the current element. The empty list returns `init`
    /// unchanged without invoking `combine`. The accumulator moves by
    /// value through every `combine` call, so reclaiming a heap-backed
    /// accumulator is never the caller's concern.
    ///
    /// The implementation is iterative; long lists do not exhaust the
    /// native call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(1).cons(2).cons(3);
    /// // 3 + (2 + (1 + 1))
    /// let sum = list.fold_right(1, |element, accumulator| element + accumulator);
    /// assert_eq!(sum, 7);
    /// ```
    #[must_use]
    pub fn fold_right<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        let mut accumulator = init;
        for element in elements.into_iter().rev() {
            accumulator = combine(element, accumulator);
        }
        accumulator
    }
}

impl<T: Clone> ConsList<T> {
    /// Creates a list from a slice.
    ///
    /// The first element of the slice becomes the first element of the
    /// list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let length = slice.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                element: element.clone(),
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Copies the list into a chain of freshly allocated nodes.
    ///
    /// The copy has the same length and order as the original, and each
    /// element is cloned shallowly: for `Rc` elements the handles are
    /// duplicated, not the values behind them. The second return value
    /// is an aliasing view of the last node of the new chain, so the
    /// seam is directly reachable without another traversal. Both
    /// returned lists are empty iff the input is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let (copy, last) = list.copy();
    /// assert_eq!(copy, list);
    /// assert_eq!(last.head(), Some(&3));
    /// assert_eq!(last.len(), 1);
    /// ```
    #[must_use]
    pub fn copy(&self) -> (Self, Self) {
        let elements: Vec<T> = self.iter().cloned().collect();
        let length = elements.len();
        if length == 0 {
            return (Self::new(), Self::new());
        }

        // Build back to front; the first node created is the last node
        // of the new chain.
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        let mut last: Option<ReferenceCounter<Node<T>>> = None;
        for element in elements.into_iter().rev() {
            let node = ReferenceCounter::new(Node {
                element,
                next: head,
            });
            if last.is_none() {
                last = Some(ReferenceCounter::clone(&node));
            }
            head = Some(node);
        }

        (
            Self { head, length },
            Self {
                head: last,
                length: 1,
            },
        )
    }

    /// Produces a new list containing exactly the elements that satisfy
    /// the predicate.
    ///
    /// Surviving elements keep their relative order (the result is not
    /// reversed) and each is cloned into a newly allocated node. Returns
    /// an empty list when nothing survives or the input is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(1).cons(2).cons(3).cons(4);
    /// let odds = list.filter(|element| element % 2 == 1);
    /// assert_eq!(format!("{odds}"), "[3, 1]");
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        let mut elements = Vec::new();
        for element in self {
            if predicate(element) {
                elements.push(element.clone());
            }
        }
        Self::from_vec(elements)
    }

    /// Appends another list to this list.
    ///
    /// Returns a new list containing all elements from this list
    /// followed by all elements from the other list. The other list's
    /// nodes are shared, not copied.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let front = ConsList::new().cons(2).cons(1);
    /// let back = ConsList::new().cons(4).cons(3);
    /// let combined = front.append(&back);
    /// assert_eq!(format!("{combined}"), "[1, 2, 3, 4]");
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }
}

// =============================================================================
// Specialized Methods for Nested Lists
// =============================================================================

impl<T: Clone> ConsList<ConsList<T>> {
    /// Concatenates a list of lists into a single list.
    ///
    /// Visits the outer list front to back and, for each inner list,
    /// copies its elements front to back into the result. Outer order
    /// and each inner list's internal order are preserved, so the result
    /// is `contents(L1) ++ contents(L2) ++ ...`. Neither the outer list
    /// nor any inner list is mutated or freed. An empty outer list
    /// yields an empty result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let outer = ConsList::new()
    ///     .cons(ConsList::singleton(0))
    ///     .cons(ConsList::new().cons(3).cons(2))
    ///     .cons(ConsList::singleton(1));
    /// let flat = outer.flatten();
    /// assert_eq!(format!("{flat}"), "[1, 2, 3, 0]");
    /// ```
    #[must_use]
    pub fn flatten(&self) -> ConsList<T> {
        let mut elements = Vec::new();
        for inner in self {
            elements.extend(inner.iter().cloned());
        }
        ConsList::from_vec(elements)
    }
}

// =============================================================================
// Destruction
// =============================================================================

/// Iterative release of the node chain.
///
/// The default recursive drop of a linked chain grows the native call
/// stack in proportion to the list length. This loop unlinks nodes one
/// at a time instead, stopping at the first node still shared with
/// another list (that suffix stays alive for its other owners).
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut inner) => current = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to elements of a [`ConsList`].
pub struct ConsListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
}

impl<'a, T> Iterator for ConsListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`ConsList`].
pub struct ConsListIntoIterator<T> {
    list: ConsList<T>,
}

impl<T: Clone> Iterator for ConsListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((head, tail)) = self.list.uncons() {
            let element = head.clone();
            self.list = tail;
            Some(element)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ConsListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ConsList<T> {
    /// Clones the handle, not the chain: the clone shares every node
    /// with the original. O(1).
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for ConsList<T> {
    type Item = T;
    type IntoIter = ConsListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ConsListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = ConsListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for ConsList<T> {
    type Inner = T;
    type WithType<B> = ConsList<B>;
}

impl<T: Clone> Functor for ConsList<T> {
    fn fmap<B, F>(self, mut function: F) -> ConsList<B>
    where
        F: FnMut(T) -> B,
    {
        let mapped: Vec<B> = self.into_iter().map(|element| function(element)).collect();
        ConsList::from_vec(mapped)
    }

    fn fmap_ref<B, F>(&self, function: F) -> ConsList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T: Clone> Foldable for ConsList<T> {
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
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

impl<T: Clone> Semigroup for ConsList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for ConsList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ConsList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ConsListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ConsListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ConsListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ConsList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ConsList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ConsList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ConsListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
