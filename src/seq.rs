//! The [`SortedSeq`] container.

use crate::algo;
use crate::core::{Comparator, Identity, NaturalOrder};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::Index;

/// A `Vec`-backed sequence kept ordered by a comparator fixed at construction.
///
/// Elements that compare equal are allowed and keep a deterministic relative
/// placement (see [`add`](SortedSeq::add)). Lookup and removal tell them apart
/// by [`Identity`], not by the comparator.
///
/// | operation | cost |
/// |---|---|
/// | [`add`](SortedSeq::add), [`remove`](SortedSeq::remove), [`remove_at`](SortedSeq::remove_at) | O(n) |
/// | [`find`](SortedSeq::find) | O(log n + m), m = elements equal to the target |
/// | [`get`](SortedSeq::get), [`first`](SortedSeq::first), [`last`](SortedSeq::last), [`len`](SortedSeq::len) | O(1) |
/// | [`for_each`](SortedSeq::for_each), [`clear`](SortedSeq::clear) | O(n) |
///
/// Traversal borrows the sequence, so it cannot be mutated while being walked.
///
/// # Examples
///
/// ```
/// use sortseq::SortedSeq;
/// use std::rc::Rc;
///
/// let mut seq = SortedSeq::new(|a: &Rc<i32>, b: &Rc<i32>| a.cmp(b));
/// let two = Rc::new(2);
/// let other_two = Rc::new(2);
///
/// seq.add(Rc::new(5));
/// seq.add(two.clone());
/// seq.add(Rc::new(8));
/// seq.add(other_two.clone());
///
/// let values: Vec<i32> = seq.iter().map(|v| **v).collect();
/// assert_eq!(values, vec![2, 2, 5, 8]);
///
/// let at = seq.find(&other_two).unwrap();
/// assert!(Rc::ptr_eq(seq.get(at).unwrap(), &other_two));
///
/// assert_eq!(seq.remove(&two), 1);
/// assert_eq!(seq.len(), 3);
/// ```
#[derive(Clone)]
pub struct SortedSeq<T, C> {
    items: Vec<T>,
    cmp: C,
}

impl<T, C: Comparator<T>> SortedSeq<T, C> {
    /// Creates an empty sequence ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty sequence ordered by `cmp` with room for `capacity` elements.
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a sequence by [`add`](SortedSeq::add)ing every element of `iter` in turn.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(cmp: C, iter: I) -> Self {
        let mut seq = Self::new(cmp);
        seq.extend(iter);
        seq
    }

    /// Inserts `item` and returns the index it landed at.
    ///
    /// The insertion point is found by a linear scan started from the end `item`
    /// looks closer to (see [`algo::splice_point`]). An element scanned in from the
    /// front goes before the elements it compares equal to, one scanned in from the
    /// back goes after them. Either way the sequence stays ordered.
    ///
    /// ```
    /// use sortseq::SortedSeq;
    ///
    /// let mut seq = SortedSeq::natural();
    /// assert_eq!(seq.add(5), 0);
    /// assert_eq!(seq.add(2), 0);
    /// assert_eq!(seq.add(8), 2);
    /// assert_eq!(seq.as_slice(), &[2, 5, 8]);
    /// ```
    pub fn add(&mut self, item: T) -> usize {
        let (at, from) = algo::splice_point(&self.items, &self.cmp, &item);
        self.items.insert(at, item);
        log::trace!(
            "sortseq: inserted at {} of {} (scan from {:?})",
            at,
            self.items.len(),
            from
        );
        at
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Smallest element, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Largest element, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the sequence can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= self.len()`. The sequence is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        log::trace!("sortseq: removing index {} of {}", index, len);
        Ok(self.items.remove(index))
    }

    /// Drops every element. Capacity is kept and the comparator is not called.
    pub fn clear(&mut self) {
        log::trace!("sortseq: clearing {} elements", self.items.len());
        self.items.clear();
    }

    /// Calls `visitor` on every element in ascending order, passing `param` along.
    ///
    /// The sequence stays borrowed for the whole walk, so a visitor cannot add or
    /// remove elements:
    ///
    /// ```compile_fail
    /// use sortseq::SortedSeq;
    ///
    /// let mut seq = SortedSeq::natural();
    /// seq.add(1);
    /// seq.for_each(|v, _| {
    ///     seq.add(*v + 1);
    /// }, &());
    /// ```
    pub fn for_each<P: ?Sized, F>(&self, mut visitor: F, param: &P)
    where
        F: FnMut(&T, &P),
    {
        self.items.iter().for_each(|item| visitor(item, param));
    }

    /// Calls `visitor` on every element in descending order, passing `param` along.
    pub fn for_each_reverse<P: ?Sized, F>(&self, mut visitor: F, param: &P)
    where
        F: FnMut(&T, &P),
    {
        self.items.iter().rev().for_each(|item| visitor(item, param));
    }

    /// Iterator over the elements in ascending order. Reverse it with `.rev()`.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as an ordered slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning its ordered backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The comparator this sequence is ordered by.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Checks that no element compares greater than its successor.
    ///
    /// Always `true` unless the comparator is inconsistent.
    pub fn is_ordered(&self) -> bool {
        algo::is_ordered(&self.items, &self.cmp)
    }
}

impl<T: Identity, C: Comparator<T>> SortedSeq<T, C> {
    /// Index of `item` itself, or `None`.
    ///
    /// Binary search lands on the run of elements comparing equal to `item`,
    /// which is then scanned for the same instance (see [`algo::find_in_run`]).
    /// Equal but distinct elements are never reported.
    pub fn find(&self, item: &T) -> Option<usize> {
        algo::find_in_run(&self.items, &self.cmp, item)
    }

    /// Returns `true` if `item` itself is stored.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Index of the first slot holding `item` itself, found by a front-to-back
    /// identity scan that ignores the comparator.
    #[inline]
    pub fn position(&self, item: &T) -> Option<usize> {
        algo::identity_position(&self.items, item)
    }

    /// Removes `item` itself and returns how many elements were removed (`0` or `1`).
    ///
    /// The slot is found with [`position`](SortedSeq::position), so removal works
    /// wherever the element sits, whatever the comparator says about it.
    pub fn remove(&mut self, item: &T) -> usize {
        match self.position(item) {
            Some(at) => {
                log::trace!("sortseq: removing index {} of {}", at, self.items.len());
                self.items.remove(at);
                1
            }
            None => 0,
        }
    }
}

impl<T: Ord> SortedSeq<T, NaturalOrder> {
    /// Creates an empty sequence ordered by `T`'s own [`Ord`].
    pub fn natural() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<T, C: Comparator<T> + Default> Default for SortedSeq<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedSeq<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T, C: Comparator<T>> Index<usize> for SortedSeq<T, C> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedSeq<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        iter.for_each(|item| {
            self.add(item);
        });
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSeq<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C> IntoIterator for SortedSeq<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
