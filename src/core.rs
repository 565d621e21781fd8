//! Core capability traits for `sortseq`.
//!
//! This module defines:
//! - [`Comparator`]: The three-way ordering a [`SortedSeq`](crate::SortedSeq) is kept in.
//! - [`Identity`]: How two values are recognised as the *same instance*, independent of ordering.
//! - [`NaturalOrder`] and [`Reversed`]: Ready-made comparators.

use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

/// A three-way comparison between two elements.
///
/// The comparison must be total, deterministic and transitive. A comparator that
/// breaks these rules never causes memory unsafety, but the resulting placement
/// of elements is unspecified.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so closures and function
/// pointers can be passed directly.
///
/// # Examples
///
/// ```
/// use sortseq::core::Comparator;
///
/// struct ByLen;
///
/// impl Comparator<String> for ByLen {
///     fn compare(&self, a: &String, b: &String) -> std::cmp::Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
///
/// assert!(ByLen.compare(&"ab".to_string(), &"abc".to_string()).is_lt());
/// ```
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparator using the element's own [`Ord`] implementation.
///
/// Works through smart pointers too: `Rc<i32>` is ordered by the `i32` it points to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the ordering of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Instance identity, distinct from the ordering.
///
/// Elements that compare equal may still be different instances. Lookup and
/// removal in a [`SortedSeq`](crate::SortedSeq) use this trait to find *this*
/// element rather than *an* equal one.
///
/// Shared pointers are identical when they point to the same allocation. Plain
/// references are identical when they have the same address. For primitive
/// values identity and equality coincide.
///
/// # Examples
///
/// ```
/// use sortseq::core::Identity;
/// use std::rc::Rc;
///
/// let a = Rc::new(2);
/// let b = Rc::new(2);
///
/// assert!(a.is_same(&a.clone()));
/// assert!(!a.is_same(&b));
/// ```
pub trait Identity {
    /// Returns `true` if `self` and `other` are the same instance.
    fn is_same(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for Rc<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for Arc<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for &U {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

macro_rules! value_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identity for $t {
                #[inline(always)]
                fn is_same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_identity!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool
);
