//! Search routines over an already ordered slice.
//!
//! Every routine here assumes `items` is ordered by `cmp` (no element compares
//! greater than its successor). The routines are:
//! - [`splice_point`]: Where a new element goes, using a two-ended linear scan.
//! - [`find_in_run`]: Binary search for the equal run, then an identity scan of that run.
//! - [`identity_position`]: Plain linear identity scan, no comparator involved.
//! - [`is_ordered`]: Checks the ordering invariant.

use crate::core::{Comparator, Identity};
use std::cmp::Ordering;

/// End of the slice the insertion scan started from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanFrom {
    /// Scanned upward from index 0.
    Front,
    /// Scanned downward from the last index.
    Back,
}

#[inline(always)]
fn sign(ord: Ordering) -> i8 {
    ord as i8
}

/// Computes the index at which `item` must be inserted to keep `items` ordered.
///
/// The scan starts at whichever end the element looks closer to: when
/// `-cmp(item, first) > cmp(item, last)` it walks forward from the front and
/// stops before the first element not less than `item`, so a new element lands
/// *before* the run it compares equal to. Otherwise it walks backward from the
/// back and stops after the last element not greater than `item`, so the new
/// element lands *after* its run.
///
/// Both scans are O(n) in the worst case. Choosing the end only changes where
/// the walk begins (prepending and appending are O(1) comparisons), not the
/// asymptotic cost.
///
/// # Examples
///
/// ```
/// use sortseq::algo::{splice_point, ScanFrom};
/// use sortseq::core::NaturalOrder;
///
/// let items = [1, 3, 3, 7];
/// assert_eq!(splice_point(&items, &NaturalOrder, &0), (0, ScanFrom::Front));
/// assert_eq!(splice_point(&items, &NaturalOrder, &3), (3, ScanFrom::Back));
/// assert_eq!(splice_point(&items, &NaturalOrder, &9), (4, ScanFrom::Back));
/// ```
pub fn splice_point<T, C>(items: &[T], cmp: &C, item: &T) -> (usize, ScanFrom)
where
    C: Comparator<T> + ?Sized,
{
    let len = items.len();
    if len == 0 {
        return (0, ScanFrom::Back);
    }

    let cmp_first = sign(cmp.compare(item, &items[0]));
    let cmp_last = sign(cmp.compare(item, &items[len - 1]));

    if -cmp_first > cmp_last {
        let at = items
            .iter()
            .position(|probe| cmp.compare(item, probe) != Ordering::Greater)
            .unwrap_or(len);
        (at, ScanFrom::Front)
    } else {
        let at = items
            .iter()
            .rposition(|probe| cmp.compare(item, probe) != Ordering::Less)
            .map_or(0, |i| i + 1);
        (at, ScanFrom::Back)
    }
}

/// Locates `item` itself (by [`Identity`]) among the elements comparing equal to it.
///
/// 1. Binary search until some index compares equal to `item`. None found means
///    `item` is not stored.
/// 2. From that index walk down, then up, across the run of equal elements and
///    return the first one that is the same instance as `item`.
///
/// Returns `None` if the run holds only equal-but-different instances.
/// Costs O(log n + m) comparisons, `m` being the length of the run.
pub fn find_in_run<T, C>(items: &[T], cmp: &C, item: &T) -> Option<usize>
where
    T: Identity,
    C: Comparator<T> + ?Sized,
{
    let hit = probe_run(items, cmp, item)?;

    let in_run = |probe: &&T| cmp.compare(item, probe) == Ordering::Equal;

    items[..=hit]
        .iter()
        .rev()
        .take_while(in_run)
        .position(|probe| probe.is_same(item))
        .map(|back| hit - back)
        .or_else(|| {
            items[hit + 1..]
                .iter()
                .take_while(in_run)
                .position(|probe| probe.is_same(item))
                .map(|ahead| hit + 1 + ahead)
        })
}

/// Binary search for any index comparing equal to `item`.
fn probe_run<T, C>(items: &[T], cmp: &C, item: &T) -> Option<usize>
where
    C: Comparator<T> + ?Sized,
{
    // half-open window [lo, hi)
    let mut lo = 0;
    let mut hi = items.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(item, &items[mid]) {
            Ordering::Greater => lo = mid + 1,
            Ordering::Less => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// Index of the first element that is the same instance as `item`, scanning from the front.
///
/// The comparator is not consulted, so this works even when ordering cannot tell
/// `item` apart from its neighbours.
#[inline]
pub fn identity_position<T: Identity>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|probe| probe.is_same(item))
}

/// Returns `true` if no element compares greater than its successor.
pub fn is_ordered<T, C>(items: &[T], cmp: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    items
        .windows(2)
        .all(|pair| cmp.compare(&pair[0], &pair[1]) != Ordering::Greater)
}
