use crate::control::Flow;
use crate::sequence::Sequence;

use super::fold::{fold, try_fold};

/// Collects every item into a fresh `C`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use pullseq::prelude::*;
///
/// let unique: BTreeSet<char> = terminal::collect(&mut source::chars("banana"));
/// assert_eq!(unique.into_iter().collect::<String>(), "abn");
/// ```
pub fn collect<S, C>(sequence: &mut S) -> C
where
    S: Sequence + ?Sized,
    C: Default + Extend<S::Item>,
{
    let mut container = C::default();
    collect_into(sequence, &mut container);
    container
}

/// Appends every item to `container`, returning it for chaining.
pub fn collect_into<'c, S, C>(sequence: &mut S, container: &'c mut C) -> &'c mut C
where
    S: Sequence + ?Sized,
    C: Extend<S::Item>,
{
    fold(sequence, container, |container, item| {
        container.extend(Some(item));
        container
    })
}

/// Collects a sequence of results into `Ok(C)`, or returns the first `Err`.
///
/// Stops at the first error; the items after it are not advanced.
///
/// # Errors
///
/// Returns the first `Err` produced by the sequence.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = source::from_iter(vec![Ok(1), Err("bad"), Ok(3)]);
/// let collected: Result<Vec<i32>, &str> = terminal::try_collect(&mut sequence);
/// assert_eq!(collected, Err("bad"));
/// assert_eq!(sequence.advance(), Some(Ok(3)));
/// ```
pub fn try_collect<S, T, E, C>(sequence: &mut S) -> Result<C, E>
where
    S: Sequence<Item = Result<T, E>> + ?Sized,
    C: Default + Extend<T>,
{
    let outcome = try_fold(sequence, C::default(), |mut container, item| match item {
        Ok(value) => {
            container.extend(Some(value));
            Flow::Continue(container)
        }
        Err(error) => Flow::Stop(error),
    });
    match outcome {
        Flow::Continue(container) => Ok(container),
        Flow::Stop(error) => Err(error),
    }
}

/// Routes every item into one of two containers, in a single pass.
///
/// Items for which `predicate` holds go left, the others go right. Relative
/// order is preserved in both.
pub fn partition<S, C, P>(sequence: &mut S, mut predicate: P) -> (C, C)
where
    S: Sequence + ?Sized,
    C: Default + Extend<S::Item>,
    P: FnMut(&S::Item) -> bool,
{
    fold(
        sequence,
        (C::default(), C::default()),
        |(mut matching, mut rest), item| {
            if predicate(&item) {
                matching.extend(Some(item));
            } else {
                rest.extend(Some(item));
            }
            (matching, rest)
        },
    )
}

/// Splits a sequence of pairs into two containers, in a single pass.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut pairs = source::range(1, 4).zip(source::chars("xyz"));
/// let (numbers, letters): (Vec<i32>, String) = terminal::unzip(&mut pairs);
/// assert_eq!(numbers, vec![1, 2, 3]);
/// assert_eq!(letters, "xyz");
/// ```
pub fn unzip<S, A, B, CA, CB>(sequence: &mut S) -> (CA, CB)
where
    S: Sequence<Item = (A, B)> + ?Sized,
    CA: Default + Extend<A>,
    CB: Default + Extend<B>,
{
    fold(
        sequence,
        (CA::default(), CB::default()),
        |(mut left, mut right), (first, second)| {
            left.extend(Some(first));
            right.extend(Some(second));
            (left, right)
        },
    )
}
