use crate::control::Flow;
use crate::sequence::Sequence;

/// Folds every item into an accumulator.
///
/// Advances `sequence` until it is exhausted, applying `function` to the
/// accumulator and each item. `advance` is called at least once, even on an
/// empty sequence, to observe the exhaustion.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = source::range(1, 5);
/// assert_eq!(terminal::fold(&mut sequence, 0, |total, value| total + value), 10);
/// ```
pub fn fold<S, A, F>(sequence: &mut S, init: A, mut function: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, S::Item) -> A,
{
    let mut accumulator = init;
    while let Some(item) = sequence.advance() {
        accumulator = function(accumulator, item);
    }
    accumulator
}

/// Folds items until `function` returns [`Flow::Stop`].
///
/// On `Stop(payload)` the fold returns `Stop(payload)` immediately; the
/// sequence has then been advanced exactly once per item seen. If the
/// sequence runs out first, the result is `Continue(accumulator)`.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = source::slice(&[3, 4, -1, 5]).copied();
/// let outcome = terminal::try_fold(&mut sequence, 0, |total, value| {
///     if value < 0 { Flow::Stop(total) } else { Flow::Continue(total + value) }
/// });
/// assert_eq!(outcome, Flow::Stop(7));
/// assert_eq!(sequence.advance(), Some(5));
/// ```
pub fn try_fold<S, A, R, F>(sequence: &mut S, init: A, mut function: F) -> Flow<A, R>
where
    S: Sequence + ?Sized,
    F: FnMut(A, S::Item) -> Flow<A, R>,
{
    let mut accumulator = init;
    while let Some(item) = sequence.advance() {
        match function(accumulator, item) {
            Flow::Continue(next) => accumulator = next,
            Flow::Stop(payload) => return Flow::Stop(payload),
        }
    }
    Flow::Continue(accumulator)
}

/// Calls `function` on every item.
pub fn for_each<S, F>(sequence: &mut S, mut function: F)
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item),
{
    fold(sequence, (), |(), item| function(item));
}

/// Calls `function` on items until it returns [`Flow::Stop`].
pub fn try_for_each<S, R, F>(sequence: &mut S, mut function: F) -> Flow<(), R>
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item) -> Flow<(), R>,
{
    try_fold(sequence, (), |(), item| function(item))
}

/// Counts the remaining items.
pub fn count<S>(sequence: &mut S) -> usize
where
    S: Sequence + ?Sized,
{
    fold(sequence, 0, |count, _| count + 1)
}

/// Returns the final item, or `None` if there are none.
pub fn last<S>(sequence: &mut S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    fold(sequence, None, |_, item| Some(item))
}
