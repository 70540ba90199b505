use crate::control::Flow;
use crate::sequence::Sequence;

use super::fold::try_fold;

/// Returns the first item matching `predicate`.
///
/// Stops at the match; the rest of the sequence is left untouched.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = source::range(1, 10);
/// assert_eq!(terminal::find(&mut sequence, |value| *value > 3), Some(4));
/// assert_eq!(sequence.advance(), Some(5));
/// ```
pub fn find<S, P>(sequence: &mut S, mut predicate: P) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    try_fold(sequence, (), |(), item| {
        if predicate(&item) {
            Flow::Stop(item)
        } else {
            Flow::Continue(())
        }
    })
    .stop_value()
}

/// Returns the zero-based index of the first item matching `predicate`.
///
/// Consumes the sequence up to and including the matching item.
pub fn position<S, P>(sequence: &mut S, mut predicate: P) -> Option<usize>
where
    S: Sequence + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    let mut index = 0;
    while let Some(item) = sequence.advance() {
        if predicate(item) {
            return Some(index);
        }
        index += 1;
    }
    None
}

/// Returns `true` if every item matches `predicate`.
///
/// Stops at the first item that does not match. An empty sequence yields
/// `true`.
pub fn all<S, P>(sequence: &mut S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    try_fold(sequence, (), |(), item| {
        if predicate(item) {
            Flow::Continue(())
        } else {
            Flow::Stop(())
        }
    })
    .is_continue()
}

/// Returns `true` if some item matches `predicate`.
///
/// Stops at the first matching item. An empty sequence yields `false`.
pub fn any<S, P>(sequence: &mut S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(S::Item) -> bool,
{
    try_fold(sequence, (), |(), item| {
        if predicate(item) {
            Flow::Stop(())
        } else {
            Flow::Continue(())
        }
    })
    .is_stop()
}

/// Advances the sequence `count` times, discarding the items.
///
/// # Errors
///
/// Returns `Err(advanced)` with the number of items actually skipped if the
/// sequence ran out first.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = source::range(0, 3);
/// assert_eq!(terminal::advance_by(&mut sequence, 2), Ok(()));
/// assert_eq!(terminal::advance_by(&mut sequence, 5), Err(1));
/// ```
pub fn advance_by<S>(sequence: &mut S, count: usize) -> Result<(), usize>
where
    S: Sequence + ?Sized,
{
    for advanced in 0..count {
        if sequence.advance().is_none() {
            return Err(advanced);
        }
    }
    Ok(())
}

/// Returns the item at zero-based `index`, discarding the ones before it.
///
/// `nth(sequence, 0)` is the next item. Returns `None` if the sequence has
/// at most `index` items left.
pub fn nth<S>(sequence: &mut S, index: usize) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    advance_by(sequence, index).ok()?;
    sequence.advance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::testing::Probe;
    use crate::sequence::source;
    use rstest::rstest;

    #[rstest]
    fn test_find_short_circuits() {
        let mut probe = Probe::new(vec![1, 2, 3, 4]);
        assert_eq!(find(&mut probe, |value| *value == 2), Some(2));
        assert_eq!(probe.advances, 2);
    }

    #[rstest]
    fn test_find_missing() {
        assert_eq!(find(&mut source::range(0, 5), |value| *value > 10), None);
    }

    #[rstest]
    #[case(vec![5, 6, 7], Some(1))]
    #[case(vec![5, 7], None)]
    #[case(vec![], None)]
    fn test_position(#[case] input: Vec<i32>, #[case] expected: Option<usize>) {
        assert_eq!(position(&mut source::from_iter(input), |value| value % 2 == 0), expected);
    }

    #[rstest]
    #[case(vec![], true, false)]
    #[case(vec![2, 4], true, true)]
    #[case(vec![1, 2], false, true)]
    #[case(vec![1, 3], false, false)]
    fn test_all_and_any(#[case] input: Vec<i32>, #[case] expected_all: bool, #[case] expected_any: bool) {
        let is_even = |value: i32| value % 2 == 0;
        assert_eq!(all(&mut source::from_iter(input.clone()), is_even), expected_all);
        assert_eq!(any(&mut source::from_iter(input), is_even), expected_any);
    }

    #[rstest]
    fn test_all_stops_at_first_disproof() {
        let mut probe = Probe::new(vec![2, 3, 4]);
        assert!(!all(&mut probe, |value| value % 2 == 0));
        assert_eq!(probe.advances, 2);
    }

    #[rstest]
    fn test_any_stops_at_first_proof() {
        let mut probe = Probe::new(vec![1, 2, 3]);
        assert!(any(&mut probe, |value| value % 2 == 0));
        assert_eq!(probe.advances, 2);
    }

    #[rstest]
    #[case(0, Some(10))]
    #[case(2, Some(12))]
    #[case(3, None)]
    #[case(10, None)]
    fn test_nth(#[case] index: usize, #[case] expected: Option<i32>) {
        assert_eq!(nth(&mut source::range(10, 13), index), expected);
    }

    #[rstest]
    fn test_nth_discards_preceding_items() {
        let mut sequence = source::range(0, 10);
        assert_eq!(nth(&mut sequence, 2), Some(2));
        assert_eq!(nth(&mut sequence, 0), Some(3));
    }

    #[rstest]
    fn test_advance_by_reports_shortfall() {
        let mut probe = Probe::new(vec![1, 2]);
        assert_eq!(advance_by(&mut probe, 4), Err(2));
        assert_eq!(probe.advances, 3);
    }
}
