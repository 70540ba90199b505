use crate::sequence::Sequence;

/// Yields at most a fixed number of items. See [`Sequence::take`].
///
/// Once the budget is spent, the inner sequence is never advanced again.
#[derive(Debug, Clone)]
pub struct Take<S> {
    inner: S,
    remaining: usize,
}

impl<S: Sequence> Take<S> {
    /// Wraps `inner`, yielding at most `count` of its items.
    #[inline]
    pub const fn new(inner: S, count: usize) -> Self {
        Self {
            inner,
            remaining: count,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.advance()
    }
}

/// Yields items while a predicate holds. See [`Sequence::take_while`].
///
/// The first item failing the predicate is consumed from the inner sequence
/// and dropped.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    inner: S,
    predicate: P,
    done: bool,
}

impl<S: Sequence, P: FnMut(&S::Item) -> bool> TakeWhile<S, P> {
    /// Wraps `inner`, yielding items until `predicate` first fails.
    #[inline]
    pub const fn new(inner: S, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.inner.advance() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::testing::Probe;
    use crate::sequence::source;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(5, vec![1, 2, 3])]
    fn test_take_limits_items(#[case] count: usize, #[case] expected: Vec<i32>) {
        let taken: Vec<i32> = source::range(1, 4).take(count).collect();
        assert_eq!(taken, expected);
    }

    #[rstest]
    fn test_take_never_touches_inner_after_budget() {
        let mut probe = Probe::new(vec![1, 2, 3, 4]);
        let mut taken = probe.by_ref().take(2);
        assert_eq!(taken.advance(), Some(1));
        assert_eq!(taken.advance(), Some(2));
        assert_eq!(taken.advance(), None);
        assert_eq!(taken.advance(), None);
        drop(taken);
        assert_eq!(probe.advances, 2);
    }

    #[rstest]
    fn test_take_while_loses_failing_item() {
        let mut probe = Probe::new(vec![1, 2, 10, 3]);
        let taken: Vec<i32> = probe.by_ref().take_while(|value| *value < 5).collect();
        assert_eq!(taken, vec![1, 2]);
        assert_eq!(probe.advance(), Some(3));
    }

    #[rstest]
    fn test_take_while_is_permanent() {
        let mut probe = Probe::new(vec![1, 9, 1, 1]);
        let mut taken = probe.by_ref().take_while(|value| *value < 5);
        assert_eq!(taken.advance(), Some(1));
        assert_eq!(taken.advance(), None);
        assert_eq!(taken.advance(), None);
        drop(taken);
        assert_eq!(probe.advances, 2);
    }
}
