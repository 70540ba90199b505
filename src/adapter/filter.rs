use crate::sequence::Sequence;
use crate::terminal;

/// Yields only matching items. See [`Sequence::filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
}

impl<S: Sequence, P: FnMut(&S::Item) -> bool> Filter<S, P> {
    /// Wraps `inner`, keeping the items for which `predicate` holds.
    #[inline]
    pub const fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    // Each advance is a short-circuiting search over the inner sequence.
    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        terminal::find(&mut self.inner, &mut self.predicate)
    }
}

/// Filters and maps in one step. See [`Sequence::filter_map`].
#[derive(Clone)]
pub struct FilterMap<S, F> {
    inner: S,
    function: F,
}

impl<S: Sequence, F> FilterMap<S, F> {
    /// Wraps `inner`, keeping the `Some` results of `function`.
    #[inline]
    pub fn new<U>(inner: S, function: F) -> Self
    where
        F: FnMut(S::Item) -> Option<U>,
    {
        Self { inner, function }
    }
}

impl<S, F, U> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Option<U>,
{
    type Item = U;

    fn advance(&mut self) -> Option<U> {
        while let Some(item) = self.inner.advance() {
            if let Some(mapped) = (self.function)(item) {
                return Some(mapped);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::testing::Probe;
    use crate::sequence::source;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 6], vec![2, 4, 6])]
    #[case(vec![1, 3, 5], vec![])]
    #[case(vec![], vec![])]
    fn test_filter_keeps_matching_items(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let filtered: Vec<i32> = source::from_iter(input)
            .filter(|value| value % 2 == 0)
            .collect();
        assert_eq!(filtered, expected);
    }

    #[rstest]
    fn test_filter_scans_until_match() {
        let mut probe = Probe::new(vec![1, 3, 5, 6, 7]);
        let mut filtered = probe.by_ref().filter(|value| value % 2 == 0);
        assert_eq!(filtered.advance(), Some(6));
        drop(filtered);
        assert_eq!(probe.advances, 4);
    }

    #[rstest]
    fn test_filter_map_skips_none() {
        let parsed: Vec<i32> = source::slice(&["1", "two", "3", ""])
            .filter_map(|text| text.parse::<i32>().ok())
            .collect();
        assert_eq!(parsed, vec![1, 3]);
    }

    #[rstest]
    fn test_filter_map_stops_at_inner_exhaustion() {
        let mut probe = Probe::new(vec![1, 3]);
        let mut mapped = probe.by_ref().filter_map(|value: i32| (value > 10).then_some(value));
        assert_eq!(mapped.advance(), None);
        drop(mapped);
        assert_eq!(probe.advances, 3);
    }
}
