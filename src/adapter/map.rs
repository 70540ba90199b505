use crate::sequence::Sequence;

/// Applies a function to every item. See [`Sequence::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    function: F,
}

impl<S: Sequence, F> Map<S, F> {
    /// Wraps `inner`, transforming each item with `function`.
    #[inline]
    pub fn new<U>(inner: S, function: F) -> Self
    where
        F: FnMut(S::Item) -> U,
    {
        Self { inner, function }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn advance(&mut self) -> Option<U> {
        self.inner.advance().map(&mut self.function)
    }
}

/// Maps items until the function first returns `None`. See
/// [`Sequence::map_while`].
#[derive(Clone)]
pub struct MapWhile<S, F> {
    inner: S,
    function: F,
    done: bool,
}

impl<S: Sequence, F> MapWhile<S, F> {
    /// Wraps `inner`, mapping with `function` until it returns `None`.
    #[inline]
    pub fn new<U>(inner: S, function: F) -> Self
    where
        F: FnMut(S::Item) -> Option<U>,
    {
        Self {
            inner,
            function,
            done: false,
        }
    }
}

impl<S, F, U> Sequence for MapWhile<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Option<U>,
{
    type Item = U;

    fn advance(&mut self) -> Option<U> {
        if self.done {
            return None;
        }
        let mapped = self.inner.advance().and_then(&mut self.function);
        self.done = mapped.is_none();
        mapped
    }
}

/// Runs a side effect on each yielded item. See [`Sequence::inspect`].
#[derive(Clone)]
pub struct Inspect<S, F> {
    inner: S,
    function: F,
}

impl<S: Sequence, F: FnMut(&S::Item)> Inspect<S, F> {
    /// Wraps `inner`, calling `function` on each item before yielding it.
    #[inline]
    pub const fn new(inner: S, function: F) -> Self {
        Self { inner, function }
    }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        let item = self.inner.advance()?;
        (self.function)(&item);
        Some(item)
    }
}

/// Copies borrowed items. See [`Sequence::copied`].
#[derive(Debug, Clone)]
pub struct Copied<S> {
    inner: S,
}

impl<S> Copied<S> {
    /// Wraps `inner`, copying every `&T` it yields.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<'a, S, T> Sequence for Copied<S>
where
    S: Sequence<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Option<T> {
        self.inner.advance().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::testing::Probe;
    use crate::sequence::source;
    use rstest::rstest;

    #[rstest]
    fn test_map_transforms_each_item() {
        let mapped: Vec<String> = source::range(1, 4).map(|value| value.to_string()).collect();
        assert_eq!(mapped, vec!["1", "2", "3"]);
    }

    #[rstest]
    fn test_map_is_lazy() {
        let mut probe = Probe::new(vec![1, 2, 3]);
        let mapped = probe.by_ref().map(|value| value + 1);
        drop(mapped);
        assert_eq!(probe.advances, 0);
    }

    #[rstest]
    fn test_map_while_stops_permanently() {
        let mut probe = Probe::new(vec![1, 2, -1, 4, 5]);
        let mut mapped = probe
            .by_ref()
            .map_while(|value: i32| u32::try_from(value).ok());
        assert_eq!(mapped.advance(), Some(1));
        assert_eq!(mapped.advance(), Some(2));
        assert_eq!(mapped.advance(), None);
        assert_eq!(mapped.advance(), None);
        assert_eq!(mapped.advance(), None);
        drop(mapped);
        assert_eq!(probe.advances, 3);
    }

    #[rstest]
    fn test_inspect_sees_only_yielded_items() {
        let mut seen = Vec::new();
        let collected: Vec<i32> = source::range(1, 4)
            .inspect(|value| seen.push(*value))
            .collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_inspect_not_called_on_exhaustion() {
        let mut calls = 0;
        let mut inspected = source::empty::<i32>().inspect(|_| calls += 1);
        assert_eq!(inspected.advance(), None);
        drop(inspected);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_copied_dereferences_items() {
        let data = [4_u8, 5, 6];
        let total: u32 = source::slice(&data).copied().fold(0, |total, value| total + u32::from(value));
        assert_eq!(total, 15);
    }
}
