use crate::sequence::Sequence;

/// Pairs every item with its zero-based index. See [`Sequence::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    inner: S,
    index: usize,
}

impl<S: Sequence> Enumerate<S> {
    /// Wraps `inner`, counting from zero.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner, index: 0 }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    #[inline]
    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.inner.advance()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }
}

/// Threads private mutable state through a function. See [`Sequence::scan`].
///
/// The function both updates the state in place and decides whether the
/// current advance yields a value. A `None` result only affects that one
/// advance; the next advance pulls the next inner item again. The adapter
/// is exhausted only when the inner sequence is.
#[derive(Clone)]
pub struct Scan<S, St, F> {
    inner: S,
    state: St,
    function: F,
}

impl<S: Sequence, St, F> Scan<S, St, F> {
    /// Wraps `inner` with initial `state` and step `function`.
    #[inline]
    pub fn new<U>(inner: S, state: St, function: F) -> Self
    where
        F: FnMut(&mut St, S::Item) -> Option<U>,
    {
        Self {
            inner,
            state,
            function,
        }
    }
}

impl<S, St, F, U> Sequence for Scan<S, St, F>
where
    S: Sequence,
    F: FnMut(&mut St, S::Item) -> Option<U>,
{
    type Item = U;

    #[inline]
    fn advance(&mut self) -> Option<U> {
        let item = self.inner.advance()?;
        (self.function)(&mut self.state, item)
    }
}
