use crate::sequence::Sequence;
use crate::terminal;

/// Skips a fixed number of leading items. See [`Sequence::skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    inner: S,
    pending: usize,
}

impl<S: Sequence> Skip<S> {
    /// Wraps `inner`, dropping its first `count` items on the first advance.
    #[inline]
    pub const fn new(inner: S, count: usize) -> Self {
        Self {
            inner,
            pending: count,
        }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        match std::mem::take(&mut self.pending) {
            0 => self.inner.advance(),
            count => terminal::nth(&mut self.inner, count),
        }
    }
}

/// Skips leading items while a predicate holds. See [`Sequence::skip_while`].
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    inner: S,
    predicate: P,
    skipped: bool,
}

impl<S: Sequence, P: FnMut(&S::Item) -> bool> SkipWhile<S, P> {
    /// Wraps `inner`, dropping leading items for which `predicate` holds.
    #[inline]
    pub const fn new(inner: S, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            skipped: false,
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<S::Item> {
        if self.skipped {
            return self.inner.advance();
        }
        while let Some(item) = self.inner.advance() {
            if !(self.predicate)(&item) {
                self.skipped = true;
                return Some(item);
            }
        }
        None
    }
}

/// Yields the first item and then every `step`-th one. See
/// [`Sequence::step_by`].
#[derive(Debug, Clone)]
pub struct StepBy<S> {
    inner: S,
    step: usize,
    started: bool,
}

impl<S: Sequence> StepBy<S> {
    /// Wraps `inner`, stepping by `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[inline]
    pub fn new(inner: S, step: usize) -> Self {
        assert!(step != 0, "step_by requires a non-zero step");
        Self {
            inner,
            step,
            started: false,
        }
    }
}

impl<S: Sequence> Sequence for StepBy<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        if self.started {
            terminal::nth(&mut self.inner, self.step - 1)
        } else {
            self.started = true;
            self.inner.advance()
        }
    }
}
