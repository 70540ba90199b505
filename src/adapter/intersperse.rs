use crate::sequence::Sequence;

/// Cursor shared by both intersperse adapters.
///
/// A separator is only produced once the item that follows it has been
/// pulled, so there is never a separator before the first item or after the
/// last one.
struct Gap<T> {
    pending: Option<T>,
    needs_separator: bool,
}

impl<T> Gap<T> {
    const fn new() -> Self {
        Self {
            pending: None,
            needs_separator: false,
        }
    }

    fn advance<S, G>(&mut self, inner: &mut S, separator: G) -> Option<T>
    where
        S: Sequence<Item = T>,
        G: FnOnce() -> T,
    {
        if self.needs_separator {
            let next = inner.advance()?;
            self.pending = Some(next);
            self.needs_separator = false;
            return Some(separator());
        }
        let item = match self.pending.take() {
            Some(item) => item,
            None => inner.advance()?,
        };
        self.needs_separator = true;
        Some(item)
    }
}

/// Places a clone of a separator between adjacent items. See
/// [`Sequence::intersperse`].
pub struct Intersperse<S: Sequence> {
    inner: S,
    separator: S::Item,
    gap: Gap<S::Item>,
}

impl<S: Sequence> Intersperse<S>
where
    S::Item: Clone,
{
    /// Wraps `inner`, separating its items with clones of `separator`.
    #[inline]
    pub const fn new(inner: S, separator: S::Item) -> Self {
        Self {
            inner,
            separator,
            gap: Gap::new(),
        }
    }
}

impl<S: Sequence> Sequence for Intersperse<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        let separator = &self.separator;
        self.gap.advance(&mut self.inner, || separator.clone())
    }
}

/// Places the result of a closure between adjacent items. See
/// [`Sequence::intersperse_with`].
///
/// The closure runs once per separator actually yielded.
pub struct IntersperseWith<S: Sequence, G> {
    inner: S,
    separator: G,
    gap: Gap<S::Item>,
}

impl<S: Sequence, G: FnMut() -> S::Item> IntersperseWith<S, G> {
    /// Wraps `inner`, separating its items with the results of `separator`.
    #[inline]
    pub const fn new(inner: S, separator: G) -> Self {
        Self {
            inner,
            separator,
            gap: Gap::new(),
        }
    }
}

impl<S, G> Sequence for IntersperseWith<S, G>
where
    S: Sequence,
    G: FnMut() -> S::Item,
{
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        self.gap.advance(&mut self.inner, &mut self.separator)
    }
}
