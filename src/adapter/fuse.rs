use crate::sequence::Sequence;

/// Makes exhaustion permanent. See [`Sequence::fuse`].
///
/// After the inner sequence first returns `None`, every later advance
/// returns `None` without touching the inner sequence.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// // A sequence that starts over after running out.
/// let mut index = 0;
/// let cycling = source::from_fn(move || {
///     index += 1;
///     if index % 3 == 0 { None } else { Some(index) }
/// });
///
/// let mut fused = cycling.fuse();
/// assert_eq!(fused.advance(), Some(1));
/// assert_eq!(fused.advance(), Some(2));
/// assert_eq!(fused.advance(), None);
/// assert_eq!(fused.advance(), None);
/// assert!(fused.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct Fuse<S> {
    inner: S,
    exhausted: bool,
}

impl<S: Sequence> Fuse<S> {
    /// Wraps `inner`.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            exhausted: false,
        }
    }

    /// Returns whether the inner sequence has reported exhaustion.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<S: Sequence> Sequence for Fuse<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.inner.advance();
        self.exhausted = item.is_none();
        item
    }
}
