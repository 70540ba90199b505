use std::iter::FusedIterator;

use crate::adapter::Fuse;
use crate::sequence::Sequence;

/// A sequence exposed as a standard [`Iterator`].
///
/// Returned by [`Sequence::into_iterator`]. The sequence is fused, so the
/// iterator satisfies [`FusedIterator`]. Leaving a `for` loop early simply
/// stops pulling; if the sequence is a bridge, release it (or drop it) as
/// usual.
#[derive(Debug, Clone)]
pub struct IntoIter<S> {
    sequence: Fuse<S>,
}

impl<S: Sequence> IntoIter<S> {
    pub(crate) const fn new(sequence: S) -> Self {
        Self {
            sequence: Fuse::new(sequence),
        }
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.sequence.advance()
    }
}

impl<S: Sequence> FusedIterator for IntoIter<S> {}
