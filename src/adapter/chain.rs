use crate::sequence::Sequence;

/// One sequence after another. See [`Sequence::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    first_exhausted: bool,
}

impl<A: Sequence, B: Sequence<Item = A::Item>> Chain<A, B> {
    /// Yields every item of `first`, then every item of `second`.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_exhausted: false,
        }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn advance(&mut self) -> Option<A::Item> {
        if !self.first_exhausted {
            match self.first.advance() {
                Some(item) => return Some(item),
                None => self.first_exhausted = true,
            }
        }
        self.second.advance()
    }
}

/// Lockstep pairs of two sequences. See [`Sequence::zip`].
///
/// `second` is advanced before `first` on every call, so a `first` that
/// outlives `second` is never advanced past the last pair. As soon as either
/// one is exhausted, the zipped sequence is exhausted for good and neither
/// inner sequence is advanced again. An item already taken from `second` on
/// that final call is dropped.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    first: A,
    second: B,
    done: bool,
}

impl<A: Sequence, B: Sequence> Zip<A, B> {
    /// Pairs the items of `first` and `second`.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            done: false,
        }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let pair = self
            .second
            .advance()
            .and_then(|right| self.first.advance().map(|left| (left, right)));
        self.done = pair.is_none();
        pair
    }
}
