//! Root sequences.
//!
//! Every adapter chain starts from a root: an in-memory cursor, a numeric
//! range, a closure, a standard iterator, or a bridge (see
//! [`crate::bridge`]).
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let values = [3, 1, 2];
//! assert_eq!(source::slice(&values).copied().max(), Some(3));
//! assert_eq!(source::slice_rev(&values).copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//! assert_eq!(source::bytes("hé").count(), 3);
//! assert_eq!(source::chars("hé").count(), 2);
//! ```

use std::marker::PhantomData;

use super::range::{Numeric, RangeSequence};
use super::Sequence;

/// Yields references to the elements of a slice, front to back.
#[derive(Debug, Clone)]
pub struct Slice<'a, T> {
    remaining: &'a [T],
}

impl<'a, T> Sequence for Slice<'a, T> {
    type Item = &'a T;

    #[inline]
    fn advance(&mut self) -> Option<&'a T> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first)
    }
}

/// Yields references to the elements of a slice, back to front.
#[derive(Debug, Clone)]
pub struct SliceRev<'a, T> {
    remaining: &'a [T],
}

impl<'a, T> Sequence for SliceRev<'a, T> {
    type Item = &'a T;

    #[inline]
    fn advance(&mut self) -> Option<&'a T> {
        let (last, rest) = self.remaining.split_last()?;
        self.remaining = rest;
        Some(last)
    }
}

/// Adapts a standard [`Iterator`] into a [`Sequence`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iterator: I,
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Option<I::Item> {
        self.iterator.next()
    }
}

/// A sequence driven by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    function: F,
}

impl<T, F: FnMut() -> Option<T>> Sequence for FromFn<F> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Option<T> {
        (self.function)()
    }
}

/// A sequence with no items.
#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Option<T> {
        None
    }
}

/// A sequence with exactly one item.
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: Option<T>,
}

impl<T> Sequence for Once<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Option<T> {
        self.value.take()
    }
}

/// An infinite sequence of clones of one value.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

/// Returns a sequence over the elements of `data`, front to back.
#[inline]
pub const fn slice<T>(data: &[T]) -> Slice<'_, T> {
    Slice { remaining: data }
}

/// Returns a sequence over the elements of `data`, back to front.
#[inline]
pub const fn slice_rev<T>(data: &[T]) -> SliceRev<'_, T> {
    SliceRev { remaining: data }
}

/// Returns a sequence of the `char` code points of `text`.
///
/// A code point encoded with several bytes is yielded once. Use [`bytes`] to
/// walk the raw UTF-8 encoding instead.
#[inline]
pub fn chars(text: &str) -> FromIter<std::str::Chars<'_>> {
    from_iter(text.chars())
}

/// Returns a sequence of the raw UTF-8 bytes of `text`.
#[inline]
pub fn bytes(text: &str) -> FromIter<std::str::Bytes<'_>> {
    from_iter(text.bytes())
}

/// Returns a sequence counting from `start` (inclusive) to `end` (exclusive)
/// by one. Empty if `end` is not greater than `start`.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(source::range(2, 5).collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[inline]
pub fn range<T: Numeric>(start: T, end: T) -> RangeSequence<T> {
    RangeSequence::new(start, end, T::ONE, false)
}

/// Returns a sequence counting from `start` (inclusive) to `end` (exclusive)
/// by `step`.
///
/// A negative step counts down and is empty if `end` is greater than
/// `start`. A zero step yields `start` forever.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(source::range_by(10, 0, -4).collect::<Vec<_>>(), vec![10, 6, 2]);
/// ```
#[inline]
pub fn range_by<T: Numeric>(start: T, end: T, step: T) -> RangeSequence<T> {
    RangeSequence::new(start, end, step, false)
}

/// Returns a sequence counting from `start` to `end`, both inclusive, by one.
#[inline]
pub fn range_inclusive<T: Numeric>(start: T, end: T) -> RangeSequence<T> {
    RangeSequence::new(start, end, T::ONE, true)
}

/// Returns a sequence counting from `start` to `end`, both inclusive, by
/// `step`. Step semantics follow [`range_by`].
#[inline]
pub fn range_inclusive_by<T: Numeric>(start: T, end: T, step: T) -> RangeSequence<T> {
    RangeSequence::new(start, end, step, true)
}

/// Returns a sequence with no items.
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

/// Returns a sequence yielding `value` once.
#[inline]
pub const fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

/// Returns an infinite sequence of clones of `value`.
#[inline]
pub const fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Returns a sequence that calls `function` on every advance.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut next = 1;
/// let powers: Vec<u32> = source::from_fn(|| {
///     let current = next;
///     next *= 2;
///     (current < 20).then_some(current)
/// })
/// .collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
#[inline]
pub const fn from_fn<T, F>(function: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { function }
}

/// Adapts anything iterable into a sequence.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let total = source::from_iter(vec![1, 2, 3]).fold(0, |total, value| total + value);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    FromIter {
        iterator: iterable.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_slice_yields_references_in_order() {
        let data = vec![String::from("a"), String::from("b")];
        let mut sequence = slice(&data);
        assert_eq!(sequence.advance(), Some(&data[0]));
        assert_eq!(sequence.advance(), Some(&data[1]));
        assert_eq!(sequence.advance(), None);
    }

    #[rstest]
    fn test_slice_rev_yields_back_to_front() {
        let collected: Vec<i32> = slice_rev(&[1, 2, 3]).copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_empty_slices() {
        let data: [i32; 0] = [];
        assert_eq!(slice(&data).advance(), None);
        assert_eq!(slice_rev(&data).advance(), None);
    }

    #[rstest]
    #[case("", 0, 0)]
    #[case("abc", 3, 3)]
    #[case("日本", 2, 6)]
    fn test_chars_and_bytes(#[case] text: &str, #[case] char_count: usize, #[case] byte_count: usize) {
        assert_eq!(chars(text).count(), char_count);
        assert_eq!(bytes(text).count(), byte_count);
    }

    #[rstest]
    fn test_once_yields_single_item() {
        let mut sequence = once(7);
        assert_eq!(sequence.advance(), Some(7));
        assert_eq!(sequence.advance(), None);
    }

    #[rstest]
    fn test_empty_yields_nothing() {
        assert_eq!(empty::<i32>().advance(), None);
    }

    #[rstest]
    fn test_repeat_is_infinite() {
        let collected: Vec<&str> = repeat("x").take(4).collect();
        assert_eq!(collected, vec!["x"; 4]);
    }
}
