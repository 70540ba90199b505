//! The sequence protocol.
//!
//! This module provides the [`Sequence`] trait, the single-method pull
//! contract that every producer in this crate implements, together with the
//! root sequences in [`source`].
//!
//! A sequence is stateful and single-pass: each call to
//! [`advance`](Sequence::advance) mutates it and returns either the next item
//! or `None` once there are no more items.
//!
//! # Exhaustion
//!
//! After a plain sequence returns `None` for the first time, nothing is
//! guaranteed about later calls. It may keep returning `None`, start over, or
//! panic. Callers that need "exhausted is permanent" must wrap the sequence
//! with [`fuse`](Sequence::fuse).
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let result: Vec<i32> = source::slice(&[1, 2, 3, 4, 5])
//!     .copied()
//!     .filter(|value| value % 2 == 0)
//!     .map(|value| value * 10)
//!     .collect();
//! assert_eq!(result, vec![20, 40]);
//! ```

pub mod source;

mod range;

pub use range::{Numeric, RangeSequence};

use std::cmp::Ordering;

use crate::adapter::{
    Chain, Copied, Enumerate, Filter, FilterMap, Fuse, Inspect, Intersperse, IntersperseWith,
    Map, MapWhile, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
};
use crate::bridge::IntoIter;
use crate::control::Flow;
use crate::terminal;

/// A stateful, single-pass, pull-based producer of items.
///
/// Implementors provide only [`advance`](Sequence::advance). Every adapter
/// and terminal operation is available as a provided method.
///
/// Adapters are lazy: constructing one never advances the inner sequence.
/// Work happens only when the outermost sequence is advanced, usually by a
/// terminal operation such as [`fold`](Sequence::fold) or
/// [`collect`](Sequence::collect).
///
/// # Laws
///
/// - **Laziness**: `sequence.map(f)` performs no inner `advance` until the
///   adapter itself is advanced.
/// - **Order**: adapters preserve the relative order of the items that pass
///   through them.
///
/// # Examples
///
/// ```rust
/// use pullseq::sequence::Sequence;
///
/// struct Countdown {
///     remaining: u32,
/// }
///
/// impl Sequence for Countdown {
///     type Item = u32;
///
///     fn advance(&mut self) -> Option<u32> {
///         if self.remaining == 0 {
///             return None;
///         }
///         self.remaining -= 1;
///         Some(self.remaining + 1)
///     }
/// }
///
/// let collected: Vec<u32> = Countdown { remaining: 3 }.collect();
/// assert_eq!(collected, vec![3, 2, 1]);
/// ```
pub trait Sequence {
    /// The type of items produced by this sequence.
    type Item;

    /// Advances the sequence and returns the next item.
    ///
    /// Returns `None` when the sequence has no more items. See the module
    /// documentation for what may happen after the first `None`.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Borrows the sequence so adapters can be applied without giving it up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut sequence = source::range(0, 6);
    /// let head: Vec<i32> = sequence.by_ref().take(2).collect();
    /// let tail: Vec<i32> = sequence.collect();
    /// assert_eq!(head, vec![0, 1]);
    /// assert_eq!(tail, vec![2, 3, 4, 5]);
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    // =========================================================================
    // Adapters
    // =========================================================================

    /// Applies `function` to every item, one to one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let doubled: Vec<i32> = source::range(1, 4).map(|value| value * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Yields only the items for which `predicate` returns `true`.
    ///
    /// Each advance may scan arbitrarily many inner items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let even: Vec<i32> = source::range(1, 7).filter(|value| value % 2 == 0).collect();
    /// assert_eq!(even, vec![2, 4, 6]);
    /// ```
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Filters and maps in one step, keeping the `Some` results of `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let parsed: Vec<i32> = source::slice(&["1", "x", "3"])
    ///     .filter_map(|text| text.parse::<i32>().ok())
    ///     .collect();
    /// assert_eq!(parsed, vec![1, 3]);
    /// ```
    #[inline]
    fn filter_map<U, F>(self, function: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, function)
    }

    /// Maps items until `function` returns `None` for the first time, then
    /// stops permanently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let prefix: Vec<i32> = source::slice(&[1, 2, -1, 4])
    ///     .map_while(|value| u8::try_from(*value).ok().map(i32::from))
    ///     .collect();
    /// assert_eq!(prefix, vec![1, 2]);
    /// ```
    #[inline]
    fn map_while<U, F>(self, function: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        MapWhile::new(self, function)
    }

    /// Yields at most `count` items.
    #[inline]
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Yields items while `predicate` holds. The first failing item is
    /// consumed from the inner sequence and lost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let small: Vec<i32> = source::range(1, 10).take_while(|value| *value < 4).collect();
    /// assert_eq!(small, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips the first `count` items, eagerly, on the first advance.
    #[inline]
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Skips leading items while `predicate` holds; never resumes skipping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let rest: Vec<i32> = source::slice(&[1, 1, 5, 1])
    ///     .copied()
    ///     .skip_while(|value| *value == 1)
    ///     .collect();
    /// assert_eq!(rest, vec![5, 1]);
    /// ```
    #[inline]
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields the first item, then every `step`-th item after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let odd: Vec<i32> = source::range(1, 6).step_by(2).collect();
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    #[inline]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Yields every item of `self`, then every item of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let joined: Vec<i32> = source::range(1, 3).chain(source::range(3, 6)).take(4).collect();
    /// assert_eq!(joined, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Pairs items of `self` and `other` in lockstep; the first exhaustion
    /// ends the zipped sequence for good.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let pairs: Vec<(i32, char)> = source::range(1, 4).zip(source::chars("ab")).collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    /// ```
    #[inline]
    fn zip<S>(self, other: S) -> Zip<Self, S>
    where
        Self: Sized,
        S: Sequence,
    {
        Zip::new(self, other)
    }

    /// Pairs every item with its zero-based index.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Threads private mutable `state` through `function`.
    ///
    /// Unlike [`map_while`](Sequence::map_while), a `None` from `function`
    /// only affects that one advance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let running: Vec<i32> = source::range(1, 5)
    ///     .scan(0, |total, value| {
    ///         *total += value;
    ///         Some(*total)
    ///     })
    ///     .collect();
    /// assert_eq!(running, vec![1, 3, 6, 10]);
    /// ```
    #[inline]
    fn scan<St, U, F>(self, state: St, function: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> Option<U>,
    {
        Scan::new(self, state, function)
    }

    /// Places a clone of `separator` between adjacent items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let spaced: String = source::chars("abc").intersperse('-').collect();
    /// assert_eq!(spaced, "a-b-c");
    /// ```
    #[inline]
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Places the result of `separator()` between adjacent items.
    #[inline]
    fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
    where
        Self: Sized,
        G: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Calls `function` on each item about to be yielded.
    #[inline]
    fn inspect<F>(self, function: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, function)
    }

    /// Makes exhaustion permanent: after the first `None`, the inner
    /// sequence is never advanced again.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Copies borrowed items, turning a sequence of `&T` into one of `T`.
    #[inline]
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Sequence<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied::new(self)
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Folds every item into an accumulator. See [`terminal::fold`].
    #[inline]
    fn fold<A, F>(mut self, init: A, function: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        terminal::fold(&mut self, init, function)
    }

    /// Folds until `function` returns [`Flow::Stop`]. See [`terminal::try_fold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut sequence = source::range(1, 10);
    /// let outcome = sequence.try_fold(0, |total, value| {
    ///     if total + value > 5 { Flow::Stop(total) } else { Flow::Continue(total + value) }
    /// });
    /// assert_eq!(outcome, Flow::Stop(3));
    /// assert_eq!(sequence.advance(), Some(4));
    /// ```
    #[inline]
    fn try_fold<A, R, F>(&mut self, init: A, function: F) -> Flow<A, R>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> Flow<A, R>,
    {
        terminal::try_fold(self, init, function)
    }

    /// Calls `function` on every item.
    #[inline]
    fn for_each<F>(mut self, function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        terminal::for_each(&mut self, function);
    }

    /// Calls `function` on items until it returns [`Flow::Stop`].
    #[inline]
    fn try_for_each<R, F>(&mut self, function: F) -> Flow<(), R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Flow<(), R>,
    {
        terminal::try_for_each(self, function)
    }

    /// Collects every item into a new container.
    #[inline]
    fn collect<C>(mut self) -> C
    where
        Self: Sized,
        C: Default + Extend<Self::Item>,
    {
        terminal::collect(&mut self)
    }

    /// Appends every item to `container` and returns it.
    #[inline]
    fn collect_into<C>(mut self, container: &mut C) -> &mut C
    where
        Self: Sized,
        C: Extend<Self::Item>,
    {
        terminal::collect_into(&mut self, container)
    }

    /// Collects a sequence of results, stopping at the first `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let parsed: Result<Vec<i32>, _> = source::slice(&["1", "2", "x", "4"])
    ///     .map(|text| text.parse::<i32>())
    ///     .try_collect();
    /// assert!(parsed.is_err());
    /// ```
    #[inline]
    fn try_collect<T, E, C>(&mut self) -> Result<C, E>
    where
        Self: Sized + Sequence<Item = Result<T, E>>,
        C: Default + Extend<T>,
    {
        terminal::try_collect(self)
    }

    /// Splits the items into two containers by `predicate`, in one pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let (even, odd): (Vec<i32>, Vec<i32>) = source::slice(&[2, 1, 5, 3, 4])
    ///     .copied()
    ///     .partition(|value| value % 2 == 0);
    /// assert_eq!(even, vec![2, 4]);
    /// assert_eq!(odd, vec![1, 5, 3]);
    /// ```
    #[inline]
    fn partition<C, P>(mut self, predicate: P) -> (C, C)
    where
        Self: Sized,
        C: Default + Extend<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::partition(&mut self, predicate)
    }

    /// Splits a sequence of pairs into two containers, in one pass.
    #[inline]
    fn unzip<A, B, CA, CB>(mut self) -> (CA, CB)
    where
        Self: Sized + Sequence<Item = (A, B)>,
        CA: Default + Extend<A>,
        CB: Default + Extend<B>,
    {
        terminal::unzip(&mut self)
    }

    /// Returns the first item matching `predicate`, short-circuiting.
    #[inline]
    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::find(self, predicate)
    }

    /// Returns the index of the first item matching `predicate`.
    #[inline]
    fn position<P>(&mut self, predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        terminal::position(self, predicate)
    }

    /// Returns the item at zero-based index `index`, discarding those before it.
    #[inline]
    fn nth(&mut self, index: usize) -> Option<Self::Item> {
        terminal::nth(self, index)
    }

    /// Advances `count` times; `Err(k)` reports that only `k` items existed.
    #[inline]
    fn advance_by(&mut self, count: usize) -> Result<(), usize> {
        terminal::advance_by(self, count)
    }

    /// Counts the items, consuming the sequence.
    #[inline]
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        terminal::count(&mut self)
    }

    /// Returns the final item.
    #[inline]
    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        terminal::last(&mut self)
    }

    /// Returns `true` if every item matches; `true` for an empty sequence.
    #[inline]
    fn all<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        terminal::all(self, predicate)
    }

    /// Returns `true` if some item matches; `false` for an empty sequence.
    #[inline]
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        terminal::any(self, predicate)
    }

    /// Returns the minimum item; the first of several equal minima.
    #[inline]
    fn min(mut self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        terminal::min(&mut self)
    }

    /// Returns the maximum item; the last of several equal maxima.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let tagged = [(2, 'a'), (1, 'b'), (2, 'c')];
    /// let largest = source::slice(&tagged).max_by_key(|pair| pair.0);
    /// assert_eq!(largest, Some(&(2, 'c')));
    /// ```
    #[inline]
    fn max(mut self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        terminal::max(&mut self)
    }

    /// Returns the minimum item under `compare`; the first of equal minima.
    #[inline]
    fn min_by<F>(mut self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        terminal::min_by(&mut self, compare)
    }

    /// Returns the maximum item under `compare`; the last of equal maxima.
    #[inline]
    fn max_by<F>(mut self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        terminal::max_by(&mut self, compare)
    }

    /// Returns the item with the minimum key; the first of equal minima.
    #[inline]
    fn min_by_key<K, F>(mut self, key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        terminal::min_by_key(&mut self, key)
    }

    /// Returns the item with the maximum key; the last of equal maxima.
    #[inline]
    fn max_by_key<K, F>(mut self, key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        terminal::max_by_key(&mut self, key)
    }

    // =========================================================================
    // Interoperability
    // =========================================================================

    /// Exposes the sequence as a standard [`Iterator`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// for value in source::range(1, 100).into_iterator() {
    ///     if value > 3 {
    ///         break;
    ///     }
    ///     seen.push(value);
    /// }
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn into_iterator(self) -> IntoIter<Self>
    where
        Self: Sized,
    {
        IntoIter::new(self)
    }

    /// Exposes the sequence as a [`futures::Stream`].
    #[cfg(feature = "async")]
    #[inline]
    fn into_stream(self) -> futures::stream::Iter<IntoIter<Self>>
    where
        Self: Sized,
    {
        futures::stream::iter(self.into_iterator())
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}
