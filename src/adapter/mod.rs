//! Stateless adapters over sequences.
//!
//! Each adapter owns its inner sequence (or two, for [`Chain`] and [`Zip`])
//! exclusively, together with a closure and whatever small cursor state it
//! needs. Construction never advances the inner sequence; all work happens
//! inside the adapter's own `advance`.
//!
//! Adapters are usually built through the provided methods of
//! [`Sequence`](crate::sequence::Sequence), but every adapter also exposes a
//! public `new` constructor.
//!
//! | Adapter | Behavior |
//! |---|---|
//! | [`Map`] | one-to-one transform |
//! | [`Filter`] | keeps matching items |
//! | [`FilterMap`] | keeps the `Some` results of a transform |
//! | [`MapWhile`] | transforms until the first `None`, then stops for good |
//! | [`Take`] | at most `n` items |
//! | [`TakeWhile`] | items while a predicate holds |
//! | [`Skip`] | drops the first `n` items |
//! | [`SkipWhile`] | drops leading items while a predicate holds |
//! | [`StepBy`] | first item, then every `n`-th |
//! | [`Chain`] | one sequence after another |
//! | [`Zip`] | lockstep pairs |
//! | [`Enumerate`] | pairs with a zero-based index |
//! | [`Scan`] | transform with private mutable state |
//! | [`Intersperse`], [`IntersperseWith`] | separators between items |
//! | [`Inspect`] | side effect on each yielded item |
//! | [`Fuse`] | permanent exhaustion |
//! | [`Copied`] | `&T` to `T` |
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//! use pullseq::adapter::{Filter, Map};
//!
//! let even = Filter::new(source::range(1, 6), |value: &i32| value % 2 == 0);
//! let scaled = Map::new(even, |value| value * 10);
//! assert_eq!(scaled.collect::<Vec<_>>(), vec![20, 40]);
//! ```

mod chain;
mod enumerate;
mod filter;
mod fuse;
mod intersperse;
mod map;
mod skip;
mod take;

pub use chain::{Chain, Zip};
pub use enumerate::{Enumerate, Scan};
pub use filter::{Filter, FilterMap};
pub use fuse::Fuse;
pub use intersperse::{Intersperse, IntersperseWith};
pub use map::{Copied, Inspect, Map, MapWhile};
pub use skip::{Skip, SkipWhile, StepBy};
pub use take::{Take, TakeWhile};
