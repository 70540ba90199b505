//! Terminal operations.
//!
//! A terminal operation borrows a sequence for the duration of the call and
//! drives it to a final, non-sequence value. Everything here is built on two
//! primitives:
//!
//! - [`fold`]: advances until exhaustion, threading an accumulator
//! - [`try_fold`]: like `fold`, but the step function returns a
//!   [`Flow`](crate::control::Flow) and a `Stop` ends the fold immediately,
//!   without advancing the sequence again
//!
//! Operations that can answer early ([`find`], [`all`], [`any`],
//! [`try_collect`], ...) short-circuit and leave the rest of the sequence
//! untouched, so the caller can keep consuming it.
//!
//! The same operations are available as provided methods of
//! [`Sequence`](crate::sequence::Sequence).
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut sequence = source::range(1, 10);
//! assert_eq!(terminal::find(&mut sequence, |value| value % 4 == 0), Some(4));
//! assert_eq!(terminal::count(&mut sequence), 5);
//! ```

mod collect;
mod extremum;
mod fold;
mod search;

pub use collect::{collect, collect_into, partition, try_collect, unzip};
pub use extremum::{max, max_by, max_by_key, min, min_by, min_by_key};
pub use fold::{count, fold, for_each, last, try_fold, try_for_each};
pub use search::{advance_by, all, any, find, nth, position};
