//! Control values for short-circuiting traversals.
//!
//! - [`Flow`]: either keep going with an accumulator, or stop with a payload
//!
//! `Flow` is what the step function of
//! [`try_fold`](crate::sequence::Sequence::try_fold) returns. A `Stop` ends
//! the traversal without advancing the sequence again, and the payload is
//! handed back to the caller as an ordinary return value.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! // Sum until the running total would exceed a budget.
//! let outcome = source::range(1, 100).try_fold(0, |total, value| {
//!     let next = total + value;
//!     if next > 10 { Flow::Stop(total) } else { Flow::Continue(next) }
//! });
//! assert_eq!(outcome, Flow::Stop(10));
//! ```

mod flow;

pub use flow::Flow;
