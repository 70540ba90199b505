//! Bridges between sequences and external producers.
//!
//! This module converts push-style and externally owned producers into
//! sequences, and sequences back into other iteration protocols:
//!
//! - [`Closeable`]: a sequence over a [`Resumable`] handle, with an
//!   idempotent [`release`](Closeable::release) that runs the producer's
//!   cleanup exactly once (on exhaustion, explicit release, or drop)
//! - [`pull`] / [`Builder`]: a push-style [`Generator`] parked on its own
//!   thread and resumed one item at a time (feature `thread`)
//! - [`push`]: the inverse, a sequence driven as a push-style [`Generator`]
//! - [`IntoIter`]: a sequence as a standard [`Iterator`]
//! - [`from_stream`]: a `futures` stream pulled by blocking (feature
//!   `async`); see also `Sequence::into_stream`
//!
//! A bridge is the only sequence that owns a resource. Adapters layered on
//! top of it never release it, so compose over
//! [`by_ref`](crate::sequence::Sequence::by_ref) and keep the bridge handle
//! for the release.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! # fn main() -> Result<(), bridge::BridgeError> {
//! let lines = bridge::generator_fn(|sink: &mut dyn FnMut(String) -> bool| {
//!     for number in 1.. {
//!         if !sink(format!("line {number}")) {
//!             break;
//!         }
//!     }
//! });
//!
//! let mut bridge = bridge::pull(lines)?;
//! let first_two: Vec<String> = bridge.by_ref().take(2).collect();
//! bridge.release();
//!
//! assert_eq!(first_two, vec!["line 1", "line 2"]);
//! assert!(bridge.is_closed());
//! # Ok(())
//! # }
//! ```

mod closeable;
mod error;
mod generator;
mod iter;
#[cfg(feature = "thread")]
mod parked;
#[cfg(feature = "async")]
mod stream;

pub use closeable::{Callbacks, Closeable, Resumable, resumable};
pub use error::BridgeError;
pub use generator::{Generator, GeneratorFn, Pushed, generator_fn, push};
pub use iter::IntoIter;
#[cfg(feature = "thread")]
pub use parked::{Builder, Parked, pull};
#[cfg(feature = "async")]
pub use stream::{Blocking, from_stream};

static_assertions::assert_not_impl_any!(Closeable<Callbacks<fn() -> Option<i32>, fn()>>: Clone, Copy);
