//! # pullseq
//!
//! Lazy, pull-based sequences for Rust.
//!
//! ## Overview
//!
//! A [`Sequence`](sequence::Sequence) is a stateful, single-pass producer
//! with one method, `advance`, returning the next item or `None`. On top of
//! it this crate provides:
//!
//! - **Adapters**: lazy, composable transforms (`map`, `filter`, `take`,
//!   `zip`, `scan`, `intersperse`, `fuse`, ...) that never pull from the
//!   inner sequence until they are themselves advanced
//! - **Terminal Operations**: `fold`, `try_fold`, `collect`, `find`, `min`,
//!   `max` and friends, with short-circuiting through [`control::Flow`]
//! - **Bridges**: conversion of push-style generators into closeable
//!   sequences whose cleanup runs exactly once, and back
//!
//! ## Feature Flags
//!
//! - `thread` (default): parked-thread bridge for push-style generators
//! - `async`: conversion to and from `futures` streams
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let words = ["apple", "kiwi", "banana", "fig"];
//! let short: Vec<String> = source::slice(&words)
//!     .filter(|word| word.len() <= 4)
//!     .map(|word| word.to_uppercase())
//!     .collect();
//! assert_eq!(short, vec!["KIWI", "FIG"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`Sequence`](crate::sequence::Sequence) and
/// [`Generator`](crate::bridge::Generator) traits, the
/// [`Flow`](crate::control::Flow) control value, and the `source`,
/// `terminal` and `bridge` modules.
///
/// # Usage
///
/// ```rust
/// use pullseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bridge;
    pub use crate::bridge::Generator;
    pub use crate::control::Flow;
    pub use crate::sequence::{Sequence, source};
    pub use crate::terminal;
}

pub mod adapter;
pub mod bridge;
pub mod control;
pub mod sequence;
pub mod terminal;
