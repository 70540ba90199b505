//! Flow type - the continue/stop signal for short-circuiting folds.
//!
//! This module provides the `Flow<C, B>` type, which is returned by the step
//! function of [`try_fold`](crate::terminal::try_fold) and by `try_fold`
//! itself. It is either:
//!
//! - `Continue(C)`: keep folding, carrying the next accumulator
//! - `Stop(B)`: stop immediately, carrying the final payload
//!
//! Once a step function produces `Stop`, the driving loop returns without
//! advancing the sequence again.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::control::Flow;
//!
//! let keep_going: Flow<i32, String> = Flow::Continue(42);
//! let finished: Flow<i32, String> = Flow::Stop("found".to_string());
//!
//! assert!(keep_going.is_continue());
//! assert!(finished.is_stop());
//!
//! let description = finished.fold(
//!     |accumulator| format!("still folding at {accumulator}"),
//!     |payload| format!("stopped: {payload}"),
//! );
//! assert_eq!(description, "stopped: found");
//! ```

use std::fmt;
use std::ops::ControlFlow;

/// A two-variant signal used to drive or abort a fold.
///
/// `Flow<C, B>` is either `Continue(C)` (the fold goes on with accumulator
/// `C`) or `Stop(B)` (the fold ends with payload `B`).
///
/// # Type Parameters
///
/// * `C` - The accumulator carried while the fold continues
/// * `B` - The payload carried when the fold stops early
///
/// # Examples
///
/// ```rust
/// use pullseq::control::Flow;
///
/// let step: Flow<i32, &str> = Flow::Continue(1);
/// assert_eq!(step.map_continue(|accumulator| accumulator + 1), Flow::Continue(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flow<C, B> {
    /// Keep folding with the carried accumulator.
    Continue(C),
    /// Stop folding with the carried payload.
    Stop(B),
}

impl<C, B> Flow<C, B> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Continue` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// let step: Flow<i32, ()> = Flow::Continue(3);
    /// assert!(step.is_continue());
    /// ```
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` if this is a `Stop` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// let step: Flow<(), i32> = Flow::Stop(3);
    /// assert!(step.is_stop());
    /// ```
    #[inline]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Self::Stop(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the flow into `Some(accumulator)` if it continues.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// assert_eq!(Flow::<i32, ()>::Continue(1).continue_value(), Some(1));
    /// assert_eq!(Flow::<i32, ()>::Stop(()).continue_value(), None);
    /// ```
    #[inline]
    pub fn continue_value(self) -> Option<C> {
        match self {
            Self::Continue(value) => Some(value),
            Self::Stop(_) => None,
        }
    }

    /// Converts the flow into `Some(payload)` if it stopped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// assert_eq!(Flow::<(), i32>::Stop(7).stop_value(), Some(7));
    /// assert_eq!(Flow::<(), i32>::Continue(()).stop_value(), None);
    /// ```
    #[inline]
    pub fn stop_value(self) -> Option<B> {
        match self {
            Self::Continue(_) => None,
            Self::Stop(value) => Some(value),
        }
    }

    /// Returns the accumulator, or `default` if the flow stopped.
    #[inline]
    pub fn unwrap_continue_or(self, default: C) -> C {
        match self {
            Self::Continue(value) => value,
            Self::Stop(_) => default,
        }
    }

    /// Returns the stop payload, or `default` if the flow continued.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// let never_stopped: Flow<(), Option<i32>> = Flow::Continue(());
    /// assert_eq!(never_stopped.unwrap_stop_or(None), None);
    /// ```
    #[inline]
    pub fn unwrap_stop_or(self, default: B) -> B {
        match self {
            Self::Continue(_) => default,
            Self::Stop(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the accumulator if the flow continues.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// let step: Flow<i32, String> = Flow::Continue(20);
    /// assert_eq!(step.map_continue(|value| value + 22), Flow::Continue(42));
    /// ```
    #[inline]
    pub fn map_continue<T, F>(self, function: F) -> Flow<T, B>
    where
        F: FnOnce(C) -> T,
    {
        match self {
            Self::Continue(value) => Flow::Continue(function(value)),
            Self::Stop(value) => Flow::Stop(value),
        }
    }

    /// Applies a function to the payload if the flow stopped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// let step: Flow<i32, &str> = Flow::Stop("abc");
    /// assert_eq!(step.map_stop(str::len), Flow::Stop(3));
    /// ```
    #[inline]
    pub fn map_stop<T, F>(self, function: F) -> Flow<C, T>
    where
        F: FnOnce(B) -> T,
    {
        match self {
            Self::Continue(value) => Flow::Continue(value),
            Self::Stop(value) => Flow::Stop(function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the flow by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// let step: Flow<i32, i32> = Flow::Stop(5);
    /// assert_eq!(step.fold(|value| value * 2, |value| value * 10), 50);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, continue_function: F, stop_function: G) -> T
    where
        F: FnOnce(C) -> T,
        G: FnOnce(B) -> T,
    {
        match self {
            Self::Continue(value) => continue_function(value),
            Self::Stop(value) => stop_function(value),
        }
    }
}

impl<T> Flow<T, T> {
    /// Returns the carried value regardless of the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    ///
    /// assert_eq!(Flow::<i32, i32>::Continue(1).into_inner(), 1);
    /// assert_eq!(Flow::<i32, i32>::Stop(2).into_inner(), 2);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Continue(value) | Self::Stop(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<C: fmt::Debug, B: fmt::Debug> fmt::Debug for Flow<C, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue(value) => formatter.debug_tuple("Continue").field(value).finish(),
            Self::Stop(value) => formatter.debug_tuple("Stop").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<C, B> From<ControlFlow<B, C>> for Flow<C, B> {
    /// Converts a standard `ControlFlow` into a `Flow`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::control::Flow;
    /// use std::ops::ControlFlow;
    ///
    /// let flow: Flow<i32, &str> = ControlFlow::Break("done").into();
    /// assert_eq!(flow, Flow::Stop("done"));
    /// ```
    #[inline]
    fn from(control: ControlFlow<B, C>) -> Self {
        match control {
            ControlFlow::Continue(value) => Self::Continue(value),
            ControlFlow::Break(value) => Self::Stop(value),
        }
    }
}

impl<C, B> From<Flow<C, B>> for ControlFlow<B, C> {
    /// Converts a `Flow` into a standard `ControlFlow`.
    #[inline]
    fn from(flow: Flow<C, B>) -> Self {
        match flow {
            Flow::Continue(value) => Self::Continue(value),
            Flow::Stop(value) => Self::Break(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_flow_continue_construction() {
        let flow: Flow<i32, String> = Flow::Continue(42);
        assert!(flow.is_continue());
        assert!(!flow.is_stop());
    }

    #[rstest]
    fn test_flow_stop_construction() {
        let flow: Flow<i32, String> = Flow::Stop("halt".to_string());
        assert!(flow.is_stop());
        assert!(!flow.is_continue());
    }

    #[rstest]
    #[case(Flow::Continue(3), Some(3), None)]
    #[case(Flow::Stop(4), None, Some(4))]
    fn test_flow_value_extraction(
        #[case] flow: Flow<i32, i32>,
        #[case] expected_continue: Option<i32>,
        #[case] expected_stop: Option<i32>,
    ) {
        assert_eq!(flow.continue_value(), expected_continue);
        assert_eq!(flow.stop_value(), expected_stop);
    }

    #[rstest]
    fn test_flow_unwrap_defaults() {
        assert_eq!(Flow::<i32, ()>::Stop(()).unwrap_continue_or(9), 9);
        assert_eq!(Flow::<(), i32>::Continue(()).unwrap_stop_or(9), 9);
    }

    #[rstest]
    fn test_control_flow_conversion_preserves_variant() {
        let flow: Flow<i32, String> = ControlFlow::Continue(1).into();
        assert_eq!(flow, Flow::Continue(1));

        let control: ControlFlow<String, i32> = Flow::Stop("x".to_string()).into();
        assert_eq!(control, ControlFlow::Break("x".to_string()));
    }

    #[rstest]
    fn test_flow_debug_format() {
        assert_eq!(format!("{:?}", Flow::<i32, ()>::Continue(1)), "Continue(1)");
        assert_eq!(format!("{:?}", Flow::<(), i32>::Stop(2)), "Stop(2)");
    }
}
