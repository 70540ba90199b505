use std::marker::PhantomData;

use crate::control::Flow;
use crate::sequence::Sequence;
use crate::terminal;

/// A push-style producer.
///
/// `run` hands items to `sink` one at a time. When `sink` returns `false`
/// the consumer wants no more items: the generator must stop yielding, run
/// its cleanup, and return.
pub trait Generator {
    /// The type of items pushed to the sink.
    type Item;

    /// Pushes items into `sink` until done or until `sink` returns `false`.
    fn run(self, sink: &mut dyn FnMut(Self::Item) -> bool);
}

/// A [`Generator`] wrapping a closure. See [`generator_fn`].
pub struct GeneratorFn<T, F> {
    function: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> Generator for GeneratorFn<T, F>
where
    F: FnOnce(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    #[inline]
    fn run(self, sink: &mut dyn FnMut(T) -> bool) {
        (self.function)(sink);
    }
}

/// Builds a [`Generator`] from a closure taking the sink.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let squares = bridge::generator_fn(|sink: &mut dyn FnMut(u32) -> bool| {
///     for value in 1..=4 {
///         if !sink(value * value) {
///             return;
///         }
///     }
/// });
///
/// let mut received = Vec::new();
/// squares.run(&mut |item| {
///     received.push(item);
///     item < 4
/// });
/// assert_eq!(received, vec![1, 4]);
/// ```
pub const fn generator_fn<T, F>(function: F) -> GeneratorFn<T, F>
where
    F: FnOnce(&mut dyn FnMut(T) -> bool),
{
    GeneratorFn {
        function,
        marker: PhantomData,
    }
}

/// A sequence exposed as a push-style producer. See [`push`].
#[derive(Debug, Clone)]
pub struct Pushed<S> {
    sequence: S,
}

impl<S: Sequence> Pushed<S> {
    /// Returns the wrapped sequence without driving it.
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S: Sequence> Generator for Pushed<S> {
    type Item = S::Item;

    fn run(mut self, sink: &mut dyn FnMut(S::Item) -> bool) {
        let _ = terminal::try_for_each(&mut self.sequence, |item| {
            if sink(item) {
                Flow::Continue(())
            } else {
                Flow::Stop(())
            }
        });
    }
}

/// Exposes `sequence` as a push-style producer.
///
/// Running it advances `sequence` until it is exhausted or the sink returns
/// `false`. The sink stopping is the only cancellation; `Pushed` owns no
/// resource of its own.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seen = Vec::new();
/// bridge::push(source::range(1, 100)).run(&mut |value| {
///     seen.push(value);
///     value < 3
/// });
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub const fn push<S: Sequence>(sequence: S) -> Pushed<S> {
    Pushed { sequence }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::testing::Probe;
    use crate::sequence::source;
    use rstest::rstest;

    #[rstest]
    fn test_push_drains_when_sink_accepts_everything() {
        let mut received = Vec::new();
        push(source::chars("abc")).run(&mut |character| {
            received.push(character);
            true
        });
        assert_eq!(received, vec!['a', 'b', 'c']);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(4, 4)]
    fn test_push_stops_when_sink_declines(#[case] accepted: usize, #[case] expected_advances: usize) {
        let mut probe = Probe::new(vec![10, 20, 30, 40, 50]);
        let mut received = 0;
        push(probe.by_ref()).run(&mut |_| {
            received += 1;
            received < accepted
        });
        assert_eq!(received, accepted);
        assert_eq!(probe.advances, expected_advances);
    }

    #[rstest]
    fn test_push_of_empty_sequence_never_calls_sink() {
        let mut called = false;
        push(source::empty::<i32>()).run(&mut |_| {
            called = true;
            true
        });
        assert!(!called);
    }

    #[rstest]
    fn test_generator_fn_observes_decline() {
        let mut cleaned_up = false;
        generator_fn(|sink: &mut dyn FnMut(i32) -> bool| {
            let _ = sink(1) && sink(2);
            cleaned_up = true;
        })
        .run(&mut |value| value < 1);
        assert!(cleaned_up);
    }
}
