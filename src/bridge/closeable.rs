use crate::sequence::Sequence;

/// An external, resource-owning pull handle.
///
/// `resume` produces the next item of the external producer. `release` runs
/// the producer's own cleanup. [`Closeable`] guarantees `release` is called
/// exactly once, so implementors do not need to guard against repeats.
pub trait Resumable {
    /// The type of items produced by the handle.
    type Item;

    /// Resumes the producer until it yields its next item or finishes.
    fn resume(&mut self) -> Option<Self::Item>;

    /// Runs the producer's cleanup.
    fn release(&mut self);
}

/// A [`Resumable`] built from a pair of closures. See [`resumable`].
pub struct Callbacks<F, G> {
    resume: F,
    release: Option<G>,
}

impl<T, F, G> Resumable for Callbacks<F, G>
where
    F: FnMut() -> Option<T>,
    G: FnOnce(),
{
    type Item = T;

    #[inline]
    fn resume(&mut self) -> Option<T> {
        (self.resume)()
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Bridges an external producer given as two closures.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use pullseq::prelude::*;
///
/// let cleanups = Cell::new(0);
/// let mut next = 0;
/// let mut bridge = bridge::resumable(
///     || {
///         next += 1;
///         (next <= 3).then_some(next)
///     },
///     || cleanups.set(cleanups.get() + 1),
/// );
///
/// assert_eq!(bridge.advance(), Some(1));
/// bridge.release();
/// bridge.release();
/// assert_eq!(bridge.advance(), None);
/// drop(bridge);
/// assert_eq!(cleanups.get(), 1);
/// ```
pub fn resumable<T, F, G>(resume: F, release: G) -> Closeable<Callbacks<F, G>>
where
    F: FnMut() -> Option<T>,
    G: FnOnce(),
{
    Closeable::new(Callbacks {
        resume,
        release: Some(release),
    })
}

/// A sequence over an external producer, with an idempotent release.
///
/// The bridge is either open or closed. It closes on the first of:
///
/// - the producer reporting that it has no more items
/// - an explicit [`release`](Closeable::release)
/// - being dropped
///
/// The producer's cleanup runs exactly once, on that transition. A closed
/// bridge yields `None` forever and ignores further releases.
///
/// Adapters built on a bridge do not forward release. Compose over
/// [`by_ref`](Sequence::by_ref) and release the bridge itself, or rely on
/// `Drop`.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut values = 0..100;
/// let mut bridge = bridge::resumable(move || values.next(), || {});
/// let head: Vec<i32> = bridge.by_ref().take(3).collect();
/// assert!(!bridge.is_closed());
/// bridge.release();
/// assert_eq!(head, vec![0, 1, 2]);
/// assert!(bridge.is_closed());
/// ```
pub struct Closeable<R: Resumable> {
    handle: R,
    closed: bool,
}

impl<R: Resumable> Closeable<R> {
    /// Opens a bridge over `handle`.
    pub fn new(handle: R) -> Self {
        tracing::debug!("bridge opened");
        Self {
            handle,
            closed: false,
        }
    }

    /// Closes the bridge, running the producer's cleanup if still open.
    ///
    /// Calling this again has no effect.
    pub fn release(&mut self) {
        self.close("released");
    }

    /// Returns whether the bridge is closed.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self, cause: &'static str) {
        if self.closed {
            return;
        }
        self.closed = true;
        tracing::debug!(cause, "bridge closed");
        self.handle.release();
    }
}

impl<R: Resumable> Sequence for Closeable<R> {
    type Item = R::Item;

    fn advance(&mut self) -> Option<R::Item> {
        if self.closed {
            return None;
        }
        let item = self.handle.resume();
        if item.is_none() {
            self.close("exhausted");
        }
        item
    }
}

impl<R: Resumable> Drop for Closeable<R> {
    fn drop(&mut self) {
        self.close("dropped");
    }
}

impl<R: Resumable> std::fmt::Debug for Closeable<R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Closeable")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts resumes and cleanups of a finite producer.
    struct Tracked {
        remaining: u32,
        resumes: Rc<Cell<usize>>,
        cleanups: Rc<Cell<usize>>,
    }

    impl Resumable for Tracked {
        type Item = u32;

        fn resume(&mut self) -> Option<u32> {
            self.resumes.set(self.resumes.get() + 1);
            if self.remaining == 0 {
                return None;
            }
            self.remaining -= 1;
            Some(self.remaining)
        }

        fn release(&mut self) {
            self.cleanups.set(self.cleanups.get() + 1);
        }
    }

    fn tracked(remaining: u32) -> (Closeable<Tracked>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let resumes = Rc::new(Cell::new(0));
        let cleanups = Rc::new(Cell::new(0));
        let bridge = Closeable::new(Tracked {
            remaining,
            resumes: Rc::clone(&resumes),
            cleanups: Rc::clone(&cleanups),
        });
        (bridge, resumes, cleanups)
    }

    #[rstest]
    fn test_release_three_times_cleans_up_once() {
        let (mut bridge, _, cleanups) = tracked(5);
        bridge.release();
        bridge.release();
        bridge.release();
        assert_eq!(cleanups.get(), 1);
        drop(bridge);
        assert_eq!(cleanups.get(), 1);
    }

    #[rstest]
    fn test_advance_after_release_never_resumes() {
        let (mut bridge, resumes, _) = tracked(5);
        assert_eq!(bridge.advance(), Some(4));
        bridge.release();
        for _ in 0..3 {
            assert_eq!(bridge.advance(), None);
        }
        assert_eq!(resumes.get(), 1);
    }

    #[rstest]
    fn test_exhaustion_closes_automatically() {
        let (mut bridge, resumes, cleanups) = tracked(1);
        assert_eq!(bridge.advance(), Some(0));
        assert!(!bridge.is_closed());
        assert_eq!(bridge.advance(), None);
        assert!(bridge.is_closed());
        assert_eq!(cleanups.get(), 1);
        bridge.release();
        assert_eq!(bridge.advance(), None);
        assert_eq!(cleanups.get(), 1);
        assert_eq!(resumes.get(), 2);
    }

    #[rstest]
    fn test_drop_releases_open_bridge() {
        let (bridge, _, cleanups) = tracked(5);
        drop(bridge);
        assert_eq!(cleanups.get(), 1);
    }

    #[rstest]
    fn test_adapter_stopping_does_not_release() {
        let (mut bridge, _, cleanups) = tracked(5);
        let head: Vec<u32> = bridge.by_ref().take(2).collect();
        assert_eq!(head, vec![4, 3]);
        assert_eq!(cleanups.get(), 0);
        assert!(!bridge.is_closed());
        bridge.release();
        assert_eq!(cleanups.get(), 1);
    }

    #[rstest]
    fn test_resumable_callbacks_release_once() {
        let cleanups = Cell::new(0);
        let mut bridge = resumable(|| Some(1), || cleanups.set(cleanups.get() + 1));
        assert_eq!(bridge.advance(), Some(1));
        bridge.release();
        bridge.release();
        drop(bridge);
        assert_eq!(cleanups.get(), 1);
    }
}
