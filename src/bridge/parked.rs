//! Push-to-pull conversion on a parked thread.
//!
//! The generator runs on its own thread but never concurrently with the
//! consumer: both sides share one handoff slot and take strict turns. The
//! consumer demands an item and waits; the generator produces it into the
//! slot and waits for the next demand (or for cancellation).

use std::any::Any;
use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex, MutexGuard};

use super::closeable::{Closeable, Resumable};
use super::error::BridgeError;
use super::generator::Generator;

const DEFAULT_THREAD_NAME: &str = "pullseq-generator";

/// State of the handoff slot.
enum Exchange<T> {
    /// Nobody has asked for an item yet.
    Waiting,
    /// The consumer is waiting for the next item.
    Demanded,
    /// The generator produced an item and is waiting for the next demand.
    Yielded(T),
    /// The generator returned.
    Finished,
    /// The consumer released the bridge; every pending or later yield is declined.
    Cancelled,
    /// The generator panicked.
    Panicked(Box<dyn Any + Send>),
}

struct Handoff<T> {
    slot: Mutex<Exchange<T>>,
    signal: Condvar,
}

impl<T> Handoff<T> {
    const fn new() -> Self {
        Self {
            slot: Mutex::new(Exchange::Waiting),
            signal: Condvar::new(),
        }
    }

    /// Blocks the generator until the consumer demands an item or cancels.
    ///
    /// Returns `false` on cancellation.
    fn await_demand(&self, slot: &mut MutexGuard<'_, Exchange<T>>) -> bool {
        loop {
            match **slot {
                Exchange::Demanded => return true,
                Exchange::Cancelled => return false,
                _ => self.signal.wait(slot),
            }
        }
    }

    /// The sink handed to the generator.
    fn deliver(&self, item: T) -> bool {
        let mut slot = self.slot.lock();
        if !matches!(*slot, Exchange::Demanded) {
            return false;
        }
        *slot = Exchange::Yielded(item);
        tracing::trace!("generator yielded");
        self.signal.notify_all();
        self.await_demand(&mut slot)
    }

    fn finish(&self, outcome: thread::Result<()>) {
        let mut slot = self.slot.lock();
        match outcome {
            Ok(()) => {
                if !matches!(*slot, Exchange::Cancelled) {
                    *slot = Exchange::Finished;
                }
            }
            Err(payload) => *slot = Exchange::Panicked(payload),
        }
        self.signal.notify_all();
    }
}

/// The generator's side of the bridge.
fn host<G>(generator: G, handoff: &Handoff<G::Item>)
where
    G: Generator,
{
    {
        let mut slot = handoff.slot.lock();
        if !handoff.await_demand(&mut slot) {
            tracing::trace!("generator cancelled before first demand");
            drop(slot);
            drop(generator);
            handoff.finish(Ok(()));
            return;
        }
    }
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        generator.run(&mut |item| handoff.deliver(item));
    }));
    handoff.finish(outcome);
}

/// Re-raises a generator panic, unless the consumer is already unwinding.
fn propagate(payload: Box<dyn Any + Send>) {
    if thread::panicking() {
        tracing::error!("generator panicked while the consumer was unwinding");
    } else {
        panic::resume_unwind(payload);
    }
}

/// A push-style generator parked on its own thread. See [`pull`].
///
/// Use it through the [`Closeable`] returned by [`pull`] or [`Builder::pull`].
pub struct Parked<T> {
    handoff: Arc<Handoff<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T> Resumable for Parked<T> {
    type Item = T;

    fn resume(&mut self) -> Option<T> {
        self.worker.as_ref()?;
        let outcome = {
            let mut slot = self.handoff.slot.lock();
            if matches!(*slot, Exchange::Waiting) {
                *slot = Exchange::Demanded;
                tracing::trace!("consumer demanded");
                self.handoff.signal.notify_all();
            }
            while matches!(*slot, Exchange::Demanded) {
                self.handoff.signal.wait(&mut slot);
            }
            match mem::replace(&mut *slot, Exchange::Waiting) {
                Exchange::Yielded(item) => Some(Ok(item)),
                Exchange::Panicked(payload) => {
                    *slot = Exchange::Finished;
                    Some(Err(payload))
                }
                finished => {
                    *slot = finished;
                    None
                }
            }
        };
        match outcome? {
            Ok(item) => Some(item),
            Err(payload) => {
                propagate(payload);
                None
            }
        }
    }

    fn release(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        {
            let mut slot = self.handoff.slot.lock();
            if !matches!(*slot, Exchange::Finished | Exchange::Panicked(_)) {
                *slot = Exchange::Cancelled;
            }
            self.handoff.signal.notify_all();
        }
        if worker.join().is_err() {
            tracing::error!("generator thread terminated abnormally");
        }
        let last = mem::replace(&mut *self.handoff.slot.lock(), Exchange::Finished);
        if let Exchange::Panicked(payload) = last {
            propagate(payload);
        }
    }
}

/// Configures the thread that hosts a parked generator.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// # fn main() -> Result<(), bridge::BridgeError> {
/// let generator = bridge::generator_fn(|sink: &mut dyn FnMut(u8) -> bool| {
///     let _ = sink(1) && sink(2);
/// });
/// let bridge = bridge::Builder::new()
///     .name("byte-source")
///     .stack_size(64 * 1024)
///     .pull(generator)?;
/// assert_eq!(bridge.collect::<Vec<_>>(), vec![1, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl Builder {
    /// Creates a builder with the default thread name and stack size.
    pub const fn new() -> Self {
        Self {
            name: None,
            stack_size: None,
        }
    }

    /// Names the generator thread.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the generator thread's stack size in bytes.
    #[must_use]
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Parks `generator` on a new thread and returns the pull-side bridge.
    ///
    /// The generator does not start running until the bridge is first
    /// advanced.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Spawn`] if the thread cannot be created.
    pub fn pull<G>(self, generator: G) -> Result<Closeable<Parked<G::Item>>, BridgeError>
    where
        G: Generator + Send + 'static,
        G::Item: Send + 'static,
    {
        let handoff = Arc::new(Handoff::new());
        let shared = Arc::clone(&handoff);
        let name = self.name.unwrap_or_else(|| DEFAULT_THREAD_NAME.to_owned());
        let mut spawner = thread::Builder::new().name(name.clone());
        if let Some(size) = self.stack_size {
            spawner = spawner.stack_size(size);
        }
        let worker = spawner.spawn(move || host(generator, &shared))?;
        tracing::debug!(thread = %name, "generator parked");
        Ok(Closeable::new(Parked {
            handoff,
            worker: Some(worker),
        }))
    }
}

/// Turns a push-style generator into a pull-style sequence.
///
/// The generator is parked on a dedicated thread and resumed one item at a
/// time. Releasing the bridge, explicitly or by dropping it, makes the
/// pending yield return `false`, waits for the generator to finish its
/// cleanup, and joins the thread. A panic inside the generator is re-raised
/// from `advance` or `release`.
///
/// # Errors
///
/// Returns [`BridgeError::Spawn`] if the thread cannot be created.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// # fn main() -> Result<(), bridge::BridgeError> {
/// let naturals = bridge::generator_fn(|sink: &mut dyn FnMut(u64) -> bool| {
///     let mut value = 0;
///     while sink(value) {
///         value += 1;
///     }
/// });
///
/// let mut bridge = bridge::pull(naturals)?;
/// let evens: Vec<u64> = bridge.by_ref().filter(|value| value % 2 == 0).take(3).collect();
/// bridge.release();
/// assert_eq!(evens, vec![0, 2, 4]);
/// # Ok(())
/// # }
/// ```
pub fn pull<G>(generator: G) -> Result<Closeable<Parked<G::Item>>, BridgeError>
where
    G: Generator + Send + 'static,
    G::Item: Send + 'static,
{
    Builder::new().pull(generator)
}

static_assertions::assert_impl_all!(Closeable<Parked<i32>>: Send);
static_assertions::assert_not_impl_any!(Parked<i32>: Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::generator_fn;
    use crate::sequence::Sequence;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(limit: u32, produced: Arc<AtomicUsize>, cleanups: Arc<AtomicUsize>) -> impl Generator<Item = u32> + Send + 'static {
        generator_fn(move |sink: &mut dyn FnMut(u32) -> bool| {
            for value in 0..limit {
                produced.fetch_add(1, Ordering::SeqCst);
                if !sink(value) {
                    break;
                }
            }
            cleanups.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[rstest]
    fn test_pull_yields_all_items_then_closes() {
        let cleanups = Arc::new(AtomicUsize::new(0));
        let mut bridge = pull(counting(3, Arc::new(AtomicUsize::new(0)), Arc::clone(&cleanups))).unwrap();
        assert_eq!(bridge.by_ref().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(bridge.is_closed());
        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
        assert_eq!(bridge.advance(), None);
    }

    #[rstest]
    fn test_generator_waits_for_first_demand() {
        let produced = Arc::new(AtomicUsize::new(0));
        let cleanups = Arc::new(AtomicUsize::new(0));
        let mut bridge = pull(counting(10, Arc::clone(&produced), Arc::clone(&cleanups))).unwrap();
        thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(produced.load(Ordering::SeqCst), 0);
        bridge.release();
        assert_eq!(produced.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_generator_runs_one_item_ahead_at_most() {
        let produced = Arc::new(AtomicUsize::new(0));
        let cleanups = Arc::new(AtomicUsize::new(0));
        let mut bridge = pull(counting(10, Arc::clone(&produced), Arc::clone(&cleanups))).unwrap();
        assert_eq!(bridge.advance(), Some(0));
        assert_eq!(bridge.advance(), Some(1));
        assert_eq!(produced.load(Ordering::SeqCst), 2);
        bridge.release();
        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
        assert_eq!(produced.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn test_release_after_partial_consumption_runs_cleanup_once() {
        let cleanups = Arc::new(AtomicUsize::new(0));
        let mut bridge = pull(counting(100, Arc::new(AtomicUsize::new(0)), Arc::clone(&cleanups))).unwrap();
        assert_eq!(bridge.nth(4), Some(4));
        bridge.release();
        bridge.release();
        bridge.release();
        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
        assert_eq!(bridge.advance(), None);
        drop(bridge);
        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_drop_releases_parked_generator() {
        let cleanups = Arc::new(AtomicUsize::new(0));
        {
            let mut bridge = pull(counting(100, Arc::new(AtomicUsize::new(0)), Arc::clone(&cleanups))).unwrap();
            assert_eq!(bridge.advance(), Some(0));
        }
        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[should_panic(expected = "generator failed")]
    fn test_generator_panic_reaches_consumer() {
        let generator = generator_fn(|sink: &mut dyn FnMut(i32) -> bool| {
            if sink(1) {
                panic!("generator failed");
            }
        });
        let mut bridge = pull(generator).unwrap();
        assert_eq!(bridge.advance(), Some(1));
        let _ = bridge.advance();
    }

    #[rstest]
    #[should_panic(expected = "cleanup failed")]
    fn test_panic_during_cleanup_reaches_release() {
        let generator = generator_fn(|sink: &mut dyn FnMut(i32) -> bool| {
            while sink(1) {}
            panic!("cleanup failed");
        });
        let mut bridge = pull(generator).unwrap();
        assert_eq!(bridge.advance(), Some(1));
        bridge.release();
    }

    #[rstest]
    fn test_builder_names_thread() {
        let generator = generator_fn(|sink: &mut dyn FnMut(Option<String>) -> bool| {
            let _ = sink(thread::current().name().map(str::to_owned));
        });
        let mut bridge = Builder::new().name("custom-source").pull(generator).unwrap();
        assert_eq!(bridge.advance(), Some(Some("custom-source".to_owned())));
    }

    #[rstest]
    fn test_default_thread_name() {
        let generator = generator_fn(|sink: &mut dyn FnMut(Option<String>) -> bool| {
            let _ = sink(thread::current().name().map(str::to_owned));
        });
        let mut bridge = pull(generator).unwrap();
        assert_eq!(bridge.advance(), Some(Some(DEFAULT_THREAD_NAME.to_owned())));
    }
}
