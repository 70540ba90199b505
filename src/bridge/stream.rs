use futures::Stream;
use futures::executor::{BlockingStream, block_on_stream};

use super::closeable::{Closeable, Resumable};

/// A [`Stream`] pulled by blocking the current thread. See [`from_stream`].
pub struct Blocking<S: Stream + Unpin> {
    stream: Option<BlockingStream<S>>,
}

impl<S: Stream + Unpin> Resumable for Blocking<S> {
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        self.stream.as_mut()?.next()
    }

    fn release(&mut self) {
        self.stream = None;
    }
}

/// Bridges a [`Stream`] into a sequence by blocking on each item.
///
/// Releasing the bridge drops the stream.
///
/// # Examples
///
/// ```rust
/// use futures::stream;
/// use pullseq::prelude::*;
///
/// let mut bridge = bridge::from_stream(stream::iter(vec![1, 2, 3]));
/// assert_eq!(bridge.advance(), Some(1));
/// bridge.release();
/// assert_eq!(bridge.advance(), None);
/// ```
pub fn from_stream<S: Stream + Unpin>(stream: S) -> Closeable<Blocking<S>> {
    Closeable::new(Blocking {
        stream: Some(block_on_stream(stream)),
    })
}
