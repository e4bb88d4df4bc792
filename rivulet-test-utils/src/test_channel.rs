// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-driven channels for tests.
//!
//! Production code composes streams; tests additionally need an imperative
//! push side. These helpers pair a `tokio` unbounded sender with a boxed
//! [`Event`] stream.

use core::pin::Pin;
use futures::{Stream, StreamExt};
use rivulet_core::Event;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Boxed event stream returned by the test channels.
pub type TestEventStream<T> = Pin<Box<dyn Stream<Item = Event<T>> + Send>>;

/// Creates an unbounded channel whose receive side is a stream of
/// `Event::Value`s.
pub fn test_channel<T: Send + 'static>() -> (mpsc::UnboundedSender<T>, TestEventStream<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(Event::Value).boxed();
    (tx, stream)
}

/// Creates an unbounded channel carrying raw [`Event`]s, for tests that need
/// to push errors explicitly.
pub fn event_channel<T: Send + 'static>(
) -> (mpsc::UnboundedSender<Event<T>>, TestEventStream<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).boxed();
    (tx, stream)
}
