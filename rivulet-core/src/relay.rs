// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, fire-and-forget channel.
//!
//! A [`Relay`] fans each [`Event<T>`](crate::Event) out to all subscribers
//! active at send time, in attachment order. It never buffers past its
//! subscriber set: a value sent while nobody is attached is dropped, never
//! queued, and late subscribers do not receive past values.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{Event, Relay};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let relay = Relay::<i32>::new();
//!
//! // Dropped: nobody is listening yet
//! relay.send(0);
//!
//! let mut stream = relay.subscribe();
//! relay.send(1);
//! relay.send(2);
//! relay.close();
//!
//! assert_eq!(stream.next().await, Some(Event::Value(1)));
//! assert_eq!(stream.next().await, Some(Event::Value(2)));
//! assert_eq!(stream.next().await, None); // closed
//! # }
//! ```

use crate::mutex::Mutex;
use crate::{Event, StreamError};
use core::pin::Pin;
use futures::stream::Stream;
use std::sync::Arc;

/// Stream handed to each relay subscriber.
pub type RelayStream<T> = Pin<Box<dyn Stream<Item = Event<T>> + Send>>;

pub(crate) struct RelayState<T> {
    pub(crate) closed: bool,
    pub(crate) senders: Vec<async_channel::Sender<Event<T>>>,
}

impl<T> RelayState<T> {
    pub(crate) fn new() -> Self {
        Self {
            closed: false,
            senders: Vec::new(),
        }
    }

    /// Fan an event out to every live subscriber, dropping dead ones.
    pub(crate) fn dispatch(&mut self, event: Event<T>)
    where
        T: Clone,
    {
        let mut live = Vec::with_capacity(self.senders.len());
        for tx in self.senders.drain(..) {
            if tx.try_send(event.clone()).is_ok() {
                live.push(tx);
            }
        }
        self.senders = live;
    }
}

/// A hot channel that broadcasts events to all current subscribers.
///
/// `Relay` is the entry point for pushing values into a Rivulet pipeline.
/// It is cheap to clone; all clones share the same subscriber set.
pub struct Relay<T: Clone + Send + 'static> {
    state: Arc<Mutex<RelayState<T>>>,
}

impl<T: Clone + Send + 'static> Relay<T> {
    /// Creates a new relay with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RelayState::new())),
        }
    }

    /// Subscribe and receive every event sent from this point on.
    ///
    /// Subscribing to a closed relay yields a stream that ends immediately.
    pub fn subscribe(&self) -> RelayStream<T> {
        let mut state = self.state.lock();
        if state.closed {
            return Box::pin(futures::stream::empty());
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        Box::pin(rx)
    }

    /// Send a value to all subscribers active at call time.
    ///
    /// With zero subscribers the value is dropped silently; after
    /// [`close`](Self::close) this is a no-op.
    pub fn send(&self, value: T) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.dispatch(Event::Value(value));
    }

    /// Deliver a terminal error to all subscribers and close the relay.
    pub fn error(&self, err: StreamError) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.dispatch(Event::Error(err));
        state.closed = true;
        state.senders.clear();
    }

    /// Close the relay, ending all subscriber streams.
    ///
    /// Closing is idempotent. Subsequent sends are no-ops.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Whether the relay has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of currently attached subscribers.
    ///
    /// Dropped subscribers are detected lazily, on the next `send`.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for Relay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
