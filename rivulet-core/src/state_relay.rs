// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot channel that holds a current value.
//!
//! A [`StateRelay`] behaves like [`Relay`](crate::Relay) with one addition:
//! it always holds exactly one current value, given at construction, and
//! every new subscriber receives that value immediately, before any future
//! sends. `send` first updates the stored value, then notifies.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{Event, StateRelay};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let relay = StateRelay::new(0);
//!
//! // The current value is replayed with no send() call
//! let mut stream = relay.subscribe();
//! assert_eq!(stream.next().await, Some(Event::Value(0)));
//!
//! relay.send(7);
//! assert_eq!(relay.value(), 7);
//! assert_eq!(stream.next().await, Some(Event::Value(7)));
//! # }
//! ```

use crate::mutex::Mutex;
use crate::relay::{RelayState, RelayStream};
use crate::{Event, StreamError};
use std::sync::Arc;

struct StateRelayState<T> {
    current: T,
    channel: RelayState<T>,
}

/// A hot channel with a current value replayed to every new subscriber.
pub struct StateRelay<T: Clone + Send + 'static> {
    state: Arc<Mutex<StateRelayState<T>>>,
}

impl<T: Clone + Send + 'static> StateRelay<T> {
    /// Creates a new relay holding `initial` as its current value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(StateRelayState {
                current: initial,
                channel: RelayState::new(),
            })),
        }
    }

    /// The current value.
    ///
    /// Always defined: the relay is constructed with one and `send` replaces
    /// it atomically with the fan-out.
    #[must_use]
    pub fn value(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Subscribe, receiving the current value immediately and every send
    /// thereafter.
    ///
    /// Subscribing to a closed relay yields a stream that ends immediately,
    /// without replay.
    pub fn subscribe(&self) -> RelayStream<T> {
        let mut state = self.state.lock();
        if state.channel.closed {
            return Box::pin(futures::stream::empty());
        }

        let (tx, rx) = async_channel::unbounded();
        let _ = tx.try_send(Event::Value(state.current.clone()));
        state.channel.senders.push(tx);
        Box::pin(rx)
    }

    /// Update the current value, then notify all subscribers.
    ///
    /// A no-op after [`close`](Self::close).
    pub fn send(&self, value: T) {
        let mut state = self.state.lock();
        if state.channel.closed {
            return;
        }
        state.current = value.clone();
        state.channel.dispatch(Event::Value(value));
    }

    /// Deliver a terminal error to all subscribers and close the relay.
    pub fn error(&self, err: StreamError) {
        let mut state = self.state.lock();
        if state.channel.closed {
            return;
        }
        state.channel.dispatch(Event::Error(err));
        state.channel.closed = true;
        state.channel.senders.clear();
    }

    /// Close the relay, ending all subscriber streams.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.channel.closed = true;
        state.channel.senders.clear();
    }

    /// Whether the relay has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().channel.closed
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().channel.senders.len()
    }
}

impl<T: Clone + Send + 'static> Clone for StateRelay<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
