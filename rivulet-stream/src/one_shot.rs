// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager one-shot producer with a cached result.

use crate::EventBoxStream;
use core::future::Future;
use parking_lot::Mutex;
use rivulet_core::{Event, StreamError, StreamTask};
use std::sync::Arc;

struct OneShotState<T> {
    result: Option<Event<T>>,
    waiters: Vec<async_channel::Sender<Event<T>>>,
}

/// A one-shot producer that runs its future exactly once, at construction.
///
/// The single result, success or failure treated uniformly, is cached and
/// replayed to every subscriber, present and future. The side effect never
/// re-executes; contrast with [`Deferred`](crate::Deferred), which runs its
/// factory afresh per subscription.
///
/// Each subscription yields exactly one [`Event`] and then ends.
pub struct OneShot<T: Clone + Send + 'static> {
    state: Arc<Mutex<OneShotState<T>>>,
    _task: StreamTask,
}

impl<T: Clone + Send + 'static> OneShot<T> {
    /// Starts `future` immediately and caches its eventual result.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn new<Fut, E>(future: Fut) -> Self
    where
        Fut: Future<Output = core::result::Result<T, E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let state = Arc::new(Mutex::new(OneShotState {
            result: None,
            waiters: Vec::new(),
        }));

        let task = StreamTask::spawn({
            let state = Arc::clone(&state);
            move |cancel| async move {
                let outcome = match future.await {
                    Ok(value) => Event::Value(value),
                    Err(err) => Event::Error(StreamError::producer_error(err)),
                };

                // A late completion after cancellation is swallowed
                if cancel.is_cancelled() {
                    return;
                }

                let mut guard = state.lock();
                guard.result = Some(outcome.clone());
                for tx in guard.waiters.drain(..) {
                    let _ = tx.try_send(outcome.clone());
                }
            }
        });

        Self {
            state,
            _task: task,
        }
    }

    /// Subscribe to the cached result.
    ///
    /// If the producer has already completed, the stream yields the cached
    /// event immediately; otherwise it yields the event once the producer
    /// finishes. Either way the stream ends after that single event.
    pub fn subscribe(&self) -> EventBoxStream<T> {
        let mut guard = self.state.lock();
        let (tx, rx) = async_channel::bounded(1);
        match &guard.result {
            Some(outcome) => {
                let _ = tx.try_send(outcome.clone());
            }
            None => guard.waiters.push(tx),
        }
        Box::pin(rx)
    }

    /// Whether the producer has completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.lock().result.is_some()
    }
}
