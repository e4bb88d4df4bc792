// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred one-shot producer wrapper.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use rivulet_core::{Event, StreamError, StreamTask};

/// Wraps a producer factory so the side effect runs once per subscription.
///
/// Nothing executes at construction time. Each call to
/// [`subscribe`](Self::subscribe) invokes the factory to build a brand-new
/// producer and starts it immediately; two independent subscriptions trigger
/// two independent executions, and neither sees the other's result. Contrast
/// with [`OneShot`](crate::OneShot), which executes at construction and
/// replays one cached result.
pub struct Deferred<F> {
    factory: F,
}

impl<F, Fut, T, E> Deferred<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = core::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    /// Wraps `factory` without invoking it.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Builds a fresh producer and starts it.
    ///
    /// The returned stream yields the producer's single event (success or
    /// failure) and then ends. Dropping the stream cancels the producer;
    /// a completion that races with cancellation is swallowed, never
    /// delivered.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn subscribe(&self) -> ProducerStream<T> {
        let future = (self.factory)();
        let (tx, rx) = async_channel::bounded(1);

        let task = StreamTask::spawn(move |cancel| async move {
            let outcome = match future.await {
                Ok(value) => Event::Value(value),
                Err(err) => Event::Error(StreamError::producer_error(err)),
            };

            if cancel.is_cancelled() {
                return;
            }

            let _ = tx.try_send(outcome);
        });

        ProducerStream {
            receiver: Box::pin(rx),
            _task: task,
        }
    }
}

/// Single-event stream owning the producer task that feeds it.
///
/// Dropping the stream cancels the task.
pub struct ProducerStream<T> {
    // `async_channel::Receiver` is `!Unpin`; box-pinning it keeps
    // `ProducerStream` itself `Unpin` so it can be driven directly through the
    // `StreamExt` combinators.
    receiver: Pin<Box<async_channel::Receiver<Event<T>>>>,
    _task: StreamTask,
}

impl<T> Stream for ProducerStream<T> {
    type Item = Event<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.as_mut().poll_next(cx)
    }
}
