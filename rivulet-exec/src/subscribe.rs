// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Attaching consumer callbacks to a stream.

use crate::Subscription;
use futures::future::{select, Either};
use futures::{Stream, StreamExt};
use rivulet_core::{Event, StreamError, StreamTask};

/// Extension trait attaching consumer callbacks to event streams.
pub trait SubscribeExt<T>: Stream<Item = Event<T>> + Sized {
    /// Drives the stream on a background task, invoking `on_value` for every
    /// value and `on_error` at most once, for the terminal failure.
    ///
    /// # Behavior
    ///
    /// - Values are delivered sequentially, in stream order; a consumer that
    ///   blocks delays that subscription's further delivery, nothing else.
    /// - An error event is terminal: `on_error` runs once, then the driver
    ///   stops and the composed stream is dropped.
    /// - Stream end stops the driver without invoking `on_error`.
    /// - Cancelling the returned [`Subscription`] stops delivery outright:
    ///   callbacks never fire after cancellation is observed, and the
    ///   composed stream (timers, merged sub-subscriptions, producer tasks)
    ///   is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    fn subscribe<F, E>(self, on_value: F, on_error: E) -> Subscription
    where
        Self: Send + 'static,
        T: Send + 'static,
        F: FnMut(T) + Send + 'static,
        E: FnOnce(StreamError) + Send + 'static;
}

impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn subscribe<F, E>(self, mut on_value: F, on_error: E) -> Subscription
    where
        Self: Send + 'static,
        T: Send + 'static,
        F: FnMut(T) + Send + 'static,
        E: FnOnce(StreamError) + Send + 'static,
    {
        let task = StreamTask::spawn(move |cancel| async move {
            let mut stream = Box::pin(self);
            let mut on_error = Some(on_error);

            loop {
                match select(stream.next(), cancel.cancelled()).await {
                    Either::Left((Some(Event::Value(value)), _)) => {
                        if cancel.is_cancelled() {
                            break;
                        }
                        on_value(value);
                    }
                    Either::Left((Some(Event::Error(err)), _)) => {
                        if cancel.is_cancelled() {
                            break;
                        }
                        crate::warn!("subscription terminated by stream error: {err}");
                        if let Some(callback) = on_error.take() {
                            callback(err);
                        }
                        break;
                    }
                    Either::Left((None, _)) | Either::Right(((), _)) => break,
                }
            }
        });

        Subscription::new(task)
    }
}
