// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Arrival-order merge of same-typed streams.

use crate::EventBoxStream;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{Stream, StreamExt};
use rivulet_core::Event;

/// Wrapper that ends the stream after the first error, dropping the inner
/// stream (and with it every remaining source) immediately.
pub(crate) struct FuseOnError<S> {
    inner: Option<S>,
}

impl<S> FuseOnError<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<S, T> Stream for FuseOnError<S>
where
    S: Stream<Item = Event<T>> + Unpin,
{
    type Item = Event<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(inner) = this.inner.as_mut() else {
            return Poll::Ready(None);
        };

        match Pin::new(inner).poll_next(cx) {
            Poll::Ready(Some(Event::Error(e))) => {
                this.inner = None;
                Poll::Ready(Some(Event::Error(e)))
            }
            other => other,
        }
    }
}

/// Merges streams in arrival order: any value emitted by any source is
/// forwarded immediately, with no reordering and no buffering window.
///
/// The first error from any source is forwarded and terminates the merged
/// stream, dropping all remaining sources. With zero sources the merged
/// stream never emits and ends immediately.
pub fn merge_impl<T>(
    streams: Vec<EventBoxStream<T>>,
) -> impl Stream<Item = Event<T>> + Send + Unpin
where
    T: Send + 'static,
{
    FuseOnError::new(futures::stream::select_all(streams))
}

/// Extension trait providing the `merge_with` operator.
pub trait MergeExt<T>: Stream<Item = Event<T>> + Sized
where
    T: Send + 'static,
{
    /// Merges this stream with `others`, forwarding every value in the order
    /// the sources emitted it.
    ///
    /// Dropping the merged stream drops all upstream subscriptions.
    fn merge_with<S>(self, others: Vec<S>) -> impl Stream<Item = Event<T>> + Send + Unpin
    where
        Self: Send + 'static,
        S: Stream<Item = Event<T>> + Send + 'static;
}

impl<S0, T> MergeExt<T> for S0
where
    S0: Stream<Item = Event<T>>,
    T: Send + 'static,
{
    fn merge_with<S>(self, others: Vec<S>) -> impl Stream<Item = Event<T>> + Send + Unpin
    where
        Self: Send + 'static,
        S: Stream<Item = Event<T>> + Send + 'static,
    {
        let mut streams: Vec<EventBoxStream<T>> = Vec::with_capacity(others.len() + 1);
        streams.push(self.boxed());
        for other in others {
            streams.push(other.boxed());
        }
        merge_impl(streams)
    }
}
