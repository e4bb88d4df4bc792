// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection for testing propagation behavior.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use rivulet_core::{Event, StreamError};

/// Wraps a stream of plain values into `Event::Value`s, injecting one
/// `Event::Error` at the given zero-based position.
///
/// Values after the injection point keep flowing, so operator tests can
/// assert exactly where propagation stops.
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Injects an error before the `position`-th value of `inner`.
    pub fn new(inner: S, position: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(position),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = Event<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.inject_error_at == Some(this.count) {
            this.inject_error_at = None;
            this.count += 1;
            return Poll::Ready(Some(Event::Error(StreamError::stream_error(
                "injected test error",
            ))));
        }

        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(value)) => {
                this.count += 1;
                Poll::Ready(Some(Event::Value(value)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
