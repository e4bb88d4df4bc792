// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce operator.

use crate::timer::{Timer, TokioTimer};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::Event;

/// Extension trait providing the `debounce` operator.
pub trait DebounceExt<T>: Stream<Item = Event<T>> + Sized
where
    T: Send + 'static,
{
    /// Debounces the stream by `duration` using the production clock.
    ///
    /// This is **trailing debounce**: every incoming value supersedes the
    /// pending one and restarts the deadline; when a deadline elapses without
    /// being superseded, the pending value (the last of the burst) is
    /// emitted. For a burst of N values arriving closer together than
    /// `duration`, exactly one value comes out.
    ///
    /// Errors bypass the quiet period and are forwarded immediately,
    /// discarding any pending value. When the source ends, a pending value is
    /// flushed. Dropping the debounced stream cancels the outstanding
    /// deadline; no value is delivered afterwards.
    fn debounce(self, duration: Duration) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send;

    /// Debounces the stream by `duration` against an injected clock.
    fn debounce_with<Tm>(self, duration: Duration, timer: Tm) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send,
        Tm: Timer;
}

impl<S, T> DebounceExt<T> for S
where
    S: Stream<Item = Event<T>>,
    T: Send + 'static,
{
    fn debounce(self, duration: Duration) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send,
    {
        self.debounce_with(duration, TokioTimer)
    }

    fn debounce_with<Tm>(self, duration: Duration, timer: Tm) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send,
        Tm: Timer,
    {
        DebounceStream {
            stream: self,
            duration,
            timer,
            pending_value: None,
            sleep: None,
            stream_ended: false,
        }
    }
}

#[pin_project]
struct DebounceStream<S, T, Tm>
where
    S: Stream<Item = Event<T>>,
    Tm: Timer,
{
    #[pin]
    stream: S,
    duration: Duration,
    timer: Tm,
    pending_value: Option<Event<T>>,
    #[pin]
    sleep: Option<Tm::Sleep>,
    stream_ended: bool,
}

impl<S, T, Tm> Stream for DebounceStream<S, T, Tm>
where
    S: Stream<Item = Event<T>>,
    Tm: Timer,
{
    type Item = Event<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // Source gone: flush any pending value, then end
            if *this.stream_ended {
                if let Some(item) = this.pending_value.take() {
                    return Poll::Ready(Some(item));
                }
                return Poll::Ready(None);
            }

            // A pending value is waiting on its deadline
            if this.pending_value.is_some() {
                if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                    match sleep.poll(cx) {
                        Poll::Ready(()) => {
                            // Quiet period elapsed, emit the last value seen
                            this.sleep.set(None);
                            let item = this.pending_value.take();
                            return Poll::Ready(item);
                        }
                        Poll::Pending => {
                            // Deadline still out; fall through for new input
                        }
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(Event::Value(value))) => {
                    // New input supersedes the pending value and resets the
                    // deadline
                    this.sleep
                        .set(Some(this.timer.sleep_future(*this.duration)));
                    *this.pending_value = Some(Event::Value(value));

                    // Loop to poll the fresh deadline (it may be zero)
                    continue;
                }
                Poll::Ready(Some(Event::Error(err))) => {
                    // Errors skip the quiet period entirely
                    *this.pending_value = None;
                    this.sleep.set(None);
                    return Poll::Ready(Some(Event::Error(err)));
                }
                Poll::Ready(None) => {
                    *this.stream_ended = true;
                    continue;
                }
                Poll::Pending => {
                    return Poll::Pending;
                }
            }
        }
    }
}
