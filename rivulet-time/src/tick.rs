// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable periodic tick source.

use crate::timer::{Timer, TokioTimer};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::Event;

/// Emits a tick count (1, 2, 3, …) every `period`, using the production
/// clock, until the stream is dropped.
///
/// Guarding against double-starts ("start only if not already running") is
/// the caller's responsibility; the source itself just ticks for as long as
/// it is alive. Dropping the stream cancels the scheduled deadline: a tick
/// that was due but not yet delivered never fires.
pub fn ticks(period: Duration) -> TickStream<TokioTimer> {
    ticks_with(period, TokioTimer)
}

/// Emits a tick count every `period` against an injected clock.
pub fn ticks_with<Tm: Timer>(period: Duration, timer: Tm) -> TickStream<Tm> {
    let sleep = timer.sleep_future(period);
    TickStream {
        period,
        timer,
        sleep,
        count: 0,
    }
}

/// Periodic tick stream created by [`ticks`] / [`ticks_with`].
#[pin_project]
pub struct TickStream<Tm: Timer> {
    period: Duration,
    timer: Tm,
    #[pin]
    sleep: Tm::Sleep,
    count: u64,
}

impl<Tm: Timer> Stream for TickStream<Tm> {
    type Item = Event<u64>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        match this.sleep.as_mut().poll(cx) {
            Poll::Ready(()) => {
                // Re-arm before emitting so the cadence holds
                this.sleep.set(this.timer.sleep_future(*this.period));
                *this.count += 1;
                Poll::Ready(Some(Event::Value(*this.count)))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
