// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic fake clock.
//!
//! `ManualTimer` implements [`Timer`] over a virtual clock that only moves
//! when [`advance`](ManualTimer::advance) is called. Sleeps scheduled against
//! it park on an event listener and wake exactly when the virtual clock
//! passes their deadline, which makes debounce and tick tests fully
//! deterministic without `tokio::time::pause`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use rivulet_time::Timer;
use std::sync::Arc;

/// A [`Timer`] whose clock advances only on demand.
#[derive(Clone, Debug)]
pub struct ManualTimer {
    inner: Arc<TimerInner>,
}

#[derive(Debug)]
struct TimerInner {
    now: Mutex<Duration>,
    tick: Event,
}

impl ManualTimer {
    /// Creates a timer with its virtual clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TimerInner {
                now: Mutex::new(Duration::ZERO),
                tick: Event::new(),
            }),
        }
    }

    /// Moves the virtual clock forward, waking every sleep whose deadline has
    /// passed.
    pub fn advance(&self, by: Duration) {
        {
            let mut now = self.inner.now.lock();
            *now += by;
        }
        self.inner.tick.notify(usize::MAX);
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ManualTimer {
    type Sleep = ManualSleep;

    type Instant = Duration;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        let deadline = *self.inner.now.lock() + duration;
        ManualSleep {
            inner: Arc::clone(&self.inner),
            deadline,
            listener: None,
        }
    }

    fn now(&self) -> Self::Instant {
        *self.inner.now.lock()
    }
}

/// Sleep future scheduled against a [`ManualTimer`].
pub struct ManualSleep {
    inner: Arc<TimerInner>,
    deadline: Duration,
    listener: Option<EventListener>,
}

impl Future for ManualSleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        loop {
            if *this.inner.now.lock() >= this.deadline {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                None => {
                    // Register, then loop to re-check: advance() may have
                    // fired between the deadline check and listen()
                    this.listener = Some(this.inner.tick.listen());
                }
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => {
                        this.listener = None;
                    }
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }
}
