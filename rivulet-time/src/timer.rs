// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock abstraction for time-based operators.

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Injectable clock used by [`debounce`](crate::DebounceExt::debounce) and
/// [`ticks`](crate::ticks).
///
/// A `Timer` schedules deadlines (`sleep_future`) and reads the current
/// instant (`now`). Production code uses [`TokioTimer`]; tests can substitute
/// a deterministic implementation that only advances when told to.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    /// Future that resolves once the requested duration has elapsed.
    ///
    /// Dropping the future cancels the scheduled deadline.
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Creates a future that sleeps for the specified duration.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}

/// The production clock, backed by `tokio::time`.
///
/// Under `tokio::time::pause()` the scheduled deadlines follow tokio's
/// virtual clock, which keeps timing tests deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = std::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }
}
