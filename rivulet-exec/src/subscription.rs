// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription handle with idempotent, transitive cancellation.

use rivulet_core::StreamTask;

/// Live attachment of consumer callbacks to a stream.
///
/// The handle owns the driving task and therefore the composed stream and
/// every upstream resource it allocated: merged sub-subscriptions, pending
/// debounce deadlines, producer tasks. Cancellation, whether explicit via
/// [`cancel`](Self::cancel) or implicit on drop, tears all of it down.
///
/// Cancellation is idempotent and terminal: after the first `cancel`, no
/// callback ever fires again, even if an in-flight timer or async operation
/// completes afterwards.
#[derive(Debug)]
pub struct Subscription {
    task: StreamTask,
}

impl Subscription {
    pub(crate) fn new(task: StreamTask) -> Self {
        Self { task }
    }

    /// Cancel the subscription. Safe to call any number of times.
    pub fn cancel(&self) {
        self.task.cancel();
    }

    /// Whether the subscription has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }
}
