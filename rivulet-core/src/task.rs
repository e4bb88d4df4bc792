// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cancellation on drop.

use crate::CancellationToken;
use core::future::Future;

/// A spawned background task that is cooperatively cancelled when the handle
/// is dropped.
///
/// The spawned future receives a [`CancellationToken`] it must monitor: the
/// token is signalled when the handle is dropped or [`cancel`](Self::cancel)
/// is called, and the future is expected to stop delivering results once it
/// observes the signal. Late completions of in-flight work must be swallowed
/// by the future, not delivered.
///
/// # Example
///
/// ```
/// use rivulet_core::StreamTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = StreamTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// task.cancel();
/// assert!(task.is_cancelled());
/// # }
/// ```
#[derive(Debug)]
pub struct StreamTask {
    cancel: CancellationToken,
}

impl StreamTask {
    /// Spawn a background task with cancellation support.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal cancellation to the spawned future. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A clone of the task's cancellation token.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for StreamTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
