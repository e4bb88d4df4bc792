// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for Rivulet streams.
//!
//! A [`StreamError`] travels in-band as the error half of an
//! [`Event`](crate::Event) and is terminal for the subscription that receives
//! it. Errors are `Clone` so that channel fan-out can hand the same failure to
//! every subscriber; the producer variant wraps its source in an [`Arc`] for
//! exactly that reason.

use std::sync::Arc;

/// Root error type for all Rivulet stream failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StreamError {
    /// A one-shot producer (deferred or direct) failed.
    ///
    /// The failure is delivered to each subscriber exactly once, through the
    /// same channel as a success, and is never retried by the engine.
    #[error("producer failed: {0}")]
    Producer(Arc<dyn std::error::Error + Send + Sync>),

    /// General stream processing failure.
    #[error("stream processing error: {context}")]
    StreamProcessing {
        /// Description of what went wrong.
        context: String,
    },
}

impl StreamError {
    /// Wrap a producer failure.
    pub fn producer_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Producer(Arc::new(error))
    }

    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessing {
            context: context.into(),
        }
    }
}

/// Specialized `Result` type for Rivulet operations.
pub type Result<T> = core::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("fetch failed: {0}")]
    struct FetchError(String);

    #[test]
    fn producer_error_preserves_source_message() {
        let err = StreamError::producer_error(FetchError("timeout".into()));
        assert_eq!(err.to_string(), "producer failed: fetch failed: timeout");
    }

    #[test]
    fn errors_are_cloneable_for_fan_out() {
        let err = StreamError::stream_error("boom");
        let copy = err.clone();
        assert_eq!(copy.to_string(), "stream processing error: boom");
    }
}
