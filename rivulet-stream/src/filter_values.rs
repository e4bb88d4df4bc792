// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-event value filter.

use futures::future::ready;
use futures::{Stream, StreamExt};
use rivulet_core::Event;

/// Forwards only values matching `predicate`, suppressing the rest entirely
/// (no placeholder is emitted). Errors always pass through.
pub fn filter_values_impl<S, T, P>(stream: S, predicate: P) -> impl Stream<Item = Event<T>>
where
    S: Stream<Item = Event<T>>,
    P: Fn(&T) -> bool,
{
    stream.filter(move |event| {
        ready(match event {
            Event::Value(value) => predicate(value),
            Event::Error(_) => true,
        })
    })
}

/// Extension trait providing the `filter_values` operator.
pub trait FilterValuesExt<T>: Stream<Item = Event<T>> + Sized
where
    T: Send,
{
    /// Keeps only values for which `predicate` returns `true`.
    ///
    /// Suppressed values leave no trace downstream. Errors are never
    /// filtered.
    fn filter_values<P>(self, predicate: P) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send,
        P: Fn(&T) -> bool + Send;
}

impl<S, T> FilterValuesExt<T> for S
where
    S: Stream<Item = Event<T>>,
    T: Send,
{
    fn filter_values<P>(self, predicate: P) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send,
        P: Fn(&T) -> bool + Send,
    {
        filter_values_impl(self, predicate)
    }
}
