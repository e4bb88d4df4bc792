// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct-until-changed operator that filters consecutive duplicates.

use futures::future::ready;
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use rivulet_core::Event;
use std::sync::Arc;

/// Emits values only when they differ from the previously forwarded value.
///
/// The operator keeps the last forwarded value (initially unset, so the first
/// value is always emitted) and compares each incoming value against it with
/// `==`. Equal values are suppressed; different ones are forwarded and become
/// the new comparison point.
///
/// Comparison happens on the value *as it exists at this stage of the
/// pipeline*. Placed before a `map_values` that normalizes case it compares
/// raw values; placed after, it compares normalized ones. The two orderings
/// are distinct, intentional behaviors:
///
/// ```rust
/// use rivulet_stream::prelude::*;
/// use rivulet_core::Event;
/// use futures::{pin_mut, StreamExt};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, rx) = async_channel::unbounded::<&str>();
/// // distinct BEFORE lowercasing: "swift" and "SWIFT" are different here
/// let stream = rx
///     .map(Event::Value)
///     .distinct_until_changed()
///     .map_values(str::to_lowercase);
/// pin_mut!(stream);
///
/// for query in ["swift", "swift", "SWIFT"] {
///     tx.try_send(query).unwrap();
/// }
/// assert_eq!(stream.next().await.unwrap().unwrap(), "swift");
/// assert_eq!(stream.next().await.unwrap().unwrap(), "swift");
/// # }
/// ```
///
/// # Error Handling
///
/// Errors from the source stream are always propagated unchanged, regardless
/// of deduplication state.
pub fn distinct_until_changed_impl<S, T>(stream: S) -> impl Stream<Item = Event<T>>
where
    S: Stream<Item = Event<T>>,
    T: Clone + PartialEq,
{
    let last_forwarded: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));

    stream.filter_map(move |event| {
        let out = match event {
            Event::Value(value) => {
                let mut last = last_forwarded.lock();

                let should_emit = match last.as_ref() {
                    None => true, // first value, always emit
                    Some(prev) => *prev != value,
                };

                if should_emit {
                    *last = Some(value.clone());
                    Some(Event::Value(value))
                } else {
                    None
                }
            }
            Event::Error(e) => Some(Event::Error(e)),
        };
        ready(out)
    })
}

/// Extension trait providing the `distinct_until_changed` operator.
pub trait DistinctUntilChangedExt<T>: Stream<Item = Event<T>> + Sized
where
    T: Clone + PartialEq + Send,
{
    /// Suppresses values equal to the previously forwarded one.
    fn distinct_until_changed(self) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send;
}

impl<S, T> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = Event<T>>,
    T: Clone + PartialEq + Send,
{
    fn distinct_until_changed(self) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send,
    {
        distinct_until_changed_impl(self)
    }
}
