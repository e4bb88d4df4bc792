// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-event value transform.

use futures::{Stream, StreamExt};
use rivulet_core::Event;

/// Maps each value with `f`, forwarding errors unchanged.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::map_values::map_values_impl;
/// use rivulet_core::Event;
/// use futures::{pin_mut, StreamExt};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, rx) = async_channel::unbounded();
/// let mapped = map_values_impl(rx.map(Event::Value), |x: i32| x * 2);
/// pin_mut!(mapped);
///
/// tx.try_send(5).unwrap();
/// assert_eq!(mapped.next().await.unwrap().unwrap(), 10);
/// # }
/// ```
pub fn map_values_impl<S, T, U, F>(stream: S, mut f: F) -> impl Stream<Item = Event<U>>
where
    S: Stream<Item = Event<T>>,
    F: FnMut(T) -> U,
{
    stream.map(move |event| event.map(&mut f))
}

/// Extension trait providing the `map_values` operator.
pub trait MapValuesExt<T>: Stream<Item = Event<T>> + Sized {
    /// Transforms every value with `f`. Errors pass through unchanged.
    ///
    /// Subscribing to the derived stream transparently subscribes to the
    /// upstream stream; dropping it drops the upstream subscription.
    fn map_values<U, F>(self, f: F) -> impl Stream<Item = Event<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> U + Send;
}

impl<S, T> MapValuesExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn map_values<U, F>(self, f: F) -> impl Stream<Item = Event<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> U + Send,
    {
        map_values_impl(self, f)
    }
}
