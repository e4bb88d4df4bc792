// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest operator for two streams.

use crate::merge::FuseOnError;
use crate::EventBoxStream;
use futures::future::ready;
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use rivulet_core::Event;
use std::sync::Arc;

/// Which source an event arrived from.
enum Side<A, B> {
    Left(Event<A>),
    Right(Event<B>),
}

/// Latest value seen from each side.
struct LatestPair<A, B> {
    left: Option<A>,
    right: Option<B>,
}

impl<A: Clone, B: Clone> LatestPair<A, B> {
    fn emit(&self) -> Option<Event<(A, B)>> {
        match (&self.left, &self.right) {
            (Some(a), Some(b)) => Some(Event::Value((a.clone(), b.clone()))),
            _ => None,
        }
    }
}

/// Pairs the latest values of two streams.
///
/// No pair is emitted until both sources have produced at least one value.
/// From then on, every emission from either side produces a pair using the
/// other side's most recent value. Events are processed in arrival order;
/// each state update plus emission is one atomic step with respect to
/// interleaving from the two sources.
///
/// The first error from either source is forwarded and terminates the
/// combined stream, dropping both sources.
pub fn combine_latest_impl<SA, SB, A, B>(
    left: SA,
    right: SB,
) -> impl Stream<Item = Event<(A, B)>> + Send + Unpin
where
    SA: Stream<Item = Event<A>> + Send + 'static,
    SB: Stream<Item = Event<B>> + Send + 'static,
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
{
    let tagged: Vec<core::pin::Pin<Box<dyn Stream<Item = Side<A, B>> + Send>>> = vec![
        left.map(Side::Left).boxed(),
        right.map(Side::Right).boxed(),
    ];

    let state = Arc::new(Mutex::new(LatestPair {
        left: None,
        right: None,
    }));

    let combined = futures::stream::select_all(tagged).filter_map(move |side| {
        let out = {
            let mut latest = state.lock();
            match side {
                Side::Left(Event::Value(a)) => {
                    latest.left = Some(a);
                    latest.emit()
                }
                Side::Right(Event::Value(b)) => {
                    latest.right = Some(b);
                    latest.emit()
                }
                // Propagate errors immediately, without touching state
                Side::Left(Event::Error(e)) | Side::Right(Event::Error(e)) => {
                    Some(Event::Error(e))
                }
            }
        };
        ready(out)
    });

    let combined: EventBoxStream<(A, B)> = combined.boxed();
    FuseOnError::new(combined)
}

/// Extension trait providing the `combine_latest` operator.
pub trait CombineLatestExt<T>: Stream<Item = Event<T>> + Sized
where
    T: Clone + Send + 'static,
{
    /// Combines this stream with `other`, emitting `(latest_self, latest_other)`
    /// once both have emitted and on every emission from either afterwards.
    fn combine_latest<SB, U>(self, other: SB) -> impl Stream<Item = Event<(T, U)>> + Send + Unpin
    where
        Self: Send + 'static,
        SB: Stream<Item = Event<U>> + Send + 'static,
        U: Clone + Send + 'static;
}

impl<S, T> CombineLatestExt<T> for S
where
    S: Stream<Item = Event<T>>,
    T: Clone + Send + 'static,
{
    fn combine_latest<SB, U>(self, other: SB) -> impl Stream<Item = Event<(T, U)>> + Send + Unpin
    where
        Self: Send + 'static,
        SB: Stream<Item = Event<U>> + Send + 'static,
        U: Clone + Send + 'static,
    {
        combine_latest_impl(self, other)
    }
}
