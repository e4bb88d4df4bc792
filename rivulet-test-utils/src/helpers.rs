// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion helpers shared across the operator test suites.

use core::fmt::Debug;
use futures::{Stream, StreamExt};
use rivulet_core::{Event, StreamError};
use std::time::Duration;
use tokio::time::sleep;

/// Panics if the stream emits anything within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Next stream item, or `None` if nothing arrives within `timeout_ms`.
pub async fn unwrap_stream<S>(stream: &mut S, timeout_ms: u64) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    tokio::select! {
        item = stream.next() => item,
        () = sleep(Duration::from_millis(timeout_ms)) => None,
    }
}

/// Asserts the next event is a value equal to `expected`.
pub async fn expect_next_value<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = Event<T>> + Unpin,
    T: PartialEq + Debug,
{
    let event = stream.next().await.expect("expected next event");
    match event {
        Event::Value(value) => assert_eq!(value, expected),
        Event::Error(err) => panic!("expected value {expected:?}, got error: {err}"),
    }
}

/// Asserts the next event is an error and returns it.
pub async fn expect_terminal_error<S, T>(stream: &mut S) -> StreamError
where
    S: Stream<Item = Event<T>> + Unpin,
    T: Debug,
{
    let event = stream.next().await.expect("expected next event");
    match event {
        Event::Value(value) => panic!("expected error, got value: {value:?}"),
        Event::Error(err) => err,
    }
}
