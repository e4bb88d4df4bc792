// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

use futures::{FutureExt, StreamExt};
use rivulet_core::{Event, StateRelay, StreamError};

#[tokio::test]
async fn subscriber_immediately_receives_initial_value() {
    // Arrange
    let relay = StateRelay::new(0);

    // Act - no send() at all
    let mut stream = relay.subscribe();

    // Assert
    assert_eq!(stream.next().await, Some(Event::Value(0)));
    assert!(stream.next().now_or_never().is_none());
}

#[tokio::test]
async fn send_updates_value_then_notifies() {
    let relay = StateRelay::new(0);
    let mut stream = relay.subscribe();

    relay.send(7);

    assert_eq!(relay.value(), 7);
    assert_eq!(stream.next().await, Some(Event::Value(0)));
    assert_eq!(stream.next().await, Some(Event::Value(7)));
}

#[tokio::test]
async fn late_subscriber_receives_current_value_not_history() {
    let relay = StateRelay::new(1);
    relay.send(2);
    relay.send(3);

    let mut late = relay.subscribe();

    assert_eq!(late.next().await, Some(Event::Value(3)));
    assert!(late.next().now_or_never().is_none());
}

#[tokio::test]
async fn replay_precedes_subsequent_sends() {
    let relay = StateRelay::new("initial");
    let mut stream = relay.subscribe();

    relay.send("next");

    assert_eq!(stream.next().await, Some(Event::Value("initial")));
    assert_eq!(stream.next().await, Some(Event::Value("next")));
}

#[tokio::test]
async fn error_is_terminal_and_closes() {
    let relay = StateRelay::new(0);
    let mut stream = relay.subscribe();

    relay.error(StreamError::stream_error("boom"));

    assert_eq!(stream.next().await, Some(Event::Value(0)));
    assert!(matches!(stream.next().await, Some(Event::Error(_))));
    assert_eq!(stream.next().await, None);
    assert!(relay.is_closed());
}

#[tokio::test]
async fn subscribe_after_close_yields_ended_stream_without_replay() {
    let relay = StateRelay::new(9);
    relay.close();

    let mut stream = relay.subscribe();
    assert_eq!(stream.next().await, None);
}
