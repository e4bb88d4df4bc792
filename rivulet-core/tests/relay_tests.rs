// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

use futures::{FutureExt, StreamExt};
use rivulet_core::{Event, Relay, StreamError};

#[tokio::test]
async fn send_without_subscribers_is_silently_dropped() {
    // Arrange
    let relay = Relay::<i32>::new();

    // Act - nobody is listening
    relay.send(42);

    // Assert - a later subscriber sees nothing
    let mut stream = relay.subscribe();
    assert!(stream.next().now_or_never().is_none());
}

#[tokio::test]
async fn fan_out_reaches_all_subscribers_in_attachment_order() {
    // Arrange
    let relay = Relay::<&'static str>::new();
    let mut first = relay.subscribe();
    let mut second = relay.subscribe();

    // Act
    relay.send("tap");

    // Assert
    assert_eq!(first.next().await, Some(Event::Value("tap")));
    assert_eq!(second.next().await, Some(Event::Value("tap")));
}

#[tokio::test]
async fn late_subscribers_do_not_receive_past_values() {
    let relay = Relay::<i32>::new();
    let mut early = relay.subscribe();

    relay.send(1);

    let mut late = relay.subscribe();
    relay.send(2);

    assert_eq!(early.next().await, Some(Event::Value(1)));
    assert_eq!(early.next().await, Some(Event::Value(2)));
    // The late subscriber only sees the value sent after it attached
    assert_eq!(late.next().await, Some(Event::Value(2)));
    assert!(late.next().now_or_never().is_none());
}

#[tokio::test]
async fn error_is_delivered_then_relay_closes() {
    let relay = Relay::<i32>::new();
    let mut stream = relay.subscribe();

    relay.error(StreamError::stream_error("boom"));

    assert!(matches!(stream.next().await, Some(Event::Error(_))));
    assert_eq!(stream.next().await, None);
    assert!(relay.is_closed());
}

#[tokio::test]
async fn send_after_close_is_a_no_op() {
    let relay = Relay::<i32>::new();
    let mut stream = relay.subscribe();

    relay.close();
    relay.send(1);

    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn subscribe_after_close_yields_ended_stream() {
    let relay = Relay::<i32>::new();
    relay.close();

    let mut stream = relay.subscribe();
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn dropped_subscribers_are_pruned_on_next_send() {
    let relay = Relay::<i32>::new();
    let first = relay.subscribe();
    let _second = relay.subscribe();
    assert_eq!(relay.subscriber_count(), 2);

    drop(first);
    relay.send(1);

    assert_eq!(relay.subscriber_count(), 1);
}

#[tokio::test]
async fn clones_share_the_subscriber_set() {
    let relay = Relay::<i32>::new();
    let mut stream = relay.subscribe();

    relay.clone().send(5);

    assert_eq!(stream.next().await, Some(Event::Value(5)));
}
