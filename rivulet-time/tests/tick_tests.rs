// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

use futures::StreamExt;
use rivulet_test_utils::helpers::{assert_no_element_emitted, unwrap_stream};
use rivulet_time::ticks;
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn ticks_arrive_at_the_configured_cadence() {
    // Arrange
    pause();
    let mut stopwatch = ticks(Duration::from_millis(100)).boxed();

    // Assert - nothing before the first period elapses
    assert_no_element_emitted(&mut stopwatch, 0).await;

    advance(Duration::from_millis(100)).await;
    assert_eq!(unwrap_stream(&mut stopwatch, 10).await.unwrap().unwrap(), 1);

    advance(Duration::from_millis(100)).await;
    assert_eq!(unwrap_stream(&mut stopwatch, 10).await.unwrap().unwrap(), 2);

    advance(Duration::from_millis(100)).await;
    assert_eq!(unwrap_stream(&mut stopwatch, 10).await.unwrap().unwrap(), 3);
}

#[tokio::test]
async fn tick_counts_are_sequential_from_one() {
    pause();
    let mut stopwatch = ticks(Duration::from_secs(1)).boxed();

    for expected in 1..=5u64 {
        advance(Duration::from_secs(1)).await;
        assert_eq!(
            unwrap_stream(&mut stopwatch, 10).await.unwrap().unwrap(),
            expected
        );
    }
}

#[tokio::test]
async fn dropped_tick_stream_stops_ticking() {
    pause();
    let mut stopwatch = ticks(Duration::from_millis(100)).boxed();

    advance(Duration::from_millis(100)).await;
    assert_eq!(unwrap_stream(&mut stopwatch, 10).await.unwrap().unwrap(), 1);

    // Dropping cancels the scheduled deadline outright
    drop(stopwatch);
    advance(Duration::from_secs(10)).await;
}
