// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

//! The clock is injectable: these tests drive debounce and ticks with a
//! deterministic manual timer instead of the tokio clock.

use futures::{FutureExt, StreamExt};
use rivulet_test_utils::{test_channel, ManualTimer};
use rivulet_time::{ticks_with, DebounceExt, Timer};
use std::time::Duration;

#[tokio::test]
async fn debounce_fires_exactly_at_the_manual_deadline() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let (tx, stream) = test_channel::<&str>();
    let mut debounced = stream
        .debounce_with(Duration::from_millis(500), timer.clone())
        .boxed();

    // Act
    tx.send("swift")?;
    assert!(debounced.next().now_or_never().is_none());

    // One millisecond short of the deadline: nothing
    timer.advance(Duration::from_millis(499));
    assert!(debounced.next().now_or_never().is_none());

    // Crossing it: the pending value fires
    timer.advance(Duration::from_millis(1));
    assert_eq!(debounced.next().await.unwrap().unwrap(), "swift");
    Ok(())
}

#[tokio::test]
async fn new_input_resets_the_manual_deadline() -> anyhow::Result<()> {
    let timer = ManualTimer::new();
    let (tx, stream) = test_channel::<&str>();
    let mut debounced = stream
        .debounce_with(Duration::from_millis(500), timer.clone())
        .boxed();

    tx.send("first")?;
    assert!(debounced.next().now_or_never().is_none());

    timer.advance(Duration::from_millis(400));
    tx.send("second")?;
    assert!(debounced.next().now_or_never().is_none());

    // The original deadline (t=500) passes without a firing
    timer.advance(Duration::from_millis(400));
    assert!(debounced.next().now_or_never().is_none());

    // The reset deadline (t=900) fires with the superseding value
    timer.advance(Duration::from_millis(100));
    assert_eq!(debounced.next().await.unwrap().unwrap(), "second");
    Ok(())
}

#[tokio::test]
async fn manual_clock_reads_back_its_position() {
    let timer = ManualTimer::new();
    assert_eq!(timer.now(), Duration::ZERO);

    timer.advance(Duration::from_secs(2));
    assert_eq!(timer.now(), Duration::from_secs(2));
}

#[tokio::test]
async fn ticks_follow_the_manual_clock() {
    let timer = ManualTimer::new();
    let mut ticks = ticks_with(Duration::from_millis(100), timer.clone()).boxed();

    assert!(ticks.next().now_or_never().is_none());

    timer.advance(Duration::from_millis(100));
    assert_eq!(ticks.next().await.unwrap().unwrap(), 1);
    assert!(ticks.next().now_or_never().is_none());

    timer.advance(Duration::from_millis(100));
    assert_eq!(ticks.next().await.unwrap().unwrap(), 2);
}
