// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

//! The remaining recipe shapes wired through the whole engine: merged button
//! taps, combine-latest form validation, state-relay replay, and the two
//! one-shot producer flavors.

use parking_lot::Mutex;
use rivulet::prelude::*;
use rivulet::{Deferred, OneShot, Relay, StateRelay};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn merged_button_taps_arrive_in_press_order() {
    // Arrange
    let accept = Relay::<&'static str>::new();
    let decline = Relay::<&'static str>::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let _subscription = accept
        .subscribe()
        .merge_with(vec![decline.subscribe()])
        .subscribe(
            {
                let log = log.clone();
                move |tap| log.lock().push(tap)
            },
            |err| panic!("unexpected error: {err}"),
        );

    // Act - A, B, C, A
    accept.send("A");
    settle().await;
    decline.send("B");
    settle().await;
    accept.send("C");
    settle().await;
    decline.send("A");
    settle().await;

    // Assert - order preserved, no dedup
    assert_eq!(*log.lock(), vec!["A", "B", "C", "A"]);
}

#[tokio::test]
async fn form_becomes_valid_once_both_fields_have_input() {
    let username = Relay::<String>::new();
    let password = Relay::<String>::new();
    let validity = Arc::new(Mutex::new(Vec::new()));

    let _subscription = username
        .subscribe()
        .combine_latest(password.subscribe())
        .map_values(|(user, pass): (String, String)| user.len() >= 3 && pass.len() >= 8)
        .subscribe(
            {
                let validity = validity.clone();
                move |valid| validity.lock().push(valid)
            },
            |err| panic!("unexpected error: {err}"),
        );

    // Only one side filled in: no judgement yet
    username.send("ali".to_string());
    settle().await;
    assert!(validity.lock().is_empty());

    password.send("pass".to_string());
    settle().await;
    assert_eq!(*validity.lock(), vec![false]);

    password.send("password123".to_string());
    settle().await;
    assert_eq!(*validity.lock(), vec![false, true]);
}

#[tokio::test]
async fn state_relay_replays_current_value_to_the_ui() {
    let counter = StateRelay::new(0);
    let shown = Arc::new(Mutex::new(Vec::new()));

    let _subscription = counter.subscribe().subscribe(
        {
            let shown = shown.clone();
            move |value| shown.lock().push(value)
        },
        |err| panic!("unexpected error: {err}"),
    );

    settle().await;
    assert_eq!(*shown.lock(), vec![0]);

    counter.send(1);
    settle().await;
    assert_eq!(*shown.lock(), vec![0, 1]);
}

#[tokio::test]
async fn deferred_refetches_while_one_shot_replays() {
    let fetches = Arc::new(AtomicUsize::new(0));

    // Plain one-shot: the "network call" happens right here, once
    let eager = OneShot::new({
        let fetches = fetches.clone();
        async move {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>("cached payload")
        }
    });

    let eager_first = Arc::new(Mutex::new(None));
    let eager_second = Arc::new(Mutex::new(None));
    let _s1 = eager.subscribe().subscribe(
        {
            let slot = eager_first.clone();
            move |value| *slot.lock() = Some(value)
        },
        |err| panic!("unexpected error: {err}"),
    );
    let _s2 = eager.subscribe().subscribe(
        {
            let slot = eager_second.clone();
            move |value| *slot.lock() = Some(value)
        },
        |err| panic!("unexpected error: {err}"),
    );
    settle().await;

    assert_eq!(*eager_first.lock(), Some("cached payload"));
    assert_eq!(*eager_second.lock(), Some("cached payload"));
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    // Deferred: every subscriber triggers its own fetch
    let refetches = Arc::new(AtomicUsize::new(0));
    let lazy = Deferred::new({
        let refetches = refetches.clone();
        move || {
            let refetches = refetches.clone();
            async move {
                refetches.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>("fresh payload")
            }
        }
    });
    assert_eq!(refetches.load(Ordering::SeqCst), 0);

    let lazy_results = Arc::new(Mutex::new(Vec::new()));
    let _s3 = lazy.subscribe().subscribe(
        {
            let results = lazy_results.clone();
            move |value| results.lock().push(value)
        },
        |err| panic!("unexpected error: {err}"),
    );
    let _s4 = lazy.subscribe().subscribe(
        {
            let results = lazy_results.clone();
            move |value| results.lock().push(value)
        },
        |err| panic!("unexpected error: {err}"),
    );
    settle().await;

    assert_eq!(*lazy_results.lock(), vec!["fresh payload", "fresh payload"]);
    assert_eq!(refetches.load(Ordering::SeqCst), 2);
}
