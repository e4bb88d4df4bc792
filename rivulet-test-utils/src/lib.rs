// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Rivulet reactive-stream engine.
//!
//! This crate is for development and testing only, not for production code.
//!
//! # Key pieces
//!
//! - [`test_channel`] / [`event_channel`] - imperative push side plus an
//!   event-stream side, for driving operators from tests
//! - [`helpers`] - awaiting-with-timeout and no-emission assertions
//! - [`ErrorInjectingStream`] - inject a terminal error at a chosen position
//! - [`ManualTimer`] - a deterministic [`Timer`](rivulet_time::Timer) that
//!   only advances when told to
//! - [`typing`] - the canonical search-box input bursts used across the
//!   operator tests

pub mod error_injection;
pub mod helpers;
pub mod manual_timer;
pub mod test_channel;
pub mod typing;

pub use self::error_injection::ErrorInjectingStream;
pub use self::manual_timer::ManualTimer;
pub use self::test_channel::{event_channel, test_channel, TestEventStream};
