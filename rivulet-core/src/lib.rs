// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types and emitter primitives for the Rivulet reactive-stream engine.
//!
//! This crate provides the building blocks every other Rivulet crate is
//! composed from:
//!
//! - [`Event`] - the item type flowing through every stream (a value or a
//!   terminal error)
//! - [`StreamError`] - the error half of an [`Event`]
//! - [`Relay`] - a hot, fire-and-forget channel (no replay, no buffering past
//!   the subscriber set)
//! - [`StateRelay`] - a hot channel that holds a current value and replays it
//!   to every new subscriber
//! - [`CancellationToken`] - cooperative, idempotent cancellation
//! - [`StreamTask`] - a spawned background task that cancels on drop

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod cancellation;
pub mod error;
pub mod event;
pub mod mutex;
pub mod relay;
pub mod state_relay;
pub mod task;

pub use self::cancellation::CancellationToken;
pub use self::error::{Result, StreamError};
pub use self::event::Event;
pub use self::relay::{Relay, RelayStream};
pub use self::state_relay::StateRelay;
pub use self::task::StreamTask;
