// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based stream operators with an injectable clock.
//!
//! - **[`Timer`] trait** - clock abstraction: schedule a deadline, read the
//!   current instant. Substitutable with a deterministic fake for testing.
//! - **[`TokioTimer`]** - the production clock.
//! - **[`DebounceExt`]** - trailing debounce: emit the last value of a burst
//!   once a quiet period has elapsed.
//! - **[`ticks`] / [`TickStream`]** - cancellable periodic tick source.
//!
//! # Example
//!
//! ```rust,no_run
//! use rivulet_time::DebounceExt;
//! use rivulet_core::Event;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let (tx, rx) = async_channel::unbounded::<&str>();
//! let mut debounced = rx.map(Event::Value).debounce(Duration::from_millis(300));
//!
//! tx.try_send("c").unwrap();
//! tx.try_send("co").unwrap();
//! tx.try_send("combine").unwrap();
//! // 300ms of quiet later, exactly "combine" comes out
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod debounce;
pub mod tick;
pub mod timer;

pub use self::debounce::DebounceExt;
pub use self::tick::{ticks, ticks_with, TickStream};
pub use self::timer::{Timer, TokioTimer};
