// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! A small reactive-stream engine: hot channels, pure combinators, a
//! timer-backed debounce, one-shot/deferred producers, and a callback
//! subscription runtime with transitive cancellation.
//!
//! ## Overview
//!
//! Values enter the engine through a [`Relay`] (fire-and-forget) or a
//! [`StateRelay`] (holds and replays a current value), flow through
//! combinators ([`map_values`](MapValuesExt::map_values),
//! [`filter_values`](FilterValuesExt::filter_values),
//! [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed),
//! [`merge_with`](MergeExt::merge_with),
//! [`combine_latest`](CombineLatestExt::combine_latest),
//! [`debounce`](DebounceExt::debounce)), and reach consumer callbacks via
//! [`subscribe`](SubscribeExt::subscribe), which returns a [`Subscription`]
//! whose cancellation tears the whole upstream chain down.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use rivulet::prelude::*;
//! use rivulet::Relay;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let searches = Relay::<String>::new();
//!
//!     let subscription = searches
//!         .subscribe()
//!         .filter_values(|query| !query.is_empty())
//!         .distinct_until_changed()
//!         .map_values(|query| query.to_lowercase())
//!         .debounce(Duration::from_millis(300))
//!         .subscribe(
//!             |query| println!("search for {query}"),
//!             |err| eprintln!("search stream failed: {err}"),
//!         );
//!
//!     searches.send("combine".to_string());
//!     subscription.cancel();
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use rivulet_core::{
    CancellationToken, Event, Relay, RelayStream, Result, StateRelay, StreamError, StreamTask,
};
pub use rivulet_exec::{SubscribeExt, Subscription};
pub use rivulet_stream::{
    CombineLatestExt, Deferred, DistinctUntilChangedExt, EventBoxStream, FilterValuesExt,
    MapValuesExt, MergeExt, OneShot, ProducerStream,
};
pub use rivulet_time::{ticks, ticks_with, DebounceExt, TickStream, Timer, TokioTimer};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rivulet_core::Event;
    pub use rivulet_exec::SubscribeExt;
    pub use rivulet_stream::prelude::*;
    pub use rivulet_time::DebounceExt;
}
