// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream combinators for the Rivulet reactive-stream engine.
//!
//! All operators work on streams of [`Event<T>`](rivulet_core::Event) and are
//! transparent to failure: no operator swallows an error, and the combining
//! operators ([`merge_with`](MergeExt::merge_with),
//! [`combine_latest`](CombineLatestExt::combine_latest)) forward the first
//! error and drop their remaining sources.
//!
//! # Operators
//!
//! - [`map_values`](MapValuesExt::map_values) - per-event transform
//! - [`filter_values`](FilterValuesExt::filter_values) - suppress
//!   non-matching values
//! - [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed)
//!   - drop consecutive duplicates, compared as they exist at this stage of
//!   the pipeline
//! - [`merge_with`](MergeExt::merge_with) - arrival-order merge of same-typed
//!   streams
//! - [`combine_latest`](CombineLatestExt::combine_latest) - pair the latest
//!   values of two streams
//!
//! # One-shot producers
//!
//! - [`OneShot`] - runs its future once, at construction, and replays the
//!   cached result to every subscriber
//! - [`Deferred`] - invokes its factory afresh for every subscriber, so side
//!   effects run once per subscription

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod combine_latest;
pub mod deferred;
pub mod distinct_until_changed;
pub mod filter_values;
pub mod map_values;
pub mod merge;
pub mod one_shot;
pub mod prelude;

use core::pin::Pin;
use futures::Stream;
use rivulet_core::Event;

/// Boxed event stream, the common currency of the combining operators.
pub type EventBoxStream<T> = Pin<Box<dyn Stream<Item = Event<T>> + Send>>;

pub use self::combine_latest::CombineLatestExt;
pub use self::deferred::{Deferred, ProducerStream};
pub use self::distinct_until_changed::DistinctUntilChangedExt;
pub use self::filter_values::FilterValuesExt;
pub use self::map_values::MapValuesExt;
pub use self::merge::MergeExt;
pub use self::one_shot::OneShot;
