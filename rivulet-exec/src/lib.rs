// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription runtime for Rivulet streams.
//!
//! [`SubscribeExt::subscribe`] attaches consumer callbacks to a composed
//! stream and returns a [`Subscription`] handle. The handle owns the driving
//! task and, transitively, every upstream resource the composed stream
//! allocated: cancelling it (or dropping it) tears the whole chain down, and
//! a cancelled subscription's callbacks never fire again, even if an
//! in-flight timer or async producer completes afterwards.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod logging;
pub mod subscribe;
pub mod subscription;

pub use self::subscribe::SubscribeExt;
pub use self::subscription::Subscription;
