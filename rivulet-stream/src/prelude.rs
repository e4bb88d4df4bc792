// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenient single import for all combinator extension traits.
//!
//! ```rust,no_run
//! use rivulet_stream::prelude::*;
//! ```

pub use crate::combine_latest::CombineLatestExt;
pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::filter_values::FilterValuesExt;
pub use crate::map_values::MapValuesExt;
pub use crate::merge::MergeExt;
