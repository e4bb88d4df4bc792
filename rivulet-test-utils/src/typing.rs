// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canonical search-box input fixtures.

/// A user typing "combine" one keystroke at a time, faster than any
/// reasonable debounce interval.
#[must_use]
pub fn typing_burst() -> Vec<&'static str> {
    vec!["c", "co", "com", "comb", "combi", "combin", "combine"]
}

/// Repeated queries differing only in case, for the distinct-until-changed
/// placement-sensitivity tests.
#[must_use]
pub fn swift_queries() -> Vec<&'static str> {
    vec!["swift", "swift", "SWIFT"]
}
