// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::StreamError;

/// A stream event that is either a value or a terminal error.
///
/// Every Rivulet stream has item type `Event<T>`. Operators transform the
/// `Value` half and propagate the `Error` half unchanged, following Rx-style
/// semantics where an error ends the sequence for well-behaved consumers.
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// A successful value.
    Value(T),
    /// A failure that terminates the stream.
    Error(StreamError),
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Value(a), Event::Value(b)) => a == b,
            // Errors are never equal
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Event<T> {}

impl<T> Event<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Event::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Event::Error(_))
    }

    /// Converts to `Option<T>`, discarding an error.
    pub fn ok(self) -> Option<T> {
        match self {
            Event::Value(v) => Some(v),
            Event::Error(_) => None,
        }
    }

    /// Converts to `Option<StreamError>`, discarding a value.
    pub fn err(self) -> Option<StreamError> {
        match self {
            Event::Value(_) => None,
            Event::Error(e) => Some(e),
        }
    }

    /// Maps the contained value with `f`, propagating errors unchanged.
    pub fn map<U, F>(self, f: F) -> Event<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Event::Value(v) => Event::Value(f(v)),
            Event::Error(e) => Event::Error(e),
        }
    }

    /// Maps the contained value with a function that can itself fail.
    pub fn and_then<U, F>(self, f: F) -> Event<U>
    where
        F: FnOnce(T) -> Event<U>,
    {
        match self {
            Event::Value(v) => f(v),
            Event::Error(e) => Event::Error(e),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the event is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            Event::Value(v) => v,
            Event::Error(e) => panic!("called `Event::unwrap()` on an `Error` event: {e:?}"),
        }
    }

    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics if the event is a `Value`.
    pub fn unwrap_err(self) -> StreamError
    where
        T: core::fmt::Debug,
    {
        match self {
            Event::Value(v) => panic!("called `Event::unwrap_err()` on a `Value` event: {v:?}"),
            Event::Error(e) => e,
        }
    }
}

impl<T> From<T> for Event<T> {
    fn from(value: T) -> Self {
        Event::Value(value)
    }
}
