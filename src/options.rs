// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

//! Options

use std::fmt;

/// Strings that enclose an alias name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    /// Prepended to the name
    pub start: String,

    /// Appended to the name
    pub end: String,
}

impl Delimiters {
    /// The conventional colon delimiters, e.g. `:red_heart:`.
    pub const COLON: &'static str = ":";

    /// Create custom delimiters.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Enclose an alias name.
    #[must_use]
    pub const fn wrap<'a>(&'a self, name: &'a str) -> impl fmt::Display + 'a {
        Wrapped {
            delimiters: self,
            name,
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(Self::COLON, Self::COLON)
    }
}

struct Wrapped<'a> {
    delimiters: &'a Delimiters,
    name: &'a str,
}

impl fmt::Display for Wrapped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            delimiters: Delimiters { start, end },
            name,
        } = self;
        write!(f, "{start}{name}{end}")
    }
}

/// Options of a [`Resolver`](crate::Resolver)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Enclose alias names
    pub delimiters: Delimiters,
}

impl Options {
    /// Replace the delimiters.
    #[must_use]
    pub fn with_delimiters(self, delimiters: Delimiters) -> Self {
        Self { delimiters }
    }
}
