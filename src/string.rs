// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

//! String types for aliases

use std::fmt;

/// Common trait for the string types of resolved aliases.
pub trait StringTyped: AsRef<str> + Sized {
    /// Create from a borrowed string slice.
    #[must_use]
    fn from_str(from_str: &str) -> Self;

    /// Create from an owned string.
    #[must_use]
    fn from_string(from_string: String) -> Self {
        Self::from_str(&from_string)
    }

    /// Create from format arguments.
    #[must_use]
    fn from_format_args(from_format_args: fmt::Arguments<'_>) -> Self {
        Self::from_string(fmt::format(from_format_args))
    }

    /// Borrow the string slice.
    #[must_use]
    fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl StringTyped for String {
    fn from_str(from_str: &str) -> Self {
        from_str.to_owned()
    }

    fn from_string(from_string: String) -> Self {
        from_string
    }
}

#[cfg(feature = "compact_str")]
impl StringTyped for compact_str::CompactString {
    fn from_str(from_str: &str) -> Self {
        from_str.into()
    }

    fn from_string(from_string: String) -> Self {
        from_string.into()
    }

    fn from_format_args(from_format_args: fmt::Arguments<'_>) -> Self {
        compact_str::format_compact!("{from_format_args}")
    }
}

#[cfg(feature = "smol_str")]
impl StringTyped for smol_str::SmolStr {
    fn from_str(from_str: &str) -> Self {
        from_str.into()
    }

    fn from_string(from_string: String) -> Self {
        from_string.into()
    }

    fn from_format_args(from_format_args: fmt::Arguments<'_>) -> Self {
        smol_str::format_smolstr!("{from_format_args}")
    }
}
