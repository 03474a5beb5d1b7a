// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Translate emoji glyphs into their textual aliases, e.g. `😀` into `:grinning_face:`.
//!
//! The mapping from glyphs to alias names is not part of this crate's logic.
//! It is injected into a [`Resolver`] as an [`AliasTable`].
//!
//! Refer to [`docs`] for more information.

use std::fmt;

use derive_more::{Display, Error};

pub mod docs;

mod options;
pub use self::options::{Delimiters, Options};

mod string;
pub use self::string::StringTyped;

pub mod table;
#[cfg(feature = "emojis")]
pub use self::table::UnicodeTable;
pub use self::table::{AliasTable, StaticTable};

mod token;
pub use self::token::{Token, Tokens};

/// The mapping could not resolve the input into an alias.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("no alias for {input:?}")]
pub struct ResolutionFailure {
    input: String,
}

impl ResolutionFailure {
    /// The unresolved input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Resolves emoji glyphs into delimited aliases.
#[derive(Debug, Clone, Default)]
pub struct Resolver<T> {
    table: T,
    options: Options,
}

impl<T> Resolver<T>
where
    T: AliasTable,
{
    /// Create a resolver with default [`Options`].
    #[must_use]
    pub fn new(table: T) -> Self {
        Self::with_options(table, Options::default())
    }

    /// Create a resolver with custom [`Options`].
    #[must_use]
    pub const fn with_options(table: T, options: Options) -> Self {
        Self { table, options }
    }

    /// The mapping.
    #[must_use]
    pub const fn table(&self) -> &T {
        &self.table
    }

    /// The options.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Resolve a glyph into its delimited alias.
    ///
    /// The input is passed to the mapping as is. It is not checked that it
    /// contains exactly one emoji.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionFailure`] if the mapping has no alias for `emoji`.
    pub fn alias(&self, emoji: &str) -> Result<String, ResolutionFailure> {
        self.alias_into(emoji)
    }

    /// Resolve a glyph into its delimited alias using a custom string type.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionFailure`] if the mapping has no alias for `emoji`.
    pub fn alias_into<S: StringTyped>(&self, emoji: &str) -> Result<S, ResolutionFailure> {
        let Some(name) = self.table.lookup(emoji) else {
            tracing::trace!(input = emoji, "unresolved glyph");
            return Err(ResolutionFailure {
                input: emoji.to_owned(),
            });
        };
        Ok(S::from_format_args(format_args!("{}", self.options.delimiters.wrap(&name))))
    }

    /// Check if the mapping resolves the given glyph.
    #[must_use]
    pub fn is_emoji(&self, glyph: &str) -> bool {
        self.table.lookup(glyph).is_some()
    }

    /// Split text into emoji and plain text segments.
    #[must_use]
    pub const fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a, T> {
        Tokens::new(&self.table, text)
    }

    /// Count the emoji in `text`.
    #[must_use]
    pub fn emoji_count(&self, text: &str) -> usize {
        self.tokens(text).filter(Token::is_emoji).count()
    }

    /// Replace all emoji in `text` by their delimited aliases.
    ///
    /// Everything that the mapping does not recognize is passed through unchanged.
    #[must_use]
    pub fn demojize(&self, text: &str) -> String {
        self.demojized(text).to_string()
    }

    /// Display `text` with all emoji replaced by their delimited aliases.
    #[must_use]
    pub const fn demojized<'a>(&'a self, text: &'a str) -> Demojized<'a, T> {
        Demojized {
            resolver: self,
            text,
        }
    }
}

/// Text with all emoji replaced by their aliases.
///
/// See [`Resolver::demojized()`].
#[derive(Debug)]
pub struct Demojized<'a, T> {
    resolver: &'a Resolver<T>,
    text: &'a str,
}

impl<T> fmt::Display for Demojized<'_, T>
where
    T: AliasTable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiters = &self.resolver.options.delimiters;
        for token in self.resolver.tokens(self.text) {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Emoji { name, .. } => write!(f, "{}", delimiters.wrap(&name))?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "emojis")]
static DEFAULT_RESOLVER: std::sync::LazyLock<Resolver<UnicodeTable>> =
    std::sync::LazyLock::new(|| {
        tracing::debug!("initializing default resolver");
        Resolver::new(UnicodeTable)
    });

/// The shared resolver backed by [`UnicodeTable`] with default [`Options`].
#[cfg(feature = "emojis")]
#[must_use]
pub fn default_resolver() -> &'static Resolver<UnicodeTable> {
    &DEFAULT_RESOLVER
}

/// Resolve a glyph into its alias using the [`default_resolver()`].
///
/// ```
/// assert_eq!(":red_heart:", emojialias::alias("❤️").unwrap());
/// assert!(emojialias::alias("xyz").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`ResolutionFailure`] if `emoji` is not a known emoji.
#[cfg(feature = "emojis")]
pub fn alias(emoji: &str) -> Result<String, ResolutionFailure> {
    default_resolver().alias(emoji)
}

/// Replace all emoji in `text` using the [`default_resolver()`].
///
/// ```
/// assert_eq!("I :red_heart: Rust", emojialias::demojize("I ❤️ Rust"));
/// ```
#[cfg(feature = "emojis")]
#[must_use]
pub fn demojize(text: &str) -> String {
    default_resolver().demojize(text)
}

#[cfg(test)]
mod tests;
