// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

//! Tokens

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation as _;

use crate::AliasTable;

/// A segment of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A glyph that has been resolved by the mapping.
    Emoji {
        /// The glyph as found in the text
        glyph: &'a str,

        /// The alias name without delimiters
        name: Cow<'a, str>,
    },

    /// Unresolved text, passed through as is.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// Check for an emoji token.
    #[must_use]
    pub const fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji { .. })
    }

    /// The covered slice of the original text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match *self {
            Self::Emoji { glyph, .. } => glyph,
            Self::Text(text) => text,
        }
    }
}

/// Iterator over the [`Token`]s of a text.
///
/// Adjacent unresolved text is merged into a single [`Token::Text`].
#[derive(Debug)]
pub struct Tokens<'a, T> {
    table: &'a T,
    text: &'a str,
    pos: usize,
    pending: Option<Token<'a>>,
}

impl<'a, T> Tokens<'a, T>
where
    T: AliasTable,
{
    pub(crate) const fn new(table: &'a T, text: &'a str) -> Self {
        Self {
            table,
            text,
            pos: 0,
            pending: None,
        }
    }

    /// Find the longest glyph at `pos` that is resolved by the mapping.
    ///
    /// Candidates never extend beyond the extended grapheme cluster
    /// that starts at `pos`.
    fn resolve_at(&self, pos: usize) -> Option<(&'a str, Cow<'a, str>)> {
        let table = self.table;
        let text = self.text;
        let cluster = text[pos..].graphemes(true).next()?;
        cluster.char_indices().rev().find_map(|(idx, ch)| {
            let glyph = &cluster[..idx + ch.len_utf8()];
            table.lookup(glyph).map(|name| (glyph, name))
        })
    }
}

impl<'a, T> Iterator for Tokens<'a, T>
where
    T: AliasTable,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }
        let text = self.text;
        let start = self.pos;
        while let Some(next_char) = text[self.pos..].chars().next() {
            let Some((glyph, name)) = self.resolve_at(self.pos) else {
                // Continue within the cluster, its remainder might still
                // contain a resolvable glyph.
                self.pos += next_char.len_utf8();
                continue;
            };
            let end = self.pos;
            self.pos += glyph.len();
            let emoji = Token::Emoji { glyph, name };
            if end > start {
                self.pending = Some(emoji);
                return Some(Token::Text(&text[start..end]));
            }
            return Some(emoji);
        }
        (self.pos > start).then_some(Token::Text(&text[start..]))
    }
}

impl<T> std::iter::FusedIterator for Tokens<'_, T> where T: AliasTable {}
