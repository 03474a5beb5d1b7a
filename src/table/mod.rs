// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

//! Mappings from glyphs to alias names

use std::{borrow::Cow, collections::HashMap, rc::Rc, str::FromStr, sync::Arc};

use itertools::Itertools as _;

#[cfg(feature = "emojis")]
mod unicode;
#[cfg(feature = "emojis")]
pub use self::unicode::{UnicodeTable, alias_name_from_cldr};

/// Maps glyphs to alias names.
///
/// Alias names are returned without delimiters. Lookups must be
/// deterministic and free of side effects.
pub trait AliasTable {
    /// Look up the alias name of a glyph.
    ///
    /// Returns `None` if the glyph is unknown.
    #[must_use]
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>>;
}

impl<T> AliasTable for &T
where
    T: AliasTable + ?Sized,
{
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(glyph)
    }
}

impl<T> AliasTable for Box<T>
where
    T: AliasTable + ?Sized,
{
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(glyph)
    }
}

impl<T> AliasTable for Rc<T>
where
    T: AliasTable + ?Sized,
{
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(glyph)
    }
}

impl<T> AliasTable for Arc<T>
where
    T: AliasTable + ?Sized,
{
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(glyph)
    }
}

/// In-memory table with exact matching of glyphs.
///
/// Can be parsed from text with one `<glyph>\t<name>` entry per line.
/// Empty lines and comment lines that are either `#` or start with `# `
/// are ignored.
///
/// ```
/// use emojialias::{Resolver, StaticTable};
///
/// let table: StaticTable = "# custom aliases\n🦀\tferris\n".parse().unwrap();
/// assert_eq!(":ferris:", Resolver::new(table).alias("🦀").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTable {
    entries: HashMap<String, String>,
}

impl StaticTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from `(glyph, name)` pairs.
    ///
    /// Later pairs replace earlier ones with the same glyph.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        pairs.into_iter().collect()
    }

    /// Insert or replace an entry.
    ///
    /// Returns the replaced name.
    pub fn insert(&mut self, glyph: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.entries.insert(glyph.into(), name.into())
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AliasTable for StaticTable {
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>> {
        self.entries.get(glyph).map(|name| Cow::Borrowed(name.as_str()))
    }
}

impl<G, N> FromIterator<(G, N)> for StaticTable
where
    G: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (G, N)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(glyph, name)| (glyph.into(), name.into()))
            .collect();
        Self { entries }
    }
}

impl<G, N> Extend<(G, N)> for StaticTable
where
    G: Into<String>,
    N: Into<String>,
{
    fn extend<I: IntoIterator<Item = (G, N)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(glyph, name)| (glyph.into(), name.into())));
    }
}

fn is_comment_line(line: &str) -> bool {
    line == "#" || line.starts_with("# ")
}

impl FromStr for StaticTable {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut table = Self::new();
        for (line_idx, line) in input.lines().enumerate() {
            let line_no = line_idx + 1;
            if line.trim().is_empty() || is_comment_line(line) {
                continue;
            }
            let Some((glyph, name)) = line.split('\t').collect_tuple() else {
                return Err(anyhow::anyhow!(
                    "line {line_no}: expected `<glyph>\\t<name>` instead of '{line}'"
                ));
            };
            if glyph.is_empty() {
                return Err(anyhow::anyhow!("line {line_no}: empty glyph"));
            }
            let name = name.trim();
            if name.is_empty() {
                return Err(anyhow::anyhow!("line {line_no}: empty name for glyph '{glyph}'"));
            }
            table.insert(glyph, name);
        }
        tracing::debug!(entries = table.len(), "parsed alias table");
        Ok(table)
    }
}
