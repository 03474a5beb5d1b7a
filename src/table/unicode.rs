// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

use super::AliasTable;

/// Table of all Unicode emoji, provided by the [`emojis`] crate.
///
/// Alias names are derived from the CLDR short names, see
/// [`alias_name_from_cldr()`]. Glyphs with or without variation
/// selectors and skin tone modifiers are recognized.
///
/// Skin tone and hair style components that appear on their own,
/// e.g. `🏽` or `🦰`, are resolved as well, although the [`emojis`]
/// data only contains them as parts of other emoji.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeTable;

impl AliasTable for UnicodeTable {
    fn lookup(&self, glyph: &str) -> Option<Cow<'_, str>> {
        if let Some(emoji) = emojis::get(glyph) {
            return Some(Cow::Owned(alias_name_from_cldr(emoji.name())));
        }
        let name = COMPONENTS
            .iter()
            .find_map(|&(component, name)| (component == glyph).then_some(name))?;
        Some(Cow::Borrowed(name))
    }
}

/// Components with their alias names.
const COMPONENTS: &[(&str, &str)] = &[
    ("\u{1f3fb}", "light_skin_tone"),
    ("\u{1f3fc}", "medium-light_skin_tone"),
    ("\u{1f3fd}", "medium_skin_tone"),
    ("\u{1f3fe}", "medium-dark_skin_tone"),
    ("\u{1f3ff}", "dark_skin_tone"),
    ("\u{1f9b0}", "red_hair"),
    ("\u{1f9b1}", "curly_hair"),
    ("\u{1f9b2}", "bald"),
    ("\u{1f9b3}", "white_hair"),
];

const FLAG_PREFIX: &str = "flag: ";

const REMOVED_CHARS_REGEX_STR: &str = r#"[:,"“”]"#;

static REMOVED_CHARS_REGEX: OnceLock<Regex> = OnceLock::new();

fn removed_chars_regex() -> &'static Regex {
    REMOVED_CHARS_REGEX.get_or_init(|| REMOVED_CHARS_REGEX_STR.parse().unwrap())
}

const WHITESPACE_REGEX_STR: &str = r"\s+";

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| WHITESPACE_REGEX_STR.parse().unwrap())
}

/// Derive an alias name from a CLDR short name.
///
/// Flags are named by their region only. Colons, commas, and quotation
/// marks are removed and whitespace is replaced by underscores.
///
/// ```
/// use emojialias::table::alias_name_from_cldr;
///
/// assert_eq!("grinning_face", alias_name_from_cldr("grinning face"));
/// assert_eq!("family_man_woman_girl", alias_name_from_cldr("family: man, woman, girl"));
/// assert_eq!("Japan", alias_name_from_cldr("flag: Japan"));
/// ```
#[must_use]
pub fn alias_name_from_cldr(cldr_name: &str) -> String {
    let name = cldr_name.strip_prefix(FLAG_PREFIX).unwrap_or(cldr_name);
    let name = removed_chars_regex().replace_all(name, "");
    whitespace_regex().replace_all(name.trim(), "_").into_owned()
}
