// SPDX-FileCopyrightText: The emojialias authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use proptest::prelude::*;

use super::*;

const GRINNING_FACE: &str = "😀";
const RED_HEART: &str = "❤\u{fe0f}";
const FAMILY: &str = "👨\u{200d}👩\u{200d}👧";
const MAN: &str = "👨";

fn stub_table() -> StaticTable {
    StaticTable::from_pairs([
        (GRINNING_FACE, "grinning_face"),
        (RED_HEART, "red_heart"),
        ("❤", "red_heart"),
        (FAMILY, "family_man_woman_girl"),
        (MAN, "man"),
    ])
}

fn stub_resolver() -> Resolver<StaticTable> {
    Resolver::new(stub_table())
}

#[test]
fn alias_of_known_glyphs() {
    let resolver = stub_resolver();
    assert_eq!(":grinning_face:", resolver.alias(GRINNING_FACE).unwrap());
    assert_eq!(":red_heart:", resolver.alias(RED_HEART).unwrap());
    assert_eq!(":family_man_woman_girl:", resolver.alias(FAMILY).unwrap());
}

#[test]
fn alias_is_deterministic() {
    let resolver = stub_resolver();
    assert_eq!(
        resolver.alias(GRINNING_FACE).unwrap(),
        resolver.alias(GRINNING_FACE).unwrap()
    );
    assert_eq!(resolver.alias("xyz"), resolver.alias("xyz"));
}

#[test]
fn should_fail_to_alias_empty_input() {
    let err = stub_resolver().alias("").unwrap_err();
    assert_eq!("", err.input());
}

#[test]
fn should_fail_to_alias_non_emoji() {
    let err = stub_resolver().alias("xyz").unwrap_err();
    assert_eq!("xyz", err.input());
    assert_eq!("no alias for \"xyz\"", err.to_string());
}

#[test]
fn should_fail_to_alias_text_around_an_emoji() {
    // The input is handed over to the mapping as is.
    assert!(stub_resolver().alias(" 😀").is_err());
    assert!(stub_resolver().alias("😀😀").is_err());
}

#[test]
fn should_not_round_trip_aliases() {
    assert!(stub_resolver().alias(":grinning_face:").is_err());
}

#[test]
fn alias_with_custom_delimiters() {
    let resolver = Resolver::with_options(
        stub_table(),
        Options::default().with_delimiters(Delimiters::new("<", ">")),
    );
    assert_eq!("<grinning_face>", resolver.alias(GRINNING_FACE).unwrap());
    assert_eq!("I <red_heart> Rust", resolver.demojize("I ❤️ Rust"));
    let resolver = Resolver::with_options(
        stub_table(),
        Options::default().with_delimiters(Delimiters::new("", "")),
    );
    assert_eq!("red_heart", resolver.alias(RED_HEART).unwrap());
}

#[test]
fn alias_into_string_types() {
    let resolver = stub_resolver();
    let alias: String = resolver.alias_into(RED_HEART).unwrap();
    assert_eq!(":red_heart:", alias.as_str());
    #[cfg(feature = "compact_str")]
    {
        let alias: compact_str::CompactString = resolver.alias_into(RED_HEART).unwrap();
        assert_eq!(":red_heart:", alias.as_str());
    }
    #[cfg(feature = "smol_str")]
    {
        let alias: smol_str::SmolStr = resolver.alias_into(RED_HEART).unwrap();
        assert_eq!(":red_heart:", alias.as_str());
    }
}

#[test]
fn is_emoji() {
    let resolver = stub_resolver();
    assert!(resolver.is_emoji(GRINNING_FACE));
    assert!(!resolver.is_emoji(""));
    assert!(!resolver.is_emoji("a"));
}

#[test]
fn demojize_replaces_all_emoji() {
    let resolver = stub_resolver();
    assert_eq!("I :red_heart: Rust", resolver.demojize("I ❤️ Rust"));
    assert_eq!(":grinning_face::grinning_face:", resolver.demojize("😀😀"));
    assert_eq!(
        "Hi :grinning_face:!\n:red_heart:",
        resolver.demojize("Hi 😀!\n❤")
    );
}

#[test]
fn demojize_passes_through_unresolved_text() {
    let resolver = stub_resolver();
    assert_eq!("", resolver.demojize(""));
    assert_eq!("xyz", resolver.demojize("xyz"));
    assert_eq!("🦀 ünïcödé", resolver.demojize("🦀 ünïcödé"));
}

#[test]
fn demojize_prefers_the_longest_glyph() {
    let resolver = stub_resolver();
    assert_eq!(":family_man_woman_girl:", resolver.demojize(FAMILY));
}

#[test]
fn demojize_resolves_parts_of_unknown_clusters() {
    let resolver = stub_resolver();
    // The ZWJ sequence is unknown as a whole, but starts with a known glyph.
    let family = "👨\u{200d}👩\u{200d}👦";
    assert_eq!(":man:\u{200d}👩\u{200d}👦", resolver.demojize(family));
}

#[test]
fn demojized_displays_like_demojize() {
    let resolver = stub_resolver();
    let text = "😀 and ❤️";
    assert_eq!(
        resolver.demojize(text),
        resolver.demojized(text).to_string()
    );
    assert_eq!(
        "[:grinning_face: and :red_heart:]",
        format!("[{}]", resolver.demojized(text))
    );
}

#[test]
fn tokens_merge_adjacent_text() {
    let resolver = stub_resolver();
    let tokens = resolver.tokens("ab😀cd ❤\u{fe0f}").collect::<Vec<_>>();
    assert_eq!(
        vec![
            Token::Text("ab"),
            Token::Emoji {
                glyph: GRINNING_FACE,
                name: Cow::Borrowed("grinning_face"),
            },
            Token::Text("cd "),
            Token::Emoji {
                glyph: RED_HEART,
                name: Cow::Borrowed("red_heart"),
            },
        ],
        tokens
    );
}

#[test]
fn tokens_of_empty_text() {
    assert_eq!(None, stub_resolver().tokens("").next());
}

#[test]
fn tokens_cover_the_whole_text() {
    let resolver = stub_resolver();
    let text = "x😀y❤️z👨\u{200d}👩\u{200d}👧!";
    let joined = resolver.tokens(text).map(|token| token.as_str()).collect::<String>();
    assert_eq!(text, joined);
}

#[test]
fn emoji_count() {
    let resolver = stub_resolver();
    assert_eq!(0, resolver.emoji_count(""));
    assert_eq!(0, resolver.emoji_count("xyz"));
    assert_eq!(3, resolver.emoji_count("😀 ❤️ 😀"));
    assert_eq!(1, resolver.emoji_count(FAMILY));
}

#[test]
fn resolver_with_borrowed_table() {
    let table = stub_table();
    let resolver = Resolver::new(&table);
    assert_eq!(":grinning_face:", resolver.alias(GRINNING_FACE).unwrap());
}

proptest! {
    #[test]
    fn demojize_is_identity_without_emoji(text in "[a-zA-Z0-9 .,;:!?\\n\\t]*") {
        prop_assert_eq!(&text, &stub_resolver().demojize(&text));
    }

    #[test]
    fn demojize_is_deterministic(text in any::<String>()) {
        let resolver = stub_resolver();
        prop_assert_eq!(resolver.demojize(&text), resolver.demojize(&text));
    }

    #[test]
    fn tokens_preserve_arbitrary_text(text in any::<String>()) {
        let joined = stub_resolver()
            .tokens(&text)
            .map(|token| token.as_str())
            .collect::<String>();
        prop_assert_eq!(text, joined);
    }
}

#[cfg(feature = "emojis")]
mod unicode {
    use super::FAMILY;
    use crate::{alias, default_resolver, demojize};

    #[test]
    fn alias_of_unicode_emoji() {
        assert_eq!(":grinning_face:", alias("😀").unwrap());
        assert_eq!(":red_heart:", alias("❤️").unwrap());
        assert_eq!(":red_heart:", alias("❤").unwrap());
        assert_eq!(":Japan:", alias("🇯🇵").unwrap());
        assert_eq!(":family_man_woman_girl:", alias(FAMILY).unwrap());
    }

    #[test]
    fn alias_of_skin_tone_variant() {
        let alias = alias("👍🏽").unwrap();
        assert!(alias.starts_with(":thumbs_up"));
        assert!(alias.ends_with(':'));
    }

    #[test]
    fn should_fail_to_alias_non_emoji() {
        assert!(alias("").is_err());
        assert!(alias("xyz").is_err());
    }

    #[test]
    fn demojize_unicode_text() {
        assert_eq!("I :red_heart: Rust", demojize("I ❤️ Rust"));
        assert_eq!("xyz", demojize("xyz"));
        assert_eq!("Hello :Japan: :grinning_face:", demojize("Hello 🇯🇵 😀"));
        assert_eq!("x:medium_skin_tone:y", demojize("x\u{1f3fd}y"));
    }

    #[test]
    fn alias_of_every_unicode_emoji() {
        let glyphs = emojis::iter().flat_map(|emoji| {
            std::iter::once(emoji).chain(emoji.skin_tones().into_iter().flatten())
        });
        for emoji in glyphs {
            let glyph = emoji.as_str();
            let alias = alias(glyph).unwrap();
            let name = alias
                .strip_prefix(':')
                .and_then(|alias| alias.strip_suffix(':'))
                .unwrap();
            assert!(!name.is_empty(), "{glyph}");
            assert!(!name.contains(':'), "{glyph}: {alias}");
            assert!(!name.contains(char::is_whitespace), "{glyph}: {alias}");
            assert_eq!(alias, demojize(glyph), "{glyph}");
        }
    }

    #[test]
    fn default_resolver_is_shared() {
        assert!(std::ptr::eq(default_resolver(), default_resolver()));
    }
}
