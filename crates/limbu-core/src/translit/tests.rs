use proptest::prelude::*;

use super::*;
use crate::script::normalize;
use crate::table::{DEFAULT_DEVANAGARI_TOML, DEFAULT_ROMAN_TOML};

fn tables() -> Tables {
    Tables::from_toml(DEFAULT_ROMAN_TOML, DEFAULT_DEVANAGARI_TOML).unwrap()
}

fn limbu_block() -> impl Iterator<Item = char> {
    ('\u{1900}'..='\u{194F}').filter(|&c| Tables::global().roman().forward().get(c).is_some())
}

#[test]
fn test_empty_input() {
    let t = tables();
    assert_eq!(t.limbu_to_roman("", None), "");
    assert_eq!(t.roman_to_limbu(""), "");
    assert_eq!(t.limbu_to_devanagari(""), "");
    assert_eq!(t.devanagari_to_limbu(""), "");
}

#[test]
fn test_limbu_to_devanagari_ka() {
    assert_eq!(limbu_to_devanagari("\u{1901}"), "क");
}

#[test]
fn test_devanagari_gya_conjunct() {
    assert_eq!(devanagari_to_limbu("ज्ञ"), "\u{191D}");
    assert_eq!(devanagari_to_limbu("ज"), "\u{1908}");
    assert_eq!(devanagari_to_limbu("त्र"), "\u{191E}");
}

#[test]
fn test_roman_ka_is_base_consonant() {
    assert_eq!(roman_to_limbu("ka"), "\u{1901}");
    assert_eq!(roman_to_limbu("kha"), "\u{1902}");
    assert_eq!(roman_to_limbu("-k"), "\u{1930}");
}

#[test]
fn test_longest_match_prefers_final_over_prefix() {
    let t = tables();
    assert_eq!(t.roman_to_limbu("-ng"), "\u{1931}");
    assert_eq!(t.roman_to_limbu("-n"), "\u{1934}");
    assert_eq!(t.roman_to_limbu("-rʲ"), "\u{192A}");
    assert_eq!(t.roman_to_limbu("-r"), "\u{1937}");
    assert_eq!(t.roman_to_limbu("ai"), "\u{1924}");
    assert_eq!(t.roman_to_limbu("ee"), "\u{1923}");
}

#[test]
fn test_limbu_to_roman_word() {
    let t = tables();
    assert_eq!(
        t.limbu_to_roman("\u{1901}\u{1921}\u{1912}\u{1920}", None),
        "kaibaa"
    );
    assert_eq!(t.limbu_to_roman("\u{1947}\u{1948}\u{1945}", None), "12?");
}

#[test]
fn test_roman_word_splits_greedily() {
    let t = tables();
    assert_eq!(t.roman_to_limbu("kaiba"), "\u{1901}\u{1921}\u{1912}");
    assert_eq!(t.roman_to_limbu("~muk 3"), "\u{1939} \u{1949}");
}

#[test]
fn test_combining_sequence_is_composed_before_decoding() {
    // "-m" followed by COMBINING DOT BELOW is small ANUSVARA, not small MA.
    assert_eq!(roman_to_limbu("-m\u{0323}"), "\u{1932}");
    assert_eq!(roman_to_limbu("-m"), "\u{1936}");
}

#[test]
fn test_passthrough_keeps_position() {
    let t = tables();
    assert_eq!(t.limbu_to_devanagari("x\u{1901}Y"), "xकY");
    assert_eq!(t.limbu_to_roman("\u{1901}, \u{1902}", None), "ka, kha");
    assert_eq!(t.roman_to_limbu("KA ka"), "KA \u{1901}");
    assert_eq!(t.devanagari_to_limbu("abc क"), "abc \u{1901}");
}

#[test]
fn test_unassigned_limbu_codepoint_passes_through() {
    let t = tables();
    assert_eq!(t.limbu_to_roman("\u{193C}", None), "\u{193C}");
    assert_eq!(t.limbu_to_devanagari("\u{191F}"), "\u{191F}");
}

#[test]
fn test_trace_lines() {
    let t = tables();
    let mut trace = Vec::new();
    let out = t.limbu_to_roman("\u{1901}z", Some(&mut trace));
    assert_eq!(out, "kaz");
    assert_eq!(
        trace,
        vec![
            "Limbu char \u{1901} (U+1901) => Roman 'ka'".to_string(),
            "Limbu char z (U+007A) unmapped, passing through.".to_string(),
        ]
    );
}

#[test]
fn test_roman_round_trip_every_codepoint() {
    let t = tables();
    for c in limbu_block() {
        let s = c.to_string();
        let roman = t.limbu_to_roman(&s, None);
        assert_eq!(
            t.roman_to_limbu(&roman),
            s,
            "round trip mismatch at U+{:04X} via {roman:?}",
            c as u32
        );
    }
}

#[test]
fn test_devanagari_round_trip_except_shared_ra() {
    let t = tables();
    for c in limbu_block() {
        let s = c.to_string();
        let dev = t.limbu_to_devanagari(&s);
        let back = t.devanagari_to_limbu(&dev);
        if c == '\u{1937}' {
            // Small RA shares virama + RA with subjoined RA, which owns the token.
            assert_eq!(back, "\u{192A}");
        } else {
            assert_eq!(back, s, "round trip mismatch at U+{:04X}", c as u32);
        }
    }
}

#[test]
fn test_custom_tables_are_used() {
    let roman = r#"
script = "roman"
merge_order = ["consonant"]
[categories.consonant]
"ᤁ" = "k"
"#;
    let devanagari = r#"
script = "devanagari"
merge_order = ["consonant"]
[categories.consonant]
"ᤁ" = "क"
"#;
    let t = Tables::from_toml(roman, devanagari).unwrap();
    assert_eq!(t.limbu_to_roman("\u{1901}\u{1902}", None), "k\u{1902}");
    assert_eq!(t.roman_to_limbu("ka"), "\u{1901}a");
}

proptest! {
    #[test]
    fn prop_trace_does_not_change_output(text in any::<String>()) {
        let mut trace = Vec::new();
        let traced = limbu_to_roman(&text, Some(&mut trace));
        prop_assert_eq!(traced, limbu_to_roman(&text, None));
        prop_assert_eq!(trace.len(), normalize(&text).chars().count());
    }

    #[test]
    fn prop_conversions_are_total(text in any::<String>()) {
        let normalized_len = normalize(&text).chars().count();
        prop_assert!(limbu_to_roman(&text, None).chars().count() >= normalized_len);
        prop_assert!(limbu_to_devanagari(&text).chars().count() >= normalized_len);
        prop_assert!(roman_to_limbu(&text).chars().count() <= normalized_len);
        prop_assert!(devanagari_to_limbu(&text).chars().count() <= normalized_len);
    }

    #[test]
    fn prop_unmapped_text_passes_through(text in "[A-Z ]{0,32}") {
        prop_assert_eq!(&limbu_to_roman(&text, None), &text);
        prop_assert_eq!(&limbu_to_devanagari(&text), &text);
        prop_assert_eq!(&roman_to_limbu(&text), &text);
        prop_assert_eq!(&devanagari_to_limbu(&text), &text);
    }

    #[test]
    fn prop_limbu_sequences_encode_per_codepoint(
        chars in prop::collection::vec(0x1900u32..=0x194F, 0..16)
    ) {
        let text: String = chars.into_iter().filter_map(char::from_u32).collect();
        let text = normalize(&text);
        let expected: String = text
            .chars()
            .map(|c| {
                Tables::global()
                    .roman()
                    .forward()
                    .get(c)
                    .map(str::to_string)
                    .unwrap_or_else(|| c.to_string())
            })
            .collect();
        prop_assert_eq!(limbu_to_roman(&text, None), expected);
    }
}
