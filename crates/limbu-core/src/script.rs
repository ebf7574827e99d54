//! Character-level Unicode classification for Limbu text.

/// Check the full Limbu block (U+1900..U+194F), unassigned codepoints
/// included.
pub fn is_limbu(c: char) -> bool {
    ('\u{1900}'..='\u{194F}').contains(&c)
}

/// `U+XXXX` label used in diagnostics.
pub fn codepoint_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Canonical composition (NFC), applied to every input before lookup.
pub fn normalize(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    text.nfc().collect()
}
