//! The four conversion entry points.
//!
//! Limbu is encoded one codepoint at a time through the forward mapping.
//! Roman and Devanagari are decoded with the longest-match tokenizer over the
//! reverse table. Anything without a mapping passes through unchanged, so
//! every conversion is total.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::script::{codepoint_label, normalize};
use crate::table::{Script, ScriptTable, Tables};
use crate::tokenizer::{tokenize, SourceUnit};

/// Encode Limbu text into `table`'s script, one codepoint at a time.
///
/// When `trace` is given, one line per input char is appended to it. The
/// returned string is the same with or without a trace.
pub fn encode(table: &ScriptTable, text: &str, mut trace: Option<&mut Vec<String>>) -> String {
    let script = table.script();
    let text = normalize(text);
    let _span = debug_span!("encode", %script, chars = text.chars().count()).entered();

    let mut out = String::with_capacity(text.len() * 2);
    let mut unmapped = 0usize;
    for c in text.chars() {
        match table.forward().get(c) {
            Some(token) => {
                if let Some(log) = trace.as_deref_mut() {
                    log.push(format!(
                        "Limbu char {c} ({}) => {script} '{token}'",
                        codepoint_label(c)
                    ));
                }
                out.push_str(token);
            }
            None => {
                if let Some(log) = trace.as_deref_mut() {
                    log.push(format!(
                        "Limbu char {c} ({}) unmapped, passing through.",
                        codepoint_label(c)
                    ));
                }
                unmapped += 1;
                out.push(c);
            }
        }
    }

    debug!(unmapped, output_len = out.len());
    out
}

/// Decode text in `table`'s script back into Limbu.
pub fn decode(table: &ScriptTable, text: &str) -> String {
    let script = table.script();
    let text = normalize(text);
    let _span = debug_span!("decode", %script, chars = text.chars().count()).entered();

    let units = tokenize(&text, table.reverse().priority());
    let unmapped = units
        .iter()
        .filter(|u| matches!(u, SourceUnit::Passthrough(_)))
        .count();
    debug!(units = units.len(), unmapped);

    units.into_iter().map(SourceUnit::as_char).collect()
}

impl Tables {
    pub fn limbu_to_roman(&self, text: &str, trace: Option<&mut Vec<String>>) -> String {
        encode(self.table(Script::Roman), text, trace)
    }

    pub fn roman_to_limbu(&self, text: &str) -> String {
        decode(self.table(Script::Roman), text)
    }

    pub fn limbu_to_devanagari(&self, text: &str) -> String {
        encode(self.table(Script::Devanagari), text, None)
    }

    pub fn devanagari_to_limbu(&self, text: &str) -> String {
        decode(self.table(Script::Devanagari), text)
    }
}

/// Limbu → Roman with the global tables, optionally tracing each char.
pub fn limbu_to_roman(text: &str, trace: Option<&mut Vec<String>>) -> String {
    Tables::global().limbu_to_roman(text, trace)
}

/// Roman → Limbu with the global tables.
pub fn roman_to_limbu(text: &str) -> String {
    Tables::global().roman_to_limbu(text)
}

/// Limbu → Devanagari with the global tables.
pub fn limbu_to_devanagari(text: &str) -> String {
    Tables::global().limbu_to_devanagari(text)
}

/// Devanagari → Limbu with the global tables.
pub fn devanagari_to_limbu(text: &str) -> String {
    Tables::global().devanagari_to_limbu(text)
}
