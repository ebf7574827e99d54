//! Limbu script transliteration.
//!
//! Converts between Limbu (U+1900..U+194F), a Roman phonetic romanization and
//! an approximate Devanagari rendering. Tables are built once from embedded
//! TOML and shared read-only; every conversion is a pure function of the
//! tables and the input, and never fails.

pub mod gloss;
pub mod script;
pub mod table;
pub mod tokenizer;
pub mod translit;

pub use gloss::{gloss_lookup, months_table};
pub use table::{Script, Tables};
pub use translit::{devanagari_to_limbu, limbu_to_devanagari, limbu_to_roman, roman_to_limbu};
