//! Greedy leftmost-longest tokenizer for multi-character source scripts.
//!
//! Roman and Devanagari tokens span one or more chars, so decoding them back
//! into Limbu needs a tokenizer rather than a per-char lookup. At every
//! position the longest token that matches wins; when nothing matches, the
//! current char passes through and the cursor advances by one.

use std::collections::HashMap;

/// Tokens ranked longest first, bucketed by first char.
///
/// Equal-length tokens are ordered by their text. Two distinct tokens of the
/// same length can never both match at one position, so the tie-break only
/// makes the ranking reproducible.
#[derive(Debug, Clone, Default)]
pub struct TokenPriorityList {
    ranked: Vec<(String, char)>,
    by_first: HashMap<char, Vec<usize>>,
}

impl TokenPriorityList {
    /// Rank `(token, source codepoint)` pairs. Empty tokens are ignored.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (String, char)>,
    {
        let mut ranked: Vec<(String, char)> =
            tokens.into_iter().filter(|(t, _)| !t.is_empty()).collect();
        ranked.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, (token, _)) in ranked.iter().enumerate() {
            if let Some(first) = token.chars().next() {
                by_first.entry(first).or_default().push(i);
            }
        }

        Self { ranked, by_first }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Tokens in priority order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.ranked.iter().map(|(t, _)| t.as_str())
    }

    /// Longest token that is a prefix of `rest`, with its source codepoint.
    pub fn longest_match(&self, rest: &str) -> Option<(&str, char)> {
        let first = rest.chars().next()?;
        self.by_first
            .get(&first)?
            .iter()
            .map(|&i| &self.ranked[i])
            .find(|(token, _)| rest.starts_with(token.as_str()))
            .map(|(token, source)| (token.as_str(), *source))
    }
}

/// One decoded unit of tokenizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceUnit {
    /// A token matched and decoded to this Limbu codepoint.
    Matched(char),
    /// No token matched; the input char is carried over unchanged.
    Passthrough(char),
}

impl SourceUnit {
    pub fn as_char(self) -> char {
        match self {
            SourceUnit::Matched(c) | SourceUnit::Passthrough(c) => c,
        }
    }
}

/// Split `text` into source units using leftmost-longest matching.
pub fn tokenize(text: &str, priority: &TokenPriorityList) -> Vec<SourceUnit> {
    let mut units = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match priority.longest_match(rest) {
            Some((token, source)) => {
                units.push(SourceUnit::Matched(source));
                rest = &rest[token.len()..];
            }
            None => {
                units.push(SourceUnit::Passthrough(c));
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    units
}
