use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Conversion direction selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    LimbuToRoman,
    LimbuToDevanagari,
    DevanagariToLimbu,
    RomanToLimbu,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::LimbuToRoman,
        Mode::LimbuToDevanagari,
        Mode::DevanagariToLimbu,
        Mode::RomanToLimbu,
    ];

    /// Wire name, as sent by forms and the C API.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::LimbuToRoman => "limbu_to_roman",
            Mode::LimbuToDevanagari => "limbu_to_devanagari",
            Mode::DevanagariToLimbu => "devanagari_to_limbu",
            Mode::RomanToLimbu => "roman_to_limbu",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transliteration mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One conversion request. The mode stays a raw string so that unrecognized
/// values reach [`super::handle`] and get a diagnostic instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_mode")]
    pub translit_mode: String,
    #[serde(default)]
    pub user_input: String,
}

fn default_mode() -> String {
    Mode::default().as_str().to_string()
}

impl Request {
    pub fn new(mode: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            translit_mode: mode.into(),
            user_input: input.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub translit_mode: String,
    pub user_input: String,
    pub output_text: String,
    pub debug_logs: Vec<String>,
}

impl Response {
    /// Diagnostic lines joined with newlines.
    pub fn debug_log(&self) -> String {
        self.debug_logs.join("\n")
    }
}
