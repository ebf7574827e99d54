//! Limbu codepoint tables for each target script.
//!
//! Every target script (Roman, Devanagari) has a forward `CodepointMapping`
//! from Limbu codepoints to target strings and a `ReverseTokenTable` from
//! target tokens back to codepoints. Both are built once from an embedded
//! TOML document and never mutated afterwards.

mod builder;
mod config;

use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

pub use builder::{
    CodepointMapping, Collision, PrefixOverlap, ReverseTokenTable, ScriptTable, TableBuildError,
};
pub use config::{load_table_file, parse_table_toml, TableConfig, TableConfigError};

pub const DEFAULT_ROMAN_TOML: &str = include_str!("roman.toml");
pub const DEFAULT_DEVANAGARI_TOML: &str = include_str!("devanagari.toml");

static CUSTOM_TOML: OnceLock<(String, String)> = OnceLock::new();

/// Target script of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Roman,
    Devanagari,
}

impl Script {
    pub fn name(self) -> &'static str {
        match self {
            Script::Roman => "Roman",
            Script::Devanagari => "Devanagari",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-block of the Limbu range a codepoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Consonant,
    Vowel,
    Subjoined,
    Final,
    Sign,
    Punctuation,
    Digit,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Consonant => "consonant",
            Category::Vowel => "vowel",
            Category::Subjoined => "subjoined",
            Category::Final => "final",
            Category::Sign => "sign",
            Category::Punctuation => "punctuation",
            Category::Digit => "digit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("{script} table config: {source}")]
    Config {
        script: Script,
        source: TableConfigError,
    },
    #[error(transparent)]
    Build(#[from] TableBuildError),
    #[error("expected a {expected} table, found {found}")]
    WrongScript { expected: Script, found: Script },
    #[error("tables already initialized")]
    AlreadyInitialized,
}

/// The Roman and Devanagari tables together.
#[derive(Debug)]
pub struct Tables {
    roman: ScriptTable,
    devanagari: ScriptTable,
}

impl Tables {
    /// Set custom table TOML before the first `global()` call.
    pub fn init_custom(roman_toml: String, devanagari_toml: String) -> Result<(), TablesError> {
        // Validate eagerly
        Self::from_toml(&roman_toml, &devanagari_toml)?;
        CUSTOM_TOML
            .set((roman_toml, devanagari_toml))
            .map_err(|_| TablesError::AlreadyInitialized)
    }

    /// Get or initialize the global tables.
    pub fn global() -> &'static Tables {
        static INSTANCE: OnceLock<Tables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let (roman, devanagari) = CUSTOM_TOML
                .get()
                .map(|(r, d)| (r.as_str(), d.as_str()))
                .unwrap_or((DEFAULT_ROMAN_TOML, DEFAULT_DEVANAGARI_TOML));
            Self::from_toml(roman, devanagari).expect("limbu tables must build")
        })
    }

    /// Build both tables from TOML documents.
    pub fn from_toml(roman_toml: &str, devanagari_toml: &str) -> Result<Tables, TablesError> {
        let roman = parse_script(Script::Roman, roman_toml)?;
        let devanagari = parse_script(Script::Devanagari, devanagari_toml)?;
        Ok(Tables {
            roman: ScriptTable::build(&roman)?,
            devanagari: ScriptTable::build(&devanagari)?,
        })
    }

    pub fn table(&self, script: Script) -> &ScriptTable {
        match script {
            Script::Roman => &self.roman,
            Script::Devanagari => &self.devanagari,
        }
    }

    pub fn roman(&self) -> &ScriptTable {
        &self.roman
    }

    pub fn devanagari(&self) -> &ScriptTable {
        &self.devanagari
    }
}

fn parse_script(expected: Script, toml_str: &str) -> Result<TableConfig, TablesError> {
    let config = parse_table_toml(toml_str).map_err(|source| TablesError::Config {
        script: expected,
        source,
    })?;
    if config.script != expected {
        return Err(TablesError::WrongScript {
            expected,
            found: config.script,
        });
    }
    Ok(config)
}
