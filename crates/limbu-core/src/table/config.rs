use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use super::{Category, Script};
use crate::script::{codepoint_label, is_limbu};

/// One target script's table as written in TOML.
///
/// Category sub-tables map a single Limbu codepoint to its rendering. The
/// `merge_order` decides which codepoint owns a token when two renderings
/// coincide: categories listed later overwrite earlier ones.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub script: Script,
    pub merge_order: Vec<Category>,
    #[serde(default)]
    pub accepted_collisions: Vec<String>,
    pub categories: BTreeMap<Category, BTreeMap<String, String>>,
}

impl TableConfig {
    /// Entries of one category as `(codepoint, rendering)` pairs in codepoint order.
    ///
    /// Keys were checked by [`parse_table_toml`], so every key holds exactly
    /// one char.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = (char, &str)> + '_ {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|m| m.iter())
            .filter_map(|(k, v)| single_char(k).map(|c| (c, v.as_str())))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("[categories] table is empty")]
    Empty,
    #[error("category {0} has no entries")]
    EmptyCategory(Category),
    #[error("key {0:?} is not a single Limbu codepoint")]
    NotLimbu(String),
    #[error("empty value for key {0}")]
    EmptyValue(String),
    #[error("{codepoint} appears in both {first} and {second}")]
    DuplicateCodepoint {
        codepoint: String,
        first: Category,
        second: Category,
    },
    #[error("merge_order lists {0} more than once")]
    RepeatedInMergeOrder(Category),
    #[error("merge_order does not list category {0}")]
    MissingFromMergeOrder(Category),
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse and validate a table TOML document.
pub fn parse_table_toml(toml_str: &str) -> Result<TableConfig, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.categories.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut owner: HashMap<char, Category> = HashMap::new();
    for (&category, entries) in &config.categories {
        if entries.is_empty() {
            return Err(TableConfigError::EmptyCategory(category));
        }
        for (key, value) in entries {
            let c = single_char(key)
                .filter(|&c| is_limbu(c))
                .ok_or_else(|| TableConfigError::NotLimbu(key.clone()))?;
            if value.is_empty() {
                return Err(TableConfigError::EmptyValue(codepoint_label(c)));
            }
            if let Some(first) = owner.insert(c, category) {
                return Err(TableConfigError::DuplicateCodepoint {
                    codepoint: codepoint_label(c),
                    first,
                    second: category,
                });
            }
        }
    }

    let mut seen = BTreeSet::new();
    for &category in &config.merge_order {
        if !seen.insert(category) {
            return Err(TableConfigError::RepeatedInMergeOrder(category));
        }
    }
    if let Some(&missing) = config.categories.keys().find(|c| !seen.contains(c)) {
        return Err(TableConfigError::MissingFromMergeOrder(missing));
    }

    Ok(config)
}

/// Read a table TOML document from disk and validate it.
pub fn load_table_file(path: &Path) -> Result<TableConfig, TableConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| TableConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_table_toml(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{DEFAULT_DEVANAGARI_TOML, DEFAULT_ROMAN_TOML};

    const MINIMAL: &str = r#"
script = "roman"
merge_order = ["final", "consonant"]

[categories.consonant]
"ᤁ" = "ka"

[categories.final]
"ᤰ" = "-k"
"#;

    #[test]
    fn parse_minimal_toml() {
        let config = parse_table_toml(MINIMAL).unwrap();
        assert_eq!(config.script, Script::Roman);
        assert_eq!(config.merge_order, vec![Category::Final, Category::Consonant]);
        assert!(config.accepted_collisions.is_empty());
        let consonants: Vec<_> = config.entries(Category::Consonant).collect();
        assert_eq!(consonants, vec![('\u{1901}', "ka")]);
    }

    #[test]
    fn parse_default_tables() {
        let roman = parse_table_toml(DEFAULT_ROMAN_TOML).unwrap();
        let devanagari = parse_table_toml(DEFAULT_DEVANAGARI_TOML).unwrap();
        assert_eq!(roman.script, Script::Roman);
        assert_eq!(devanagari.script, Script::Devanagari);
        for config in [&roman, &devanagari] {
            let total: usize = config.categories.values().map(|m| m.len()).sum();
            assert_eq!(total, 71);
            assert_eq!(config.categories.len(), 7);
        }
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableConfigError::Parse(_)));
    }

    #[test]
    fn error_unknown_category() {
        let toml = r#"
script = "roman"
merge_order = []
[categories.ligature]
"ᤁ" = "ka"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableConfigError::Parse(_)));
    }

    #[test]
    fn error_empty_categories() {
        let toml = "script = \"roman\"\nmerge_order = []\n[categories]\n";
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableConfigError::Empty));
    }

    #[test]
    fn error_non_limbu_key() {
        let toml = r#"
script = "roman"
merge_order = ["consonant"]
[categories.consonant]
"k" = "ka"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableConfigError::NotLimbu(ref k) if k == "k"));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
script = "roman"
merge_order = ["consonant"]
[categories.consonant]
"ᤁᤠ" = "ka"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableConfigError::NotLimbu(_)));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
script = "roman"
merge_order = ["consonant"]
[categories.consonant]
"ᤁ" = ""
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableConfigError::EmptyValue(ref k) if k == "U+1901"));
    }

    #[test]
    fn error_duplicate_codepoint() {
        let toml = r#"
script = "roman"
merge_order = ["consonant", "final"]
[categories.consonant]
"ᤁ" = "ka"
[categories.final]
"ᤁ" = "-k"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableConfigError::DuplicateCodepoint { .. }));
    }

    #[test]
    fn error_merge_order_incomplete() {
        let toml = r#"
script = "roman"
merge_order = ["consonant"]
[categories.consonant]
"ᤁ" = "ka"
[categories.final]
"ᤰ" = "-k"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableConfigError::MissingFromMergeOrder(Category::Final)
        ));
    }

    #[test]
    fn error_merge_order_repeated() {
        let toml = r#"
script = "roman"
merge_order = ["consonant", "consonant"]
[categories.consonant]
"ᤁ" = "ka"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableConfigError::RepeatedInMergeOrder(Category::Consonant)
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roman.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let config = load_table_file(&path).unwrap();
        assert_eq!(config.categories.len(), 2);

        let err = load_table_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, TableConfigError::Io { .. }));
    }
}
