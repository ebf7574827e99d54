use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{Category, Script, TableConfig};
use crate::script::codepoint_label;
use crate::tokenizer::TokenPriorityList;

#[derive(Debug, thiserror::Error)]
pub enum TableBuildError {
    #[error("{script} token {token:?} is produced by {codepoints} but not listed in accepted_collisions")]
    UndeclaredCollision {
        script: Script,
        token: String,
        codepoints: String,
    },
    #[error("{script} token {token:?} is listed in accepted_collisions but only one codepoint produces it")]
    StaleCollision { script: Script, token: String },
}

/// Limbu codepoint → target string.
#[derive(Debug, Clone, Default)]
pub struct CodepointMapping {
    map: HashMap<char, String>,
}

impl CodepointMapping {
    pub fn get(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries in codepoint order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut entries: Vec<(char, &str)> =
            self.map.iter().map(|(&c, s)| (c, s.as_str())).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries.into_iter()
    }
}

/// Target token → Limbu codepoint, with the ranked token list used for decoding.
#[derive(Debug, Clone, Default)]
pub struct ReverseTokenTable {
    map: HashMap<String, (char, Category)>,
    priority: TokenPriorityList,
}

impl ReverseTokenTable {
    pub fn get(&self, token: &str) -> Option<char> {
        self.map.get(token).map(|&(c, _)| c)
    }

    pub fn category(&self, token: &str) -> Option<Category> {
        self.map.get(token).map(|&(_, cat)| cat)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn priority(&self) -> &TokenPriorityList {
        &self.priority
    }
}

/// A token produced by more than one codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub token: String,
    /// Codepoint that owns the token after merging.
    pub winner: (char, Category),
    /// Codepoints whose reverse entry was overwritten, in merge order.
    pub overwritten: Vec<(char, Category)>,
}

/// A token that is a strict prefix of another token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixOverlap {
    pub shorter: String,
    pub shorter_category: Category,
    pub longer: String,
    pub longer_category: Category,
}

/// Forward and reverse tables for one target script.
#[derive(Debug, Clone)]
pub struct ScriptTable {
    script: Script,
    forward: CodepointMapping,
    reverse: ReverseTokenTable,
    collisions: Vec<Collision>,
}

impl ScriptTable {
    /// Build the forward mapping from every category and the reverse table
    /// by merging categories in `merge_order`.
    ///
    /// A later category overwrites an earlier one on a shared token. Every
    /// such overwrite must be listed in `accepted_collisions`, and every
    /// listed token must actually collide.
    pub fn build(config: &TableConfig) -> Result<ScriptTable, TableBuildError> {
        let script = config.script;

        let mut forward = HashMap::new();
        for &category in config.categories.keys() {
            for (c, token) in config.entries(category) {
                forward.insert(c, token.to_string());
            }
        }

        let mut reverse: HashMap<String, (char, Category)> = HashMap::new();
        let mut overwritten: BTreeMap<String, Vec<(char, Category)>> = BTreeMap::new();
        for &category in &config.merge_order {
            for (c, token) in config.entries(category) {
                if let Some(previous) = reverse.insert(token.to_string(), (c, category)) {
                    overwritten.entry(token.to_string()).or_default().push(previous);
                }
            }
        }

        let collisions: Vec<Collision> = overwritten
            .into_iter()
            .map(|(token, overwritten)| Collision {
                winner: reverse[&token],
                token,
                overwritten,
            })
            .collect();

        for collision in &collisions {
            if !config.accepted_collisions.contains(&collision.token) {
                let codepoints = std::iter::once(collision.winner)
                    .chain(collision.overwritten.iter().copied())
                    .map(|(c, cat)| format!("{} ({cat})", codepoint_label(c)))
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(TableBuildError::UndeclaredCollision {
                    script,
                    token: collision.token.clone(),
                    codepoints,
                });
            }
        }
        for token in &config.accepted_collisions {
            if !collisions.iter().any(|c| &c.token == token) {
                return Err(TableBuildError::StaleCollision {
                    script,
                    token: token.clone(),
                });
            }
        }

        let priority =
            TokenPriorityList::new(reverse.iter().map(|(token, &(c, _))| (token.clone(), c)));

        debug!(
            %script,
            codepoints = forward.len(),
            tokens = reverse.len(),
            collisions = collisions.len(),
            "built script table"
        );

        Ok(ScriptTable {
            script,
            forward: CodepointMapping { map: forward },
            reverse: ReverseTokenTable {
                map: reverse,
                priority,
            },
            collisions,
        })
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn forward(&self) -> &CodepointMapping {
        &self.forward
    }

    pub fn reverse(&self) -> &ReverseTokenTable {
        &self.reverse
    }

    /// Tokens shared by several codepoints and how the merge order resolved them.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Every pair of reverse tokens where one is a strict prefix of the other.
    ///
    /// Longest-match decoding always prefers the longer token at a single
    /// position, so these pairs only matter for sequences that could be split
    /// more than one way.
    pub fn prefix_overlaps(&self) -> Vec<PrefixOverlap> {
        let mut overlaps = Vec::new();
        for (shorter, &(_, shorter_category)) in &self.reverse.map {
            for (longer, &(_, longer_category)) in &self.reverse.map {
                if longer.len() > shorter.len() && longer.starts_with(shorter.as_str()) {
                    overlaps.push(PrefixOverlap {
                        shorter: shorter.clone(),
                        shorter_category,
                        longer: longer.clone(),
                        longer_category,
                    });
                }
            }
        }
        overlaps.sort_by(|a, b| (&a.shorter, &a.longer).cmp(&(&b.shorter, &b.longer)));
        overlaps
    }
}
