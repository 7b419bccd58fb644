//! Wildlife scoring cards.
//!
//! `ScoringRules` holds one `ScoringTable` per species. It is passed by
//! reference into every scoring call and never mutated during a run, so
//! several games with different card sets can be scored side by side.
//!
//! Rules files use the shape
//! `{"elk": {"rule": "Straight lines of elk", "scoring": {"1": 2, "4+": 13}}}`.
//! Species missing from a file keep their Card A table.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::table::ScoringTable;
use crate::board::{Kind, PerSpecies, Species, ALL_SPECIES};

/// Errors raised while reading a rules file.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown species in rules: '{0}'")]
    UnknownSpecies(String),
}

/// One card entry as it appears in a rules file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub scoring: ScoringTable,
}

/// The complete set of wildlife scoring tables for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRules {
    tables: PerSpecies<ScoringTable>,
    rules: PerSpecies<String>,
}

impl Default for ScoringRules {
    /// Card A for every species.
    fn default() -> Self {
        ScoringRules {
            tables: PerSpecies::from_fn(card_a_table),
            rules: PerSpecies::from_fn(|s| card_a_rule(s).to_string()),
        }
    }
}

/// Returns the Card A table for a species.
pub fn card_a_table(species: Species) -> ScoringTable {
    match species {
        Species::Bear => ScoringTable::from_entries([("pair", 4)]),
        Species::Elk => ScoringTable::from_entries([("1", 2), ("2", 5), ("3", 9), ("4+", 13)]),
        Species::Salmon => {
            ScoringTable::from_entries([("1", 2), ("2", 5), ("3", 8), ("4", 11), ("5+", 14)])
        }
        Species::Hawk => ScoringTable::from_entries([
            ("1", 2),
            ("2", 5),
            ("3", 8),
            ("4", 11),
            ("5", 14),
            ("6", 18),
            ("7", 22),
            ("8+", 26),
        ]),
        Species::Fox => {
            ScoringTable::from_entries([("1", 1), ("2", 2), ("3", 3), ("4", 4), ("5", 5)])
        }
    }
}

fn card_a_rule(species: Species) -> &'static str {
    match species {
        Species::Bear => "Pairs of exactly 2 bears",
        Species::Elk => "Straight lines of elk",
        Species::Salmon => "Salmon runs",
        Species::Hawk => "Isolated hawks",
        Species::Fox => "Unique neighbors",
    }
}

impl ScoringRules {
    /// Returns the table for a species.
    pub fn table(&self, species: Species) -> &ScoringTable {
        &self.tables[species]
    }

    /// Returns the rule text for a species.
    pub fn rule(&self, species: Species) -> &str {
        &self.rules[species]
    }

    /// Replaces the table for one species, returning the updated rules.
    pub fn with_table(mut self, species: Species, table: ScoringTable) -> Self {
        self.tables[species] = table;
        self
    }

    /// Builds rules from parsed card entries keyed by species name.
    pub fn from_cards(cards: BTreeMap<String, CardEntry>) -> Result<Self, RulesError> {
        let mut rules = ScoringRules::default();
        let mut seen = PerSpecies::<bool>::default();
        for (name, card) in cards {
            let species =
                Species::from_name(&name).ok_or_else(|| RulesError::UnknownSpecies(name.clone()))?;
            rules.tables[species] = card.scoring;
            if let Some(rule) = card.rule {
                rules.rules[species] = rule;
            }
            seen[species] = true;
        }
        for species in ALL_SPECIES {
            if !seen[species] {
                tracing::warn!(
                    target: "cascadia::rules",
                    species = %species,
                    "rules.species_missing_using_card_a"
                );
            }
        }
        Ok(rules)
    }

    /// Parses rules from a JSON string.
    pub fn from_json(data: &str) -> Result<Self, RulesError> {
        let cards: BTreeMap<String, CardEntry> = serde_json::from_str(data)?;
        Self::from_cards(cards)
    }

    /// Loads rules from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let contents = fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Returns the rules in rules-file shape.
    pub fn to_cards(&self) -> BTreeMap<String, CardEntry> {
        self.tables
            .iter()
            .map(|(species, table)| {
                (
                    species.name().to_string(),
                    CardEntry {
                        rule: Some(self.rules[species].clone()),
                        scoring: table.clone(),
                    },
                )
            })
            .collect()
    }
}
