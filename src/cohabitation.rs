// Copyright 2025 Cowboy AI, LLC.

//! Genus cohabitation data
//!
//! Cohabitation is recorded per genus pair and is logically symmetric: the
//! table may hold only one direction of a pair, so lookups treat
//! `(g1, g2)` and `(g2, g1)` as equivalent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::enumerations::CohabitationType;

/// Recorded cohabitation outcome of two plant genera
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneraCohabitation {
    /// First genus of the pair
    pub genus_1: String,
    /// Second genus of the pair
    pub genus_2: String,
    /// Cohabitation outcome for the pair
    pub cohabitation: CohabitationType,
}

impl GeneraCohabitation {
    /// Create a cohabitation entry
    pub fn new(
        genus_1: impl Into<String>,
        genus_2: impl Into<String>,
        cohabitation: CohabitationType,
    ) -> Self {
        Self {
            genus_1: genus_1.into(),
            genus_2: genus_2.into(),
            cohabitation,
        }
    }
}

/// Lookup table over genus pairs, keyed by the unordered pair
#[derive(Debug, Clone, Default)]
pub struct CohabitationTable {
    entries: HashMap<(String, String), CohabitationType>,
}

impl CohabitationTable {
    /// Build a table from a list of entries
    ///
    /// The first entry for an unordered pair wins; a later duplicate with a
    /// different outcome is dropped with a warning so the graph builder
    /// never sees two contradictory values for one pair.
    pub fn from_entries(entries: &[GeneraCohabitation]) -> Self {
        let mut table = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = unordered_key(&entry.genus_1, &entry.genus_2);
            match table.get(&key) {
                None => {
                    table.insert(key, entry.cohabitation);
                }
                Some(existing) if *existing != entry.cohabitation => {
                    warn!(
                        genus_1 = %entry.genus_1,
                        genus_2 = %entry.genus_2,
                        kept = %existing,
                        dropped = %entry.cohabitation,
                        "conflicting cohabitation entry for genus pair dropped"
                    );
                }
                Some(_) => {}
            }
        }
        Self { entries: table }
    }

    /// Cohabitation outcome for a genus pair, order-insensitive
    pub fn get(&self, genus_a: &str, genus_b: &str) -> Option<CohabitationType> {
        self.entries.get(&unordered_key(genus_a, genus_b)).copied()
    }

    /// Number of distinct genus pairs in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn unordered_key(genus_a: &str, genus_b: &str) -> (String, String) {
    if genus_a <= genus_b {
        (genus_a.to_string(), genus_b.to_string())
    } else {
        (genus_b.to_string(), genus_a.to_string())
    }
}
