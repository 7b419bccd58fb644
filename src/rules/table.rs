//! Point tables mapping pattern sizes to scores.
//!
//! A table is read from string keys of three shapes:
//! - `"3"`: exact size 3,
//! - `"4+"`: open-ended bucket covering every size from 4 upwards,
//! - anything else (`"pair"`): a named entry looked up by name.
//!
//! Lookups never fail. A size with no exact entry and no applicable bucket
//! is worth 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parsed table key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableKey {
    Exact(u32),
    AtLeast(u32),
    Named(String),
}

impl TableKey {
    /// Parses a key string. Never fails; unrecognised shapes become `Named`.
    pub fn parse(s: &str) -> TableKey {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return TableKey::Exact(n);
        }
        if let Some(n) = s.strip_suffix('+').and_then(|n| n.trim().parse::<u32>().ok()) {
            return TableKey::AtLeast(n);
        }
        TableKey::Named(s.to_ascii_lowercase())
    }
}

/// A scoring table for one species.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct ScoringTable {
    exact: BTreeMap<u32, u32>,
    open: BTreeMap<u32, u32>,
    named: BTreeMap<String, u32>,
}

impl ScoringTable {
    /// Builds a table from `(key, points)` pairs. Later duplicates win.
    pub fn from_entries<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, u32)>) -> Self {
        let mut table = ScoringTable::default();
        for (key, points) in entries {
            table.insert(key.as_ref(), points);
        }
        table
    }

    pub fn insert(&mut self, key: &str, points: u32) {
        match TableKey::parse(key) {
            TableKey::Exact(n) => {
                self.exact.insert(n, points);
            }
            TableKey::AtLeast(n) => {
                self.open.insert(n, points);
            }
            TableKey::Named(name) => {
                self.named.insert(name, points);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.open.is_empty() && self.named.is_empty()
    }

    /// Returns the points for a named entry such as `"pair"`.
    pub fn named(&self, name: &str) -> Option<u32> {
        self.named.get(&name.to_ascii_lowercase()).copied()
    }

    /// Returns the largest numeric key, counting bucket thresholds.
    pub fn max_key(&self) -> Option<u32> {
        let exact = self.exact.keys().next_back().copied();
        let open = self.open.keys().next_back().copied();
        exact.max(open)
    }

    /// Returns the entry that applies to `size`, if any.
    ///
    /// An exact key wins; otherwise the bucket with the highest threshold
    /// at or below `size` applies.
    pub fn get(&self, size: u32) -> Option<u32> {
        if let Some(&points) = self.exact.get(&size) {
            return Some(points);
        }
        self.open.range(..=size).next_back().map(|(_, &points)| points)
    }

    /// Returns the points for `size`, or 0 when no entry applies.
    pub fn lookup(&self, size: u32) -> u32 {
        self.get(size).unwrap_or(0)
    }

    /// Like `lookup`, but a size beyond every numeric key scores the value
    /// of the largest key instead of 0.
    pub fn lookup_capped(&self, size: u32) -> u32 {
        if let Some(points) = self.get(size) {
            return points;
        }
        match self.max_key() {
            Some(max) if size > max => self.get(max).unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<BTreeMap<String, u32>> for ScoringTable {
    fn from(map: BTreeMap<String, u32>) -> Self {
        ScoringTable::from_entries(map)
    }
}

impl From<ScoringTable> for BTreeMap<String, u32> {
    fn from(table: ScoringTable) -> Self {
        let mut map = BTreeMap::new();
        for (n, points) in table.exact {
            map.insert(n.to_string(), points);
        }
        for (n, points) in table.open {
            map.insert(format!("{n}+"), points);
        }
        map.extend(table.named);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elk() -> ScoringTable {
        ScoringTable::from_entries([("1", 2), ("2", 5), ("3", 9), ("4+", 13)])
    }

    #[test]
    fn key_shapes() {
        assert_eq!(TableKey::parse("3"), TableKey::Exact(3));
        assert_eq!(TableKey::parse(" 5+ "), TableKey::AtLeast(5));
        assert_eq!(TableKey::parse("Pair"), TableKey::Named("pair".to_string()));
        assert_eq!(TableKey::parse("x+"), TableKey::Named("x+".to_string()));
    }

    #[test]
    fn exact_keys() {
        let t = elk();
        assert_eq!(t.lookup(1), 2);
        assert_eq!(t.lookup(3), 9);
    }

    #[test]
    fn open_bucket_covers_threshold_and_above() {
        let t = elk();
        assert_eq!(t.lookup(4), 13);
        assert_eq!(t.lookup(5), 13);
        assert_eq!(t.lookup(40), 13);
    }

    #[test]
    fn missing_size_scores_zero() {
        let t = ScoringTable::from_entries([("2", 5), ("5+", 14)]);
        assert_eq!(t.lookup(0), 0);
        assert_eq!(t.lookup(1), 0);
        assert_eq!(t.lookup(3), 0);
        assert_eq!(t.lookup(6), 14);
    }

    #[test]
    fn exact_key_beats_bucket() {
        let t = ScoringTable::from_entries([("3+", 10), ("4", 1)]);
        assert_eq!(t.lookup(4), 1);
        assert_eq!(t.lookup(5), 10);
    }

    #[test]
    fn highest_applicable_bucket_wins() {
        let t = ScoringTable::from_entries([("2+", 3), ("6+", 20)]);
        assert_eq!(t.lookup(5), 3);
        assert_eq!(t.lookup(7), 20);
    }

    #[test]
    fn capped_lookup_uses_largest_key() {
        let t = ScoringTable::from_entries([("1", 2), ("2", 5), ("3", 8)]);
        assert_eq!(t.lookup(9), 0);
        assert_eq!(t.lookup_capped(9), 8);
        assert_eq!(t.lookup_capped(0), 0);
    }

    #[test]
    fn named_entries() {
        let t = ScoringTable::from_entries([("pair", 4)]);
        assert_eq!(t.named("pair"), Some(4));
        assert_eq!(t.named("PAIR"), Some(4));
        assert_eq!(t.named("triple"), None);
        assert_eq!(t.max_key(), None);
        assert_eq!(t.lookup(2), 0);
    }

    #[test]
    fn json_keys_roundtrip_through_strings() {
        let t: ScoringTable = serde_json::from_str(r#"{"1": 2, "4+": 13, "pair": 4}"#).unwrap();
        assert_eq!(t.lookup(7), 13);
        assert_eq!(t.named("pair"), Some(4));
        let back = serde_json::to_value(&t).unwrap();
        assert_eq!(back["4+"], 13);
        assert_eq!(back["1"], 2);
    }
}
