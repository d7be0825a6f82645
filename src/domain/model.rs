use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strictly increasing primes in `[2, limit]`.
pub type PrimeSequence = Vec<u64>;

/// Stems mapped to their leaves.
///
/// Stems iterate in ascending order. Leaves stay in the order they were
/// inserted; sorting them is left to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StemLeafMap {
    entries: BTreeMap<u64, Vec<u64>>,
}

impl StemLeafMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stem: u64, leaf: u64) {
        self.entries.entry(stem).or_default().push(leaf);
    }

    pub fn leaves(&self, stem: u64) -> Option<&[u64]> {
        self.entries.get(&stem).map(Vec::as_slice)
    }

    pub fn stems(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &[u64])> + '_ {
        self.entries
            .iter()
            .map(|(stem, leaves)| (*stem, leaves.as_slice()))
    }

    /// Rows ready for display: ascending stems, each with its leaves sorted.
    pub fn sorted_rows(&self) -> Vec<(u64, Vec<u64>)> {
        self.entries
            .iter()
            .map(|(stem, leaves)| {
                let mut sorted = leaves.clone();
                sorted.sort_unstable();
                (*stem, sorted)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<u64, Vec<u64>> {
        self.entries
    }
}

/// Everything derived from a single limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub limit: i64,
    pub primes: PrimeSequence,
    pub stem_leaf: StemLeafMap,
}
