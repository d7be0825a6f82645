use crate::core::sieve::generate_primes;
use crate::core::stem_leaf::group_by_stem;
use crate::domain::model::PlotSnapshot;
use crate::utils::error::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: i64 = 110;
pub const DEFAULT_ALTERNATE_LIMIT: i64 = 150;

/// Builds the snapshot for one limit.
pub fn compute_snapshot(limit: i64) -> Result<PlotSnapshot> {
    let primes = generate_primes(limit)?;
    let stem_leaf = group_by_stem(&primes);
    Ok(PlotSnapshot {
        limit,
        primes,
        stem_leaf,
    })
}

/// A pair of limits the user flips between, with the derived plot for each
/// limit computed on first request and reused afterwards.
#[derive(Debug, Clone)]
pub struct PlotSession {
    primary: i64,
    alternate: i64,
    current: i64,
    cache: HashMap<i64, PlotSnapshot>,
}

impl PlotSession {
    pub fn new(primary: i64, alternate: i64) -> Self {
        Self {
            primary,
            alternate,
            current: primary,
            cache: HashMap::new(),
        }
    }

    pub fn current_limit(&self) -> i64 {
        self.current
    }

    pub fn next_limit(&self) -> i64 {
        if self.current == self.primary {
            self.alternate
        } else {
            self.primary
        }
    }

    pub fn toggle(&mut self) -> i64 {
        self.current = self.next_limit();
        tracing::debug!(limit = self.current, "limit toggled");
        self.current
    }

    pub fn button_label(&self) -> String {
        format!("Generate with Limit {}", self.next_limit())
    }

    pub fn snapshot(&mut self) -> Result<&PlotSnapshot> {
        let limit = self.current;
        match self.cache.entry(limit) {
            Entry::Occupied(entry) => {
                tracing::trace!(limit, "reusing cached snapshot");
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(&*entry.insert(compute_snapshot(limit)?)),
        }
    }

    pub fn is_cached(&self, limit: i64) -> bool {
        self.cache.contains_key(&limit)
    }
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_ALTERNATE_LIMIT)
    }
}
