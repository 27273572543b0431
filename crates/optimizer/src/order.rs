//! Priority ordering of parts.

use std::collections::HashMap;

use promptmap_core::{DEFAULT_ORDER, Part, UNRANKED};
use tracing::debug;

/// Maps part names to their rank. Names not listed rank [`UNRANKED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityOrder {
    ranks: HashMap<String, usize>,
}

impl PriorityOrder {
    /// Build an order from a list of names. A name listed twice keeps its
    /// last position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ranks = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.into(), i))
            .collect();
        Self { ranks }
    }

    /// Use the configured list when present, the default order otherwise.
    pub fn from_config(order: Option<&[String]>) -> Self {
        match order {
            Some(names) => Self::new(names.iter().cloned()),
            None => Self::default(),
        }
    }

    pub fn rank(&self, name: &str) -> usize {
        self.ranks.get(name).copied().unwrap_or(UNRANKED)
    }
}

impl Default for PriorityOrder {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

/// Reorder parts by `(rank, start_line)`.
///
/// The sort is stable, so parts that share both keys keep their input order.
/// Spans and contents are never touched.
pub fn optimize_part_order(parts: &[Part], order: &PriorityOrder) -> Vec<Part> {
    let mut sorted = parts.to_vec();
    sorted.sort_by_key(|p| (order.rank(&p.name), p.start_line));
    debug!(parts = sorted.len(), "Reordered parts");
    sorted
}
