//! `SearchStats`: aggregate counters for one search call.
//!
//! Stats hold integers only, so their canonical JSON is byte-stable across
//! platforms and two runs over the same problem can be compared by digest.

use sha2::{Digest, Sha256};

/// Domain prefix for search stats digests.
pub const DOMAIN_SEARCH_STATS: &[u8] = b"UCS::SEARCH_STATS::V1\0";

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The start state satisfied the goal; nothing was expanded.
    StartIsGoal,
    /// A goal was reached after at least one expansion.
    ///
    /// Under goal-on-generation the goal is never pushed, and
    /// `creation_order` is the sequence number it would have received.
    GoalReached { creation_order: u64 },
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
}

/// Aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded.
    pub expansions: u64,
    /// Successors produced by `expand`, before dedup.
    pub successors_generated: u64,
    /// Successors skipped because their id was visited, plus stale frontier
    /// entries discarded on pop.
    pub duplicates_suppressed: u64,
    /// Expansions that yielded no successors at all.
    pub dead_ends: u64,
    /// Entries pushed onto the frontier, including the start state.
    pub frontier_pushes: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    pub termination: TerminationReason,
}

impl SearchStats {
    pub(crate) fn new() -> Self {
        Self {
            expansions: 0,
            successors_generated: 0,
            duplicates_suppressed: 0,
            dead_ends: 0,
            frontier_pushes: 0,
            frontier_high_water: 0,
            termination: TerminationReason::FrontierExhausted,
        }
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "dead_ends": self.dead_ends,
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "frontier_pushes": self.frontier_pushes,
            "successors_generated": self.successors_generated,
            "termination": termination_to_json(self.termination),
        })
    }

    /// Serialize to canonical JSON bytes (sorted keys, compact separators).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        // serde_json's default map is a BTreeMap, so keys come out sorted.
        serde_json::to_vec(&self.to_json_value())
    }

    /// Domain-separated SHA-256 of the canonical JSON, as `sha256:<hex>`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_STATS);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

fn termination_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::StartIsGoal => serde_json::json!({"type": "start_is_goal"}),
        TerminationReason::GoalReached { creation_order } => {
            serde_json::json!({"creation_order": creation_order, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}
