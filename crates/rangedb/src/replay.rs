//! Replay an operation sequence through an engine

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::RangeEngine;
use crate::error::Result;
use crate::workload::Operation;

/// Summary of one replay pass
///
/// Two engines that returned the same answer to every range query produce
/// equal outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    /// Range queries answered
    pub ranges: u64,
    /// Updates applied
    pub updates: u64,
    /// Wrapping sum of every range answer
    pub checksum: i64,
}

/// Apply `operations` to `engine` strictly in order
///
/// Stops at the first failing operation and returns its error.
pub fn replay<E>(engine: &mut E, operations: &[Operation]) -> Result<ReplayOutcome>
where
    E: RangeEngine + ?Sized,
{
    let mut outcome = ReplayOutcome::default();

    for op in operations {
        match *op {
            Operation::Update { index, value } => {
                engine.update(index, value)?;
                outcome.updates += 1;
            }
            Operation::Range(key) => {
                let sum = engine.range_sum(key.left, key.right)?;
                outcome.checksum = outcome.checksum.wrapping_add(sum);
                outcome.ranges += 1;
            }
        }
    }

    debug!(
        ranges = outcome.ranges,
        updates = outcome.updates,
        checksum = outcome.checksum,
        "replay finished"
    );
    Ok(outcome)
}
