use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::factory::SelectFamily;

/// Records which way a select went on each execution.
pub trait BranchProfiler: std::fmt::Debug + Send + Sync {
    const FAMILY: SelectFamily;

    fn record(&self, taken: bool);

    fn snapshot(&self) -> Option<BranchProfile>;
}

/// Records nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unprofiled;

impl BranchProfiler for Unprofiled {
    const FAMILY: SelectFamily = SelectFamily::Plain;

    #[inline(always)]
    fn record(&self, _taken: bool) {}

    fn snapshot(&self) -> Option<BranchProfile> {
        None
    }
}

/// Per-site taken counters.
///
/// Updates are relaxed atomic increments so concurrent executions of a shared
/// tree never lose counts; readers only get a trend, not a consistent pair.
/// Counts wrap on overflow.
#[derive(Debug, Default)]
pub struct BranchCounters {
    true_count: AtomicU64,
    false_count: AtomicU64,
}

impl BranchCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn true_count(&self) -> u64 {
        self.true_count.load(Ordering::Relaxed)
    }

    pub fn false_count(&self) -> u64 {
        self.false_count.load(Ordering::Relaxed)
    }
}

impl BranchProfiler for BranchCounters {
    const FAMILY: SelectFamily = SelectFamily::Profiling;

    #[inline]
    fn record(&self, taken: bool) {
        let counter = if taken {
            &self.true_count
        } else {
            &self.false_count
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> Option<BranchProfile> {
        Some(BranchProfile {
            true_count: self.true_count(),
            false_count: self.false_count(),
        })
    }
}

/// Branch history of one select site, as read by the optimizing tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchProfile {
    pub true_count: u64,
    pub false_count: u64,
}

impl BranchProfile {
    pub fn total(&self) -> u64 {
        self.true_count.saturating_add(self.false_count)
    }

    /// Measured probability of the true branch; even odds without samples.
    pub fn true_probability(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.5;
        }
        self.true_count as f64 / total as f64
    }

    /// The branch that has never been taken, once the site has executed at
    /// least once.
    pub fn dead_branch(&self) -> Option<bool> {
        match (self.true_count, self.false_count) {
            (0, 0) => None,
            (0, _) => Some(true),
            (_, 0) => Some(false),
            _ => None,
        }
    }

    pub fn to_json(&self) -> fp_lir::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
