//! Ingestion bookkeeping.

use serde::Serialize;

/// Accepted and rejected record counts for one feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedCounts {
    /// Records applied to a model.
    pub accepted: usize,
    /// Lines or records skipped with a warning.
    pub rejected: usize,
}

impl FeedCounts {
    pub(crate) fn record(&mut self, accepted: bool) {
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }
}

/// What engine construction did with each feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    /// Rate and FX spot records.
    pub market: FeedCounts,
    /// Trade records.
    pub trades: FeedCounts,
}

impl IngestSummary {
    /// Total rejected records across both feeds.
    pub fn rejected(&self) -> usize {
        self.market.rejected + self.trades.rejected
    }
}
