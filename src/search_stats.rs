/// Counters collected during a single call to the search.
///
/// Every call to `best_move_for` starts from zeroed counters, so the values describe
/// only the most recent search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// The number of positions entered below the root.
    pub nodes: u64,
    /// The number of those positions that were finished games.
    pub leaves: u64,
    /// The number of times the remaining moves of a position were skipped.
    pub cutoffs: u64,
}

impl SearchStats {
    /// The share of visited positions that were terminal.
    pub fn leaves_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            (self.leaves as f64) / (self.nodes as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::search_stats::SearchStats;

    #[test]
    fn leaves_rate() {
        assert_eq!(SearchStats::default().leaves_rate(), 0.0);
        let stats = SearchStats {
            nodes: 8,
            leaves: 2,
            cutoffs: 0,
        };
        assert_eq!(stats.leaves_rate(), 0.25);
    }
}
