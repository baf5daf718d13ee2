/// Maximum number of conversions kept per session.
pub const HISTORY_LIMIT: usize = 5;

/// One completed conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    pub timestamp: String,
}

/// Bounded, most-recent-first sequence of completed conversions.
///
/// Recording a sixth transaction evicts the oldest. Entries are never
/// updated or removed otherwise; the history lives only for the session.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.entries.insert(0, transaction);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Most-recent-first.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(n: usize) -> Transaction {
        Transaction {
            from: "usd".to_string(),
            to: "eur".to_string(),
            amount: n as f64,
            result: n as f64 * 0.9,
            timestamp: format!("2026-01-0{n} 12:00:00"),
        }
    }

    #[test]
    fn test_record_prepends() {
        let mut history = History::new();
        history.record(tx(1));
        history.record(tx(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].amount, 2.0);
        assert_eq!(history.entries()[1].amount, 1.0);
    }

    #[test]
    fn test_sixth_insert_evicts_oldest() {
        let mut history = History::new();
        for n in 1..=6 {
            history.record(tx(n));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0].amount, 6.0);
        assert_eq!(history.entries()[4].amount, 2.0);
        assert!(history.entries().iter().all(|t| t.amount != 1.0));
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }
}
