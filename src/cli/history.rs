//! Command history for the interactive shell

use std::collections::VecDeque;

/// Append-only log of entered commands, optionally bounded
///
/// When a limit is set the oldest entries are evicted first.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn record(&mut self, command: impl Into<String>) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.entries.len() >= limit {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(command.into());
    }

    /// Commands in entry order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
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

    #[test]
    fn test_unbounded_history_keeps_everything() {
        let mut history = CommandHistory::new(None);
        for i in 0..100 {
            history.record(format!("ZIP {}", i));
        }

        assert_eq!(history.len(), 100);
        assert_eq!(history.iter().next(), Some("ZIP 0"));
        assert_eq!(history.iter().last(), Some("ZIP 99"));
    }

    #[test]
    fn test_bounded_history_evicts_oldest() {
        let mut history = CommandHistory::new(Some(2));
        history.record("ZIP 94110");
        history.record("Summary");
        history.record("NAICS 4500");

        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["Summary", "NAICS 4500"]);
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let mut history = CommandHistory::new(Some(0));
        history.record("Summary");
        assert!(history.is_empty());
    }
}
