//! Mock scorer for testing and offline runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{BlablaError, Result};

use super::provider::{Language, Scorer};

/// Mock scorer that returns predictable scores.
///
/// Scripted scores are handed out in order; once they run out the
/// fallback value is returned. Every request is recorded.
pub struct MockScorer {
    fallback: f64,
    scripted: Mutex<VecDeque<f64>>,
    fail_after: Option<usize>,
    calls: Mutex<Vec<(String, Language)>>,
}

impl MockScorer {
    /// Always return `value`.
    pub fn new(value: f64) -> Self {
        Self {
            fallback: value,
            scripted: Mutex::new(VecDeque::new()),
            fail_after: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return `scores` in order, then `fallback`.
    pub fn with_sequence(scores: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            scripted: Mutex::new(scores.into_iter().collect()),
            ..Self::new(fallback)
        }
    }

    /// Fail with a service error once `successes` calls have been answered.
    pub fn failing_after(mut self, successes: usize) -> Self {
        self.fail_after = Some(successes);
        self
    }

    /// Texts and languages this scorer was asked about, in order.
    pub fn calls(&self) -> Vec<(String, Language)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of scoring requests so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for MockScorer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Scorer for MockScorer {
    fn score(&self, text: &str, language: Language) -> Result<f64> {
        let answered = {
            let mut calls = self
                .calls
                .lock()
                .map_err(|_| BlablaError::Config("mock scorer lock poisoned".to_string()))?;
            calls.push((text.to_string(), language));
            calls.len() - 1
        };

        if self.fail_after.is_some_and(|limit| answered >= limit) {
            return Err(BlablaError::Service {
                url: "mock://scorer".to_string(),
                status: 503,
            });
        }

        let next = self
            .scripted
            .lock()
            .map_err(|_| BlablaError::Config("mock scorer lock poisoned".to_string()))?
            .pop_front();

        Ok(next.unwrap_or(self.fallback))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fixed_value() {
        let scorer = MockScorer::new(0.3);
        assert_eq!(scorer.score("a", Language::En).unwrap(), 0.3);
        assert_eq!(scorer.score("b", Language::De).unwrap(), 0.3);
        assert_eq!(
            scorer.calls(),
            vec![("a".to_string(), Language::En), ("b".to_string(), Language::De)]
        );
    }

    #[test]
    fn test_mock_sequence() {
        let scorer = MockScorer::with_sequence([0.1, 0.9], 0.0);
        assert_eq!(scorer.score("x", Language::En).unwrap(), 0.1);
        assert_eq!(scorer.score("x", Language::En).unwrap(), 0.9);
        assert_eq!(scorer.score("x", Language::En).unwrap(), 0.0);
        assert_eq!(scorer.call_count(), 3);
    }

    #[test]
    fn test_mock_failing_after() {
        let scorer = MockScorer::new(0.2).failing_after(1);
        assert!(scorer.score("ok", Language::En).is_ok());
        let err = scorer.score("boom", Language::En).unwrap_err();
        assert!(matches!(err, BlablaError::Service { status: 503, .. }));
    }
}
