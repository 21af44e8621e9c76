//! Phase transition history.
//!
//! An in-memory, bounded record of how the calculator moved between
//! [`Phase`]s. It exists for diagnostics and is never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::event::Event;
use super::machine::Phase;

/// Default number of transitions kept before the oldest are evicted.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// The event that caused the change
    pub event: Event,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of phase transitions.
///
/// `record` returns a new history and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Event, Phase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new(8).record(PhaseTransition {
///     from: Phase::Empty,
///     to: Phase::Error,
///     event: Event::Equals,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![Phase::Empty, Phase::Error]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    limit: usize,
    transitions: Vec<PhaseTransition>,
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl PhaseHistory {
    /// Create an empty history keeping at most `limit` transitions
    /// (at least one).
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            transitions: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// When the limit is reached the oldest transition is dropped.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if transitions.len() > self.limit {
            let excess = transitions.len() - self.limit;
            transitions.drain(..excess);
        }
        Self {
            limit: self.limit,
            transitions,
        }
    }

    /// Phases traversed: the first recorded `from`, then every `to`.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last recorded transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
