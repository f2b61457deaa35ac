//! Bounded history of recent configurations.
//!
//! Two eviction behaviours are supported because callers disagree on what
//! "history" means:
//!
//! - [`EvictionPolicy::Fifo`]: every saved configuration enters the history;
//!   once full, the oldest entry is dropped before the new one is appended.
//! - [`EvictionPolicy::PromoteCurrent`]: the history holds *previous*
//!   configurations only. Saving makes the new configuration current and
//!   pushes the old current one into the history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Capacity used by [`ConfigurationHistory::default`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvictionPolicy {
    #[default]
    Fifo,
    PromoteCurrent,
}

#[derive(Debug, Clone)]
pub struct ConfigurationHistory<T> {
    capacity: usize,
    policy: EvictionPolicy,
    current: Option<T>,
    entries: VecDeque<T>,
}

impl<T> Default for ConfigurationHistory<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            policy: EvictionPolicy::default(),
            current: None,
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

impl<T> ConfigurationHistory<T> {
    /// Create an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        if capacity == 0 {
            return Err(ModelError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            policy,
            current: None,
            entries: VecDeque::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Record a configuration.
    pub fn save(&mut self, config: T) {
        match self.policy {
            EvictionPolicy::Fifo => self.push_entry(config),
            EvictionPolicy::PromoteCurrent => {
                if let Some(previous) = self.current.replace(config) {
                    self.push_entry(previous);
                }
            }
        }
    }

    fn push_entry(&mut self, config: T) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(config);
    }

    /// The most recently saved configuration.
    pub fn current(&self) -> Option<&T> {
        match self.policy {
            EvictionPolicy::Fifo => self.entries.back(),
            EvictionPolicy::PromoteCurrent => self.current.as_ref(),
        }
    }

    /// Retained history, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let result = ConfigurationHistory::<u32>::new(0, EvictionPolicy::Fifo);
        assert!(matches!(result, Err(ModelError::InvalidCapacity)));
    }

    #[test]
    fn fifo_keeps_last_saves() {
        let mut history = ConfigurationHistory::default();
        for i in 0..6 {
            history.save(i);
        }
        let kept: Vec<_> = history.history().copied().collect();
        assert_eq!(kept, vec![1, 2, 3, 4, 5]);
        assert_eq!(history.current(), Some(&5));
    }

    #[test]
    fn promote_current_keeps_previous_entries() {
        let mut history = ConfigurationHistory::new(2, EvictionPolicy::PromoteCurrent).unwrap();
        history.save("a");
        assert!(history.is_empty());
        assert_eq!(history.current(), Some(&"a"));

        history.save("b");
        history.save("c");
        history.save("d");
        let kept: Vec<_> = history.history().copied().collect();
        assert_eq!(kept, vec!["b", "c"]);
        assert_eq!(history.current(), Some(&"d"));
    }

    #[test]
    fn clear_resets_both_policies() {
        let mut history = ConfigurationHistory::new(3, EvictionPolicy::PromoteCurrent).unwrap();
        history.save(1);
        history.save(2);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
    }
}
