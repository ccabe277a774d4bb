//! Which curriculum topics the user has finished.
//!
//! The set keeps insertion order and is written through to the
//! key-value store under [`PROGRESS_KEY`] on every change.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::public::learning_path::Topic;
use crate::storage::{self, KeyValueStore, PROGRESS_KEY, StorageError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct ProgressState {
    #[serde(rename = "completedTopics", default)]
    completed_topics: Vec<String>,
}

pub struct LearningProgress {
    completed: Vec<String>,
    store: Arc<dyn KeyValueStore>,
}

impl LearningProgress {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let state = storage::load::<ProgressState>(store.as_ref(), PROGRESS_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable learning progress: {}", e);
                None
            })
            .unwrap_or_default();

        // Older blobs may carry duplicates
        let mut completed: Vec<String> = Vec::with_capacity(state.completed_topics.len());
        for id in state.completed_topics {
            if !completed.contains(&id) {
                completed.push(id);
            }
        }

        Self { completed, store }
    }

    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn is_completed(&self, topic_id: &str) -> bool {
        self.completed.iter().any(|id| id == topic_id)
    }

    /// Marking an already completed topic changes nothing.
    pub fn mark_completed(&mut self, topic_id: &str) -> Result<(), StorageError> {
        if self.is_completed(topic_id) {
            return Ok(());
        }
        let mut next = self.completed.clone();
        next.push(topic_id.to_string());
        self.commit(next)
    }

    /// Unmarking a topic that isn't completed changes nothing.
    pub fn mark_incomplete(&mut self, topic_id: &str) -> Result<(), StorageError> {
        if !self.is_completed(topic_id) {
            return Ok(());
        }
        let next = self
            .completed
            .iter()
            .filter(|id| *id != topic_id)
            .cloned()
            .collect();
        self.commit(next)
    }

    /// Flip a topic and return whether it is now completed.
    pub fn toggle(&mut self, topic_id: &str) -> Result<bool, StorageError> {
        if self.is_completed(topic_id) {
            self.mark_incomplete(topic_id)?;
            Ok(false)
        } else {
            self.mark_completed(topic_id)?;
            Ok(true)
        }
    }

    pub fn clear_progress(&mut self) -> Result<(), StorageError> {
        self.commit(Vec::new())
    }

    /// Write `next` through and only then adopt it. A failed write leaves
    /// memory as it was.
    fn commit(&mut self, next: Vec<String>) -> Result<(), StorageError> {
        let state = ProgressState {
            completed_topics: next,
        };
        storage::save(self.store.as_ref(), PROGRESS_KEY, &state).inspect_err(|e| {
            tracing::error!("Failed to persist learning progress: {}", e);
        })?;
        self.completed = state.completed_topics;
        Ok(())
    }

    /// Whole-number percentage of `topics` that are completed
    pub fn overall_percent(&self, topics: &[Topic]) -> u32 {
        percent(topics.iter().filter(|t| self.is_completed(&t.id)).count(), topics.len())
    }

    /// Whole-number percentage of the topics at `level` that are completed
    pub fn level_percent(&self, topics: &[Topic], level: &str) -> u32 {
        let at_level: Vec<&Topic> = topics.iter().filter(|t| t.level == level).collect();
        let done = at_level.iter().filter(|t| self.is_completed(&t.id)).count();
        percent(done, at_level.len())
    }
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}
