//! A single leaderboard record

use super::LeaderboardError;
use crate::core::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final result of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    name: String,
    category: Category,
    score: u32,
    #[serde(default)]
    levels_completed: u32,
    timestamp: DateTime<Utc>,
}

impl LeaderboardEntry {
    /// Entry stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::EmptyName` if the trimmed name is empty.
    pub fn new(
        name: &str,
        category: Category,
        score: u32,
        levels_completed: u32,
    ) -> Result<Self, LeaderboardError> {
        Self::with_timestamp(name, category, score, levels_completed, Utc::now())
    }

    /// Entry with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::EmptyName` if the trimmed name is empty.
    pub fn with_timestamp(
        name: &str,
        category: Category,
        score: u32,
        levels_completed: u32,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, LeaderboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeaderboardError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            category,
            score,
            levels_completed,
            timestamp,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
