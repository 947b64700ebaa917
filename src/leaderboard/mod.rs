//! Persistent leaderboard
//!
//! Loaded once at start-up and flushed after every completed session. The store
//! is a JSON array of entries. A missing, unreadable or corrupt store never stops
//! the game: the board starts empty and keeps working in memory.

mod entry;
mod store;

pub use entry::LeaderboardEntry;

use crate::core::Category;
use std::io;
use std::path::{Path, PathBuf};

/// Number of entries shown by the default leaderboard view
pub const TOP_N: usize = 10;

/// Leaderboard errors
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("leaderboard store {} unavailable: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How many entries a query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    AllTime,
    TopN(usize),
}

/// Aggregate figures over a set of entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderboardStats {
    pub records: usize,
    pub highest: u32,
    pub average: f64,
}

/// Ranked, persisted session results
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    path: Option<PathBuf>,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Board with no backing file
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the board stored at `path`
    ///
    /// Never fails: a missing store gives an empty board, and an unreadable or
    /// corrupt one gives an empty board plus a warning in the log.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match store::read(&path) {
            Ok(entries) => {
                tracing::info!(path = %path.display(), count = entries.len(), "loaded leaderboard");
                entries
            }
            Err(store::ReadError::Missing) => {
                tracing::info!(path = %path.display(), "no leaderboard yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "leaderboard unreadable, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            path: Some(path),
            entries,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry and flush
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::StoreUnavailable` if the flush fails; the entry
    /// is kept in memory either way.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Result<(), LeaderboardError> {
        tracing::info!(
            player = entry.name(),
            category = %entry.category(),
            score = entry.score(),
            "recording leaderboard entry"
        );
        self.entries.push(entry);
        self.flush()
    }

    /// Remove every entry and flush
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::StoreUnavailable` if the flush fails.
    pub fn clear(&mut self) -> Result<(), LeaderboardError> {
        tracing::info!(count = self.entries.len(), "clearing leaderboard");
        self.entries.clear();
        self.flush()
    }

    /// Write the board to its store, if it has one
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::StoreUnavailable` if the store cannot be written.
    pub fn flush(&self) -> Result<(), LeaderboardError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        store::write(path, &self.entries).map_err(|source| {
            tracing::warn!(path = %path.display(), "failed to save leaderboard: {source}");
            LeaderboardError::StoreUnavailable {
                path: path.clone(),
                source,
            }
        })
    }

    /// Entries ranked by score (highest first, earlier timestamp first on ties)
    ///
    /// `category` limits the result to one category.
    #[must_use]
    pub fn query(&self, category: Option<Category>, scope: Scope) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.filtered(category).collect();
        ranked.sort_by(|a, b| {
            b.score()
                .cmp(&a.score())
                .then_with(|| a.timestamp().cmp(&b.timestamp()))
        });

        if let Scope::TopN(n) = scope {
            ranked.truncate(n);
        }
        ranked
    }

    /// Record count, highest and average score, or `None` if nothing matches
    #[must_use]
    pub fn stats(&self, category: Option<Category>) -> Option<LeaderboardStats> {
        let scores: Vec<u32> = self.filtered(category).map(LeaderboardEntry::score).collect();
        let highest = *scores.iter().max()?;
        let total: u64 = scores.iter().map(|&s| u64::from(s)).sum();

        Some(LeaderboardStats {
            records: scores.len(),
            highest,
            average: total as f64 / scores.len() as f64,
        })
    }

    /// Categories that have at least one entry, in menu order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.entries.iter().any(|e| e.category() == *c))
            .collect()
    }

    fn filtered(&self, category: Option<Category>) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries
            .iter()
            .filter(move |e| category.is_none_or(|c| e.category() == c))
    }
}
