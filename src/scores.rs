//! High-score table persisted as `name,score` lines.
//!
//! Storage is fire-and-forget from the game's perspective: the host
//! loads the table at startup and saves after recording a finished
//! game; the engine itself never touches the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::MAX_HIGH_SCORES;

/// Default storage location, relative to the working directory.
pub const HIGH_SCORE_FILE: &str = "highscores.txt";

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

/// Top-5 score table, kept sorted descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    /// Load the table from `path`. A missing file is an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading high scores from {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Parse `name,score` lines, skipping anything malformed.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        for line in text.lines() {
            let Some((name, score)) = line.rsplit_once(',') else {
                continue;
            };
            let Ok(score) = score.trim().parse::<u32>() else {
                continue;
            };
            table.entries.push(HighScore {
                name: name.to_string(),
                score,
            });
        }
        table.normalize();
        table
    }

    /// Serialize as `name,score` lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.name);
            out.push(',');
            out.push_str(&entry.score.to_string());
            out.push('\n');
        }
        out
    }

    /// Write the table to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text())
            .with_context(|| format!("writing high scores to {}", path.display()))
    }

    /// Whether `score` would enter the table: room left, or strictly
    /// above the current lowest entry.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Record a finished game under `name`.
    ///
    /// An existing entry with the same name keeps the higher of its
    /// scores rather than appearing twice.
    pub fn record(&mut self, name: &str, score: u32) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.score = existing.score.max(score),
            None => self.entries.push(HighScore {
                name: name.to_string(),
                score,
            }),
        }
        self.normalize();
    }

    /// Entries, best first.
    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}
