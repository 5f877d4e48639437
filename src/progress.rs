use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::util::percentage;

/// Latest recorded result for one quiz topic. Most-recent-wins: a new
/// result replaces the old one even when it is worse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizScore {
    pub score: u32,
    pub total: u32,
    pub percentage: u8,
    pub recorded_at: DateTime<Local>,
}

/// The whole persisted progress blob: one JSON object holding the
/// per-topic scores and the set of visited pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressRecord {
    #[serde(default)]
    pub quiz_scores: BTreeMap<String, QuizScore>,
    #[serde(default)]
    pub visited_pages: BTreeSet<String>,
}

pub trait ProgressStore {
    fn load(&self) -> ProgressRecord;
    fn save(&self, record: &ProgressRecord) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::progress_path().unwrap_or_else(|| PathBuf::from("swot_progress.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> ProgressRecord {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(record) = serde_json::from_slice::<ProgressRecord>(&bytes) {
                return record;
            }
        }
        ProgressRecord::default()
    }

    fn save(&self, record: &ProgressRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(record).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

/// Owns the live progress record and writes it back through the store
/// on every mutation. Write failures are ignored; the in-memory record
/// stays correct for the rest of the run.
pub struct ProgressTracker {
    store: Box<dyn ProgressStore>,
    record: ProgressRecord,
    total_pages: usize,
}

impl ProgressTracker {
    pub fn new(store: Box<dyn ProgressStore>, total_pages: usize) -> Self {
        let record = store.load();
        Self {
            store,
            record,
            total_pages,
        }
    }

    /// Tracker over the default on-disk store and the full page registry
    pub fn from_default_store() -> Self {
        Self::new(
            Box::new(FileProgressStore::new()),
            crate::content::total_known_pages(),
        )
    }

    pub fn record_visit(&mut self, page: &str) {
        if self.record.visited_pages.insert(page.to_string()) {
            let _ = self.store.save(&self.record);
        }
    }

    pub fn record_quiz_score(&mut self, topic: &str, score: u32, total: u32) {
        let entry = QuizScore {
            score,
            total,
            percentage: percentage(score as usize, total as usize),
            recorded_at: Local::now(),
        };
        self.record.quiz_scores.insert(topic.to_string(), entry);
        let _ = self.store.save(&self.record);
    }

    pub fn completion_percentage(&self) -> u8 {
        percentage(self.record.visited_pages.len(), self.total_pages)
    }

    pub fn quizzes_completed(&self) -> usize {
        self.record.quiz_scores.len()
    }

    pub fn has_visited(&self, page: &str) -> bool {
        self.record.visited_pages.contains(page)
    }

    pub fn score_for(&self, topic: &str) -> Option<&QuizScore> {
        self.record.quiz_scores.get(topic)
    }

    pub fn snapshot(&self) -> &ProgressRecord {
        &self.record
    }

    /// The header indicator, e.g. "36% · 2 quizzes completed"
    pub fn indicator_line(&self) -> String {
        format!(
            "{}% · {} quizzes completed",
            self.completion_percentage(),
            self.quizzes_completed()
        )
    }

    /// Dump the score table as csv
    pub fn export_scores_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["topic", "score", "total", "percentage", "recorded_at"])?;
        for (topic, entry) in &self.record.quiz_scores {
            writer.write_record([
                topic.clone(),
                entry.score.to_string(),
                entry.total.to_string(),
                entry.percentage.to_string(),
                entry.recorded_at.to_rfc3339(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
