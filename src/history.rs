use chrono::{DateTime, Local};
use rusqlite::{params, Connection, Result};
use std::path::PathBuf;

use crate::app_dirs::AppDirs;

/// One recorded answer to a quiz question
#[derive(Debug, Clone)]
pub struct AnswerEvent {
    pub topic: String,
    pub question_index: usize,
    pub selected: usize,
    pub was_correct: bool,
    pub timestamp: DateTime<Local>,
}

/// Per-topic aggregate over the full answer history
#[derive(Debug, Clone, PartialEq)]
pub struct TopicHistory {
    pub topic: String,
    pub attempts: i64,
    pub misses: i64,
    pub miss_rate: f64,
    pub last_answered: Option<String>,
}

/// Database manager for the answer history
#[derive(Debug)]
pub struct HistoryDb {
    conn: Connection,
}

impl HistoryDb {
    /// Open the on-disk history, creating the schema if needed
    pub fn new() -> Result<Self> {
        let db_path = AppDirs::db_path().unwrap_or_else(|| PathBuf::from("swot_history.db"));

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
                    Some(format!("Failed to create directory: {}", e)),
                )
            })?;
        }

        let conn = Connection::open(&db_path)?;
        Self::bootstrap(&conn)?;
        Ok(HistoryDb { conn })
    }

    /// In-memory history, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(&conn)?;
        Ok(HistoryDb { conn })
    }

    fn bootstrap(conn: &Connection) -> Result<()> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS answer_events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                topic TEXT NOT NULL,
                question_index INTEGER NOT NULL,
                selected INTEGER NOT NULL,
                was_correct BOOLEAN NOT NULL,
                timestamp TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_answer_events_topic ON answer_events(topic)",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_answer_events_timestamp ON answer_events(timestamp)",
            [],
        )?;

        Ok(())
    }

    /// Record a single answer event
    pub fn record_answer(&self, event: &AnswerEvent) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO answer_events
            (topic, question_index, selected, was_correct, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                event.topic,
                event.question_index as i64,
                event.selected as i64,
                event.was_correct,
                event.timestamp.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    /// Aggregate attempts and miss rate per topic, most recent first
    pub fn topic_summary(&self) -> Result<Vec<TopicHistory>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                topic,
                COUNT(*) as attempts,
                SUM(CASE WHEN was_correct = 0 THEN 1 ELSE 0 END) as misses,
                MAX(timestamp) as last_answered
            FROM answer_events
            GROUP BY topic
            ORDER BY last_answered DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            let attempts: i64 = row.get(1)?;
            let misses: i64 = row.get(2)?;
            let miss_rate = if attempts == 0 {
                0.0
            } else {
                (misses as f64 / attempts as f64) * 100.0
            };

            Ok(TopicHistory {
                topic: row.get(0)?,
                attempts,
                misses,
                miss_rate,
                last_answered: row.get(3)?,
            })
        })?;

        let mut summary = Vec::new();
        for row in rows {
            summary.push(row?);
        }

        Ok(summary)
    }

    /// Attempts recorded for one topic
    pub fn topic_attempts(&self, topic: &str) -> Result<i64> {
        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(*) FROM answer_events WHERE topic = ?1")?;
        stmt.query_row([topic], |row| row.get(0))
    }

    /// Clear the full history (reset / test support)
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM answer_events", [])?;
        Ok(())
    }
}
