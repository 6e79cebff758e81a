//! SQLite storage layer for Quotebook

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::config::{quotebook_home, Config};

/// Get the default database path
pub fn default_db_path() -> Result<PathBuf> {
    let config_dir = quotebook_home()?;

    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join("quotebook.db"))
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open the database named by the config, or the default one
    pub fn open_default() -> Result<Self> {
        let path = match Config::load_or_default().database_path {
            Some(path) => path,
            None => default_db_path()?,
        };
        tracing::debug!("Opening database {}", path.display());
        Self::open(&path)
    }

    /// Run migrations
    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read key '{key}'"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO kv (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = ?2,
                    updated_at = ?3
                "#,
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("Failed to write key '{key}'"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Creates a test database in a temporary directory.
    /// Returns the Database instance and the temp directory (which must be kept alive).
    fn create_test_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp directory");
        let db_path = dir.path().join("test.db");
        let db = Database::open(&db_path).expect("Failed to open test database");
        (db, dir)
    }

    #[test]
    fn test_database_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("quotes.db");
        assert!(!db_path.exists());

        let db = Database::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(db.get("quotes").unwrap(), None);
    }

    #[test]
    fn test_get_missing_key() {
        let (db, _dir) = create_test_db();
        assert_eq!(db.get("quotes").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (db, _dir) = create_test_db();
        db.set("lastSelectedFilter", "Life").unwrap();
        db.set("lastSelectedFilter", "all").unwrap();

        assert_eq!(db.get("lastSelectedFilter").unwrap().as_deref(), Some("all"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        {
            let db = Database::open(&db_path).unwrap();
            db.set("quotes", r#"[{"text":"a","category":"b"}]"#).unwrap();
        }

        let db = Database::open(&db_path).unwrap();
        assert_eq!(
            db.get("quotes").unwrap().as_deref(),
            Some(r#"[{"text":"a","category":"b"}]"#)
        );
    }
}
