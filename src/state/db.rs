// SQLite storage for job applications
use rusqlite::{params, Connection, ErrorCode};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::models::{Application, ApplicationStatus, InvalidStatus};
use super::repository::{validate_fields, ApplicationRepository};
use super::storage::{self, StorageError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company TEXT NOT NULL,
    position TEXT NOT NULL,
    status TEXT CHECK(status IN ('Pending', 'Rejected')) NOT NULL DEFAULT 'Pending'
)";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Storage unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("SQLite error: {0}")]
    Sqlite(#[source] rusqlite::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref e, ref msg)
                if e.code == ErrorCode::ConstraintViolation =>
            {
                DbError::ConstraintViolation(msg.clone().unwrap_or_else(|| e.to_string()))
            }
            other => DbError::Sqlite(other),
        }
    }
}

impl From<InvalidStatus> for DbError {
    fn from(err: InvalidStatus) -> Self {
        DbError::ConstraintViolation(err.to_string())
    }
}

/// Application store backed by a single SQLite file.
///
/// Every operation opens its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> DbResult<Connection> {
        Connection::open(&self.path).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, err: impl std::fmt::Display) -> DbError {
        DbError::StorageUnavailable {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}

impl ApplicationRepository for SqliteStore {
    fn initialize(&self) -> DbResult<()> {
        let conn = self.connect()?;
        conn.execute(SCHEMA, []).map_err(|e| self.unavailable(e))?;
        log::debug!("Schema ready at {}", self.path.display());
        Ok(())
    }

    fn insert(
        &self,
        company: &str,
        position: &str,
        status: Option<ApplicationStatus>,
    ) -> DbResult<i64> {
        validate_fields(company, position)?;

        let conn = self.connect()?;
        match status {
            Some(status) => conn.execute(
                "INSERT INTO applications (company, position, status) VALUES (?1, ?2, ?3)",
                params![company, position, status],
            )?,
            // Let the column default supply the status
            None => conn.execute(
                "INSERT INTO applications (company, position) VALUES (?1, ?2)",
                params![company, position],
            )?,
        };

        let id = conn.last_insert_rowid();
        log::info!("Inserted application {}: {} / {}", id, company, position);
        Ok(id)
    }

    fn list_all(&self) -> DbResult<Vec<Application>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, company, position, status FROM applications ORDER BY id")?;

        let applications = stmt
            .query_map([], |row| {
                Ok(Application {
                    id: row.get(0)?,
                    company: row.get(1)?,
                    position: row.get(2)?,
                    status: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(applications)
    }

    fn update(
        &self,
        id: i64,
        company: &str,
        position: &str,
        status: ApplicationStatus,
    ) -> DbResult<()> {
        validate_fields(company, position)?;

        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE applications SET company = ?1, position = ?2, status = ?3 WHERE id = ?4",
            params![company, position, status, id],
        )?;

        if changed == 0 {
            log::warn!("No application with id {}; update ignored", id);
        } else {
            log::info!("Updated application {}", id);
        }
        Ok(())
    }
}

/// Open the store in the app data directory, creating the directory and
/// schema as needed
pub fn init_store() -> DbResult<SqliteStore> {
    let data_dir = storage::get_app_data_dir()?;
    storage::ensure_dir(&data_dir).map_err(|e| DbError::StorageUnavailable {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    let store = SqliteStore::new(storage::database_path(&data_dir));
    store.initialize()?;

    log::info!("Database initialized at {}", store.path().display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SqliteStore) {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("applications.db"));
        store.initialize().unwrap();
        (temp, store)
    }

    #[test]
    fn test_initialize_creates_table() {
        let (_temp, store) = temp_store();

        let conn = Connection::open(store.path()).unwrap();
        let table_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name = 'applications'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table_count, 1);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_temp, store) = temp_store();
        store.insert("Acme", "Engineer", None).unwrap();

        store.initialize().unwrap();
        store.initialize().unwrap();

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_initialize_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("missing").join("applications.db"));

        let err = store.initialize().unwrap_err();
        assert!(matches!(err, DbError::StorageUnavailable { .. }));
    }

    #[test]
    fn test_insert_round_trip() {
        let (_temp, store) = temp_store();

        let id = store
            .insert("Globex", "Analyst", Some(ApplicationStatus::Rejected))
            .unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(
            all,
            vec![Application {
                id,
                company: "Globex".to_string(),
                position: "Analyst".to_string(),
                status: ApplicationStatus::Rejected,
            }]
        );
    }

    #[test]
    fn test_insert_assigns_unique_ids_in_order() {
        let (_temp, store) = temp_store();

        let first = store.insert("Acme", "Engineer", None).unwrap();
        let second = store.insert("Initech", "Tester", None).unwrap();
        let third = store.insert("Hooli", "Designer", None).unwrap();

        assert!(first < second && second < third);

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    #[test]
    fn test_insert_default_status() {
        let (_temp, store) = temp_store();

        store.insert("Acme", "Engineer", None).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_insert_rejects_empty_fields() {
        let (_temp, store) = temp_store();

        assert!(matches!(
            store.insert("", "Engineer", None),
            Err(DbError::ConstraintViolation(_))
        ));
        assert!(matches!(
            store.insert("Acme", " ", None),
            Err(DbError::ConstraintViolation(_))
        ));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_check_constraint_maps_to_violation() {
        let (_temp, store) = temp_store();

        // Bypass the typed API to hit the CHECK constraint
        let conn = Connection::open(store.path()).unwrap();
        let err: DbError = conn
            .execute(
                "INSERT INTO applications (company, position, status) VALUES ('Acme', 'Engineer', 'Accepted')",
                [],
            )
            .unwrap_err()
            .into();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_all_empty() {
        let (_temp, store) = temp_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_same_values_is_unchanged() {
        let (_temp, store) = temp_store();
        let id = store.insert("Acme", "Engineer", None).unwrap();
        let before = store.list_all().unwrap();

        store
            .update(id, "Acme", "Engineer", ApplicationStatus::Pending)
            .unwrap();

        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (_temp, store) = temp_store();
        store.insert("Acme", "Engineer", None).unwrap();
        let before = store.list_all().unwrap();

        store
            .update(999, "Ghost", "Nobody", ApplicationStatus::Rejected)
            .unwrap();

        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_update_rejects_empty_fields() {
        let (_temp, store) = temp_store();
        let id = store.insert("Acme", "Engineer", None).unwrap();

        assert!(matches!(
            store.update(id, "Acme", "", ApplicationStatus::Rejected),
            Err(DbError::ConstraintViolation(_))
        ));
        assert_eq!(store.list_all().unwrap()[0].position, "Engineer");
    }

    #[test]
    fn test_acme_scenario() {
        let (_temp, store) = temp_store();

        store.insert("Acme", "Engineer", None).unwrap();
        assert_eq!(
            store.list_all().unwrap(),
            vec![Application {
                id: 1,
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                status: ApplicationStatus::Pending,
            }]
        );

        store
            .update(1, "Acme Corp", "Senior Engineer", ApplicationStatus::Rejected)
            .unwrap();
        assert_eq!(
            store.list_all().unwrap(),
            vec![Application {
                id: 1,
                company: "Acme Corp".to_string(),
                position: "Senior Engineer".to_string(),
                status: ApplicationStatus::Rejected,
            }]
        );
    }

    #[test]
    fn test_records_survive_reopen() {
        let (temp, store) = temp_store();
        store.insert("Acme", "Engineer", None).unwrap();
        drop(store);

        let reopened = SqliteStore::new(temp.path().join("applications.db"));
        reopened.initialize().unwrap();
        assert_eq!(reopened.list_all().unwrap().len(), 1);
    }
}
