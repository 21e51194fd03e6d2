// In-memory application store for exercising the form without SQLite
use std::cell::{Cell, RefCell};

use super::db::DbResult;
use super::models::{Application, ApplicationStatus};
use super::repository::{validate_fields, ApplicationRepository};

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<Application>>,
    last_id: Cell<i64>,
    calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl ApplicationRepository for MemoryStore {
    fn initialize(&self) -> DbResult<()> {
        self.record_call();
        Ok(())
    }

    fn insert(
        &self,
        company: &str,
        position: &str,
        status: Option<ApplicationStatus>,
    ) -> DbResult<i64> {
        self.record_call();
        validate_fields(company, position)?;

        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        self.rows.borrow_mut().push(Application {
            id,
            company: company.to_string(),
            position: position.to_string(),
            status: status.unwrap_or_default(),
        });
        Ok(id)
    }

    fn list_all(&self) -> DbResult<Vec<Application>> {
        self.record_call();
        Ok(self.rows.borrow().clone())
    }

    fn update(
        &self,
        id: i64,
        company: &str,
        position: &str,
        status: ApplicationStatus,
    ) -> DbResult<()> {
        self.record_call();
        validate_fields(company, position)?;

        if let Some(row) = self.rows.borrow_mut().iter_mut().find(|row| row.id == id) {
            row.company = company.to_string();
            row.position = position.to_string();
            row.status = status;
        }
        Ok(())
    }
}
