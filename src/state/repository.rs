// Persistence contract used by the form controller
use super::db::{DbError, DbResult};
use super::models::{Application, ApplicationStatus};

/// The four operations the presentation layer needs from storage.
///
/// Implementations must reject blank `company`/`position` values with
/// [`DbError::ConstraintViolation`] even though the form already checks them.
pub trait ApplicationRepository {
    /// Ensure the `applications` table exists. Safe to call on every start.
    fn initialize(&self) -> DbResult<()>;

    /// Append a record and return its id. `None` stores the default status.
    fn insert(
        &self,
        company: &str,
        position: &str,
        status: Option<ApplicationStatus>,
    ) -> DbResult<i64>;

    /// Every record, oldest first.
    fn list_all(&self) -> DbResult<Vec<Application>>;

    /// Overwrite the mutable fields of record `id`. Unknown ids are ignored.
    fn update(
        &self,
        id: i64,
        company: &str,
        position: &str,
        status: ApplicationStatus,
    ) -> DbResult<()>;
}

pub(crate) fn validate_fields(company: &str, position: &str) -> DbResult<()> {
    if company.trim().is_empty() {
        return Err(DbError::ConstraintViolation(
            "company must not be empty".to_string(),
        ));
    }
    if position.trim().is_empty() {
        return Err(DbError::ConstraintViolation(
            "position must not be empty".to_string(),
        ));
    }
    Ok(())
}
