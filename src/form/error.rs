// Errors surfaced to the user as notices
use std::fmt;
use thiserror::Error;

use crate::state::{DbError, InvalidStatus};

/// What the user was trying to do when no record was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Edit,
    Update,
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionAction::Edit => f.write_str("edit"),
            SelectionAction::Update => f.write_str("update"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Please enter BOTH company and position.")]
    MissingFields,
    #[error("Please select an application to {0}.")]
    NoSelection(SelectionAction),
    #[error("{0}")]
    Store(#[from] DbError),
}

pub type FormResult<T> = Result<T, FormError>;

impl From<InvalidStatus> for FormError {
    fn from(err: InvalidStatus) -> Self {
        FormError::Store(err.into())
    }
}

impl FormError {
    /// Title of the notice dialog
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingFields => "Input Error",
            FormError::NoSelection(_) => "Selection Error",
            FormError::Store(_) => "Storage Error",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FormError::NoSelection(_) => Severity::Warning,
            FormError::MissingFields | FormError::Store(_) => Severity::Error,
        }
    }
}
