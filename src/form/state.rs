// Form contents, edit mode, and the snapshot rendered by the window
use serde::{Deserialize, Serialize};

use crate::state::{Application, ApplicationStatus, InvalidStatus};

pub const EDIT_LABEL: &str = "Edit Selected";
pub const SAVE_LABEL: &str = "Save Changes";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
}

/// Raw field values as typed in the window
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl FormInput {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        status: ApplicationStatus,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            status: Some(status.as_str().to_string()),
        }
    }

    /// Convert to form fields. A missing status means `Pending`.
    pub fn into_fields(self) -> Result<FormFields, InvalidStatus> {
        let status = match self.status {
            Some(status) => status.parse()?,
            None => ApplicationStatus::default(),
        };
        Ok(FormFields {
            company: self.company,
            position: self.position,
            status,
        })
    }
}

/// `Idle` accepts new records; `Editing` holds an existing record until saved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Editing { id: i64 },
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormMode::Editing { id } => Some(*id),
            FormMode::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub fields: FormFields,
    pub editing: bool,
    pub editing_id: Option<i64>,
    pub add_enabled: bool,
    pub edit_label: &'static str,
    pub selected_id: Option<i64>,
    pub statuses: Vec<ApplicationStatus>,
    pub rows: Vec<Application>,
}
