// Form controller: validation, selection, and the add/edit/save cycle
use crate::state::{Application, ApplicationRepository, ApplicationStatus};

use super::error::{FormError, FormResult, SelectionAction};
use super::state::{FormFields, FormInput, FormMode, FormView, EDIT_LABEL, SAVE_LABEL};

/// Drives the tracker window against an [`ApplicationRepository`].
///
/// Actions that receive a [`FormInput`] first take it as the current form
/// contents, so values rejected by validation stay in the form.
pub struct FormController<R> {
    store: R,
    fields: FormFields,
    mode: FormMode,
    highlighted: Option<i64>,
    rows: Vec<Application>,
}

impl<R: ApplicationRepository> FormController<R> {
    pub fn new(store: R) -> Self {
        Self {
            store,
            fields: FormFields::default(),
            mode: FormMode::Idle,
            highlighted: None,
            rows: Vec::new(),
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn rows(&self) -> &[Application] {
        &self.rows
    }

    pub fn view(&self) -> FormView {
        FormView {
            fields: self.fields.clone(),
            editing: self.mode.is_editing(),
            editing_id: self.mode.editing_id(),
            add_enabled: !self.mode.is_editing(),
            edit_label: if self.mode.is_editing() {
                SAVE_LABEL
            } else {
                EDIT_LABEL
            },
            selected_id: self.highlighted,
            statuses: ApplicationStatus::ALL.to_vec(),
            rows: self.rows.clone(),
        }
    }

    /// Populate the listing for a freshly opened window
    pub fn load(&mut self) -> FormResult<FormView> {
        self.refresh()?;
        Ok(self.view())
    }

    /// Replace the listing with the store's current contents
    pub fn refresh(&mut self) -> FormResult<()> {
        let rows = self.store.list_all()?;
        if let Some(id) = self.highlighted {
            if !rows.iter().any(|row| row.id == id) {
                self.highlighted = None;
            }
        }
        self.rows = rows;
        Ok(())
    }

    /// Highlight a listing row. Ids not in the listing clear the highlight.
    pub fn select(&mut self, id: Option<i64>) -> FormView {
        self.highlighted = id.filter(|id| self.rows.iter().any(|row| row.id == *id));
        self.view()
    }

    pub fn add(&mut self, input: FormInput) -> FormResult<FormView> {
        // The Add button is disabled while a record is being edited
        if self.mode.is_editing() {
            log::debug!("Add ignored while editing");
            return Ok(self.view());
        }

        self.adopt(input)?;
        let (company, position) = self.validated()?;

        self.store
            .insert(&company, &position, Some(self.fields.status))?;
        self.reset_fields();
        self.refresh()?;
        Ok(self.view())
    }

    pub fn begin_edit(&mut self, input: FormInput) -> FormResult<FormView> {
        self.adopt(input)?;

        let record = self
            .highlighted
            .and_then(|id| self.rows.iter().find(|row| row.id == id))
            .cloned()
            .ok_or(FormError::NoSelection(SelectionAction::Edit))?;

        log::debug!("Editing application {}", record.id);
        self.mode = FormMode::Editing { id: record.id };
        self.fields = FormFields {
            company: record.company,
            position: record.position,
            status: record.status,
        };
        Ok(self.view())
    }

    pub fn save(&mut self, input: FormInput) -> FormResult<FormView> {
        self.adopt(input)?;

        let id = self
            .mode
            .editing_id()
            .ok_or(FormError::NoSelection(SelectionAction::Update))?;
        let (company, position) = self.validated()?;

        self.store
            .update(id, &company, &position, self.fields.status)?;
        self.reset_fields();
        self.mode = FormMode::Idle;
        self.refresh()?;
        Ok(self.view())
    }

    /// The combined Edit/Save button
    pub fn edit_or_save(&mut self, input: FormInput) -> FormResult<FormView> {
        match self.mode {
            FormMode::Idle => self.begin_edit(input),
            FormMode::Editing { .. } => self.save(input),
        }
    }

    fn adopt(&mut self, input: FormInput) -> FormResult<()> {
        self.fields = input.into_fields()?;
        Ok(())
    }

    fn validated(&self) -> FormResult<(String, String)> {
        let company = self.fields.company.trim();
        let position = self.fields.position.trim();
        if company.is_empty() || position.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok((company.to_string(), position.to_string()))
    }

    fn reset_fields(&mut self) {
        self.fields = FormFields::default();
    }
}
