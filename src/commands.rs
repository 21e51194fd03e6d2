// Tauri IPC Commands
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tauri::{State, WebviewWindow};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::form::{FormController, FormError, FormInput, FormResult, FormView, Severity};
use crate::state::SqliteStore;

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Form state for the tracker window, managed by Tauri
pub struct TrackerState(pub Mutex<FormController<SqliteStore>>);

impl TrackerState {
    pub fn new(form: FormController<SqliteStore>) -> Self {
        Self(Mutex::new(form))
    }

    fn lock(&self) -> CommandResult<MutexGuard<'_, FormController<SqliteStore>>> {
        Ok(self.0.lock()?)
    }
}

/// Run a form action. A failure is passed to `notify` after the form lock
/// is released, and the unchanged view is returned once it comes back.
fn run_action<F, N>(state: &TrackerState, action: F, notify: N) -> CommandResult<FormView>
where
    F: FnOnce(&mut FormController<SqliteStore>) -> FormResult<FormView>,
    N: FnOnce(&FormError),
{
    let (view, failure) = {
        let mut form = state.lock()?;
        match action(&mut form) {
            Ok(view) => (view, None),
            Err(err) => (form.view(), Some(err)),
        }
    };

    if let Some(err) = failure {
        notify(&err);
    }
    Ok(view)
}

/// Blocking message dialog, modal over `window`
fn notify(window: &WebviewWindow, err: &FormError) {
    let kind = match err.severity() {
        Severity::Warning => {
            log::warn!("{}: {}", err.title(), err);
            MessageDialogKind::Warning
        }
        Severity::Error => {
            log::error!("{}: {}", err.title(), err);
            MessageDialogKind::Error
        }
    };

    window
        .dialog()
        .message(err.to_string())
        .title(err.title())
        .kind(kind)
        .parent(window)
        .blocking_show();
}

// ==================== FORM COMMANDS ====================
// Async so the blocking dialog never runs on the main thread

/// Current form and listing, refreshed from storage
#[tauri::command]
pub async fn get_form(
    window: WebviewWindow,
    state: State<'_, TrackerState>,
) -> CommandResult<FormView> {
    run_action(&state, |form| form.load(), |err| notify(&window, err))
}

/// Highlight a row in the listing
#[tauri::command]
pub fn select_application(
    state: State<'_, TrackerState>,
    id: Option<i64>,
) -> CommandResult<FormView> {
    let mut form = state.lock()?;
    Ok(form.select(id))
}

#[tauri::command]
pub async fn add_application(
    window: WebviewWindow,
    state: State<'_, TrackerState>,
    input: FormInput,
) -> CommandResult<FormView> {
    run_action(&state, |form| form.add(input), |err| notify(&window, err))
}

/// The Edit/Save button: loads the selection, or saves the record being edited
#[tauri::command]
pub async fn edit_or_save_application(
    window: WebviewWindow,
    state: State<'_, TrackerState>,
    input: FormInput,
) -> CommandResult<FormView> {
    run_action(&state, |form| form.edit_or_save(input), |err| notify(&window, err))
}
