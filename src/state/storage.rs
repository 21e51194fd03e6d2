// On-disk locations for the tracker's data
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the database, relative to the installation directory
pub const DATA_DIR_NAME: &str = "data";
pub const DATABASE_FILE_NAME: &str = "applications.db";
/// Per-user data directory name, used when the executable cannot be located
pub const APP_IDENTIFIER: &str = "com.jobtrack.app";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to get app data directory")]
    NoAppDataDir,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Get the data directory: `data/` next to the installed executable.
///
/// Falls back to the per-user data directory when the executable path is
/// unavailable. The directory is not created here; see [`ensure_dir`].
pub fn get_app_data_dir() -> StorageResult<PathBuf> {
    match install_dir() {
        Some(dir) => Ok(dir.join(DATA_DIR_NAME)),
        None => {
            let data_dir = dirs::data_dir().ok_or(StorageError::NoAppDataDir)?;
            Ok(data_dir.join(APP_IDENTIFIER))
        }
    }
}

fn install_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Create a directory and any missing parents
pub fn ensure_dir(dir: &Path) -> StorageResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Path of the database file inside a data directory
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILE_NAME)
}
