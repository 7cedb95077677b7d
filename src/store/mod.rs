pub mod json;
pub mod memory;

use std::fs;
use std::path::Path;

use crate::domain::contact::ContactBook;
use crate::errors::AppError;

pub const DEFAULT_STORE_PATH: &str = "contacts.json";

/// Where a loaded book actually came from. `Missing` and `Corrupt` both
/// yield an empty book (the backing file is treated as absent), but
/// callers can tell "empty on purpose" from "empty because the file was
/// unreadable or malformed" and warn accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    File,
    Missing,
    Corrupt,
}

#[derive(Debug)]
pub struct Loaded {
    pub book: ContactBook,
    pub source: LoadSource,
}

pub trait ContactStore {
    fn load(&self) -> Result<Loaded, AppError>;

    fn save(&self, book: &ContactBook) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
