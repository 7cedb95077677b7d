use super::{ContactStore, LoadSource, Loaded};
use crate::domain::contact::ContactBook;
use crate::errors::AppError;

/// In-memory backend with no durability; save is a no-op. Used by unit
/// tests and benches to exercise handlers without touching disk.
#[derive(Default)]
pub struct MemStore {
    pub data: ContactBook,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Loaded, AppError> {
        Ok(Loaded {
            book: self.data.clone(),
            source: LoadSource::File,
        })
    }

    fn save(&self, _book: &ContactBook) -> Result<(), AppError> {
        Ok(())
    }
}
