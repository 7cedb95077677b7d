pub use crate::cli::{command, run_app};
pub use crate::domain::contact::{Contact, ContactBook};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, LoadSource, Loaded, json::JsonStore, memory::MemStore};
