use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::{ContactStore, LoadSource, Loaded, create_file_parent};
use crate::domain::contact::ContactBook;
use crate::errors::AppError;

/// File-backed store. The whole book is rewritten on every save; there
/// is no atomic rename, so a crash mid-write can leave a torn file
/// (which the next load then treats as corrupt and absorbs).
pub struct JsonStore {
    pub path: String,
}

impl JsonStore {
    pub fn new(path: &str) -> Result<Self, AppError> {
        create_file_parent(path)?;

        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Loaded, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Loaded {
                book: ContactBook::new(),
                source: LoadSource::Missing,
            });
        }

        // An unreadable file is absorbed the same way malformed content
        // is: the caller gets an empty book plus the Corrupt marker.
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => {
                return Ok(Loaded {
                    book: ContactBook::new(),
                    source: LoadSource::Corrupt,
                });
            }
        };

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Loaded {
                book: ContactBook::new(),
                source: LoadSource::Missing,
            });
        }

        match serde_json::from_str(&data) {
            Ok(book) => Ok(Loaded {
                book,
                source: LoadSource::File,
            }),
            Err(_) => Ok(Loaded {
                book: ContactBook::new(),
                source: LoadSource::Corrupt,
            }),
        }
    }

    fn save(&self, book: &ContactBook) -> Result<(), AppError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            create_file_parent(&self.path)?;
        }

        // Pretty-print with a four-space indent so the file diffs well
        // and round-trips byte for byte against existing stores.
        let mut data = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut data, formatter);
        book.serialize(&mut ser)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&data)?;

        Ok(())
    }
}
