use crate::collection::ContactCollection;
use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use crate::repositories::traits::ContactStore;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Contact store backed by a pretty-printed JSON file.
///
/// The file holds an array of objects with the keys `contact_id`, `name`,
/// `phone`, `email` and `address`. Loading never overwrites the file, and
/// saving goes through a sibling temporary file that is renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the contacts file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the contacts file.
    ///
    /// A missing file is an empty collection. Records that parse but fail
    /// collection rules (empty name, repeated ID) are dropped by
    /// [`ContactCollection::import_all`].
    ///
    /// # Errors
    ///
    /// - `StorageError::Io` if the file exists but cannot be read
    /// - `StorageError::Json` if it is not valid JSON
    /// - `StorageError::Malformed` if it is not an array of objects
    /// - `StorageError::Record` if an object lacks a required string field
    pub fn try_load(&self) -> StorageResult<ContactCollection> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "Contacts file not found at {}. Starting with empty contact book.",
                    self.path.display()
                );
                return Ok(ContactCollection::new());
            }
            Err(e) => return Err(e.into()),
        };

        let value: Value = serde_json::from_str(&raw)?;
        let Value::Array(items) = value else {
            return Err(StorageError::Malformed(
                "expected a JSON array of contacts".to_string(),
            ));
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => ContactRecord::from_map(map).map_err(StorageError::from),
                _ => Err(StorageError::Malformed(format!(
                    "entry {} is not an object",
                    index
                ))),
            })
            .collect::<StorageResult<Vec<ContactRecord>>>()?;

        Ok(ContactCollection::import_all(records))
    }

    /// Serialize `collection` into the on-disk document.
    fn render(collection: &ContactCollection) -> StorageResult<String> {
        Ok(serde_json::to_string_pretty(&collection.export_all())?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "contacts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        let result = write_synced(&temp, contents).and_then(|()| fs::rename(&temp, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&temp);
        }
        result
    }
}

fn write_synced(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> ContactCollection {
        match self.try_load() {
            Ok(collection) => {
                info!(
                    "Successfully loaded {} contacts from {}",
                    collection.len(),
                    self.path.display()
                );
                collection
            }
            Err(e) => {
                error!(
                    "Error loading contacts from {}: {}. Starting with empty contact book.",
                    self.path.display(),
                    e
                );
                ContactCollection::new()
            }
        }
    }

    fn save(&self, collection: &ContactCollection) -> StorageResult<()> {
        let contents = Self::render(collection)?;
        if let Err(e) = self.write_atomically(&contents) {
            error!("Error saving contacts to {}: {}", self.path.display(), e);
            return Err(e.into());
        }

        info!(
            "Successfully saved {} contacts to {}",
            collection.len(),
            self.path.display()
        );
        Ok(())
    }
}
