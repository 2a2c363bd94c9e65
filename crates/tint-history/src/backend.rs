//! History persistence
//!
//! The history is one record under the `history_list` key, always written as
//! a whole. `FileBackend` keeps it in a JSON object so other keys in the same
//! file survive.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::StoreError;

/// Key the history record is stored under
pub const HISTORY_KEY: &str = "history_list";

/// Where the history record lives
pub trait HistoryBackend {
    /// Stored entries, or `None` when nothing was ever written
    fn read(&self) -> Result<Option<Vec<String>>, StoreError>;

    /// Replace the stored record with `entries`
    fn write(&mut self, entries: &[String]) -> Result<(), StoreError>;
}

/// In-memory backend
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: Option<Vec<String>>,
    writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds a record
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: Some(entries.into_iter().map(Into::into).collect()),
            writes: 0,
        }
    }

    pub fn entries(&self) -> Option<&[String]> {
        self.entries.as_deref()
    }

    /// Number of writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HistoryBackend for MemoryBackend {
    fn read(&self) -> Result<Option<Vec<String>>, StoreError> {
        Ok(self.entries.clone())
    }

    fn write(&mut self, entries: &[String]) -> Result<(), StoreError> {
        self.entries = Some(entries.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// JSON file backend
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&contents)?;
        match value {
            Value::Object(map) => Ok(Some(map)),
            other => Err(StoreError::Shape(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

impl HistoryBackend for FileBackend {
    fn read(&self) -> Result<Option<Vec<String>>, StoreError> {
        let Some(mut document) = self.read_document()? else {
            return Ok(None);
        };

        match document.remove(HISTORY_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(StoreError::Shape(format!(
                        "{} contains a {}",
                        HISTORY_KEY,
                        json_kind(&other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(StoreError::Shape(format!(
                "{} is a {}, expected an array",
                HISTORY_KEY,
                json_kind(&other)
            ))),
        }
    }

    fn write(&mut self, entries: &[String]) -> Result<(), StoreError> {
        // An unreadable document is replaced rather than blocking every write
        let mut document = self.read_document().ok().flatten().unwrap_or_default();
        document.insert(
            HISTORY_KEY.to_string(),
            Value::Array(entries.iter().cloned().map(Value::String).collect()),
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&Value::Object(document))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Wrote {} history entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
