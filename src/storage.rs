// ABOUTME: Persistence for submitted assessments and early-access requests
//
// Rows are kept as one pretty-printed JSON array per table under the data
// directory (assessments.json, early_access.json). Every insert validates
// first, then rewrites the table through a temp file + rename.

use crate::models::{
    Assessment, EarlyAccessSubmission, InsertAssessment, InsertEarlyAccessSubmission,
    ValidationErrors,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

const ASSESSMENTS_FILE: &str = "assessments.json";
const EARLY_ACCESS_FILE: &str = "early_access.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("No record found matching '{0}'")]
    NotFound(String),

    #[error("Ambiguous id prefix '{prefix}': {count} records match")]
    Ambiguous { prefix: String, count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Where assessments and early-access requests are kept
#[cfg_attr(test, mockall::automock)]
pub trait AssessmentStore: Send + Sync {
    /// Validate and store an assessment, returning the stored row
    fn insert_assessment(&self, insert: InsertAssessment) -> Result<Assessment, StorageError>;

    /// All stored assessments, oldest first
    fn list_assessments(&self) -> Result<Vec<Assessment>, StorageError>;

    /// Look up an assessment by full id or unambiguous id prefix
    fn get_assessment(&self, id_or_prefix: &str) -> Result<Assessment, StorageError> {
        let rows = self.list_assessments()?;
        find_by_id_prefix(&rows, id_or_prefix, |a| a.id).cloned()
    }

    /// Validate and store an early-access request
    fn insert_early_access(
        &self,
        insert: InsertEarlyAccessSubmission,
    ) -> Result<EarlyAccessSubmission, StorageError>;

    fn list_early_access(&self) -> Result<Vec<EarlyAccessSubmission>, StorageError>;
}

/// Find a row by exact UUID, then by case-insensitive UUID prefix
pub fn find_by_id_prefix<'a, T>(
    rows: &'a [T],
    id_or_prefix: &str,
    id_of: impl Fn(&T) -> Uuid,
) -> Result<&'a T, StorageError> {
    let needle = id_or_prefix.trim().to_lowercase();
    if needle.is_empty() {
        return Err(StorageError::NotFound(id_or_prefix.to_string()));
    }

    if let Ok(uuid) = Uuid::parse_str(&needle) {
        if let Some(row) = rows.iter().find(|r| id_of(*r) == uuid) {
            return Ok(row);
        }
    }

    let matches: Vec<&T> = rows
        .iter()
        .filter(|r| id_of(*r).to_string().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Err(StorageError::NotFound(id_or_prefix.to_string())),
        1 => Ok(matches[0]),
        count => Err(StorageError::Ambiguous {
            prefix: id_or_prefix.to_string(),
            count,
        }),
    }
}

/// JSON-file backed store rooted at a data directory
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StorageError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            warn!("Table {} is empty, treating as no rows", path.display());
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save_table<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, rows)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    fn append<T: Serialize>(&self, file: &str, row: &T) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows: Vec<serde_json::Value> = self.load_table(file)?;
        rows.push(serde_json::to_value(row)?);
        self.save_table(file, &rows)
    }
}

impl AssessmentStore for JsonFileStore {
    fn insert_assessment(&self, insert: InsertAssessment) -> Result<Assessment, StorageError> {
        insert.validate()?;
        let row = Assessment::from_insert(insert);
        self.append(ASSESSMENTS_FILE, &row)?;
        info!(
            "Stored assessment {} for '{}'",
            row.id, row.data.business_name
        );
        Ok(row)
    }

    fn list_assessments(&self) -> Result<Vec<Assessment>, StorageError> {
        self.load_table(ASSESSMENTS_FILE)
    }

    fn insert_early_access(
        &self,
        insert: InsertEarlyAccessSubmission,
    ) -> Result<EarlyAccessSubmission, StorageError> {
        insert.validate()?;
        let row = EarlyAccessSubmission::from_insert(insert);
        self.append(EARLY_ACCESS_FILE, &row)?;
        info!("Stored early-access request {} from {}", row.id, row.data.company);
        Ok(row)
    }

    fn list_early_access(&self) -> Result<Vec<EarlyAccessSubmission>, StorageError> {
        self.load_table(EARLY_ACCESS_FILE)
    }
}
