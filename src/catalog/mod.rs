//! University catalog ingestion.
//!
//! The catalog is externally owned; this module only loads it into memory
//! from the JSON seed format or from spreadsheet CSV exports. Optional
//! numeric columns that are blank or unparseable load as absent rather than
//! silently becoming zero.

mod rows;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::advising::domain::{University, UniversityId};
use rows::{CatalogCsvRow, CatalogSeedRow};

/// In-memory view of the university catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UniversityCatalog {
    universities: Vec<University>,
}

impl UniversityCatalog {
    pub fn new(universities: Vec<University>) -> Self {
        Self { universities }
    }

    /// Load the JSON seed format (an array of camelCase records).
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let rows: Vec<CatalogSeedRow> = serde_json::from_reader(reader)?;
        let universities = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.into_university(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(universities))
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_json_reader(file)
    }

    /// Load a CSV export with one university per row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut universities = Vec::new();
        for (index, record) in csv_reader.deserialize::<CatalogCsvRow>().enumerate() {
            let row = record?;
            universities.push(row.into_university(index)?);
        }

        Ok(Self::new(universities))
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn find(&self, id: &UniversityId) -> Option<&University> {
        self.universities
            .iter()
            .find(|university| &university.id == id)
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    pub fn into_inner(self) -> Vec<University> {
        self.universities
    }
}

/// Error raised while loading a catalog source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
}
