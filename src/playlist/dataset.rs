use crate::models::PlaylistRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Read-only lookup of playlists by exact name
#[cfg_attr(test, mockall::automock)]
pub trait PlaylistSource {
    fn find_by_name(&self, name: &str) -> Option<PlaylistRecord>;
}

/// Playlist table loaded once at startup
#[derive(Debug, Default)]
pub struct PlaylistDataset {
    records: Vec<PlaylistRecord>,
    by_name: HashMap<String, usize>,
}

impl PlaylistDataset {
    /// Load the dataset from a CSV file with `name` and `link` columns
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open playlist dataset '{}'", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Failed to read playlist dataset '{}'", path.display()))
    }

    /// Parse CSV rows; columns other than `name` and `link` are ignored
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<PlaylistRecord>()
            .enumerate()
            .map(|(i, row)| row.with_context(|| format!("Invalid playlist row {}", i + 1)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<PlaylistRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            // First occurrence wins for duplicated names
            by_name.entry(record.name.clone()).or_insert(index);
        }
        if by_name.len() < records.len() {
            log::warn!(
                "Playlist dataset has {} duplicated names; the first row of each is used",
                records.len() - by_name.len()
            );
        }
        Self { records, by_name }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PlaylistSource for PlaylistDataset {
    fn find_by_name(&self, name: &str) -> Option<PlaylistRecord> {
        self.by_name
            .get(name)
            .map(|&index| self.records[index].clone())
    }
}
