use crate::herb_table::record::HerbRecord;
use crate::library::error::{HerbalError, HerbalResult};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

pub const NO_DATA_AVAILABLE: &str = "No data available";

const REQUIRED_COLUMNS: [&str; 3] = ["herb", "symptoms", "benefit"];

/// Herb records in file order, plus a name index for benefit lookups.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTable {
    records: Vec<HerbRecord>,
    by_herb: HashMap<String, usize>,
    skipped_rows: usize,
}

impl KnowledgeTable {
    /// Rows with a blank herb name are dropped. When a name repeats, the
    /// later row's benefit wins the lookup; every row still takes part in
    /// symptom matching.
    pub fn new(records: Vec<HerbRecord>) -> Self {
        let total = records.len();
        let records: Vec<HerbRecord> = records
            .into_iter()
            .filter(|record| !record.herb.trim().is_empty())
            .collect();

        let by_herb = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.herb.clone(), index))
            .collect();

        Self {
            skipped_rows: total - records.len(),
            records,
            by_herb,
        }
    }

    /// Columns are resolved by header name, so their order is free and
    /// unknown columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> HerbalResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| HerbalError::KnowledgeTable(e.to_string()))?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(HerbalError::KnowledgeTable(format!(
                "missing column(s): {}",
                missing.join(", ")
            )));
        }

        let records = csv_reader
            .deserialize::<HerbRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HerbalError::KnowledgeTable(e.to_string()))?;

        Ok(Self::new(records))
    }

    pub fn load(path: &Path) -> HerbalResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            HerbalError::KnowledgeTable(format!("failed to open '{}': {}", path.display(), e))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn records(&self) -> &[HerbRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn get(&self, herb: &str) -> Option<&HerbRecord> {
        self.by_herb.get(herb).map(|&index| &self.records[index])
    }

    pub fn benefit_for(&self, herb: &str) -> &str {
        self.get(herb)
            .map(|record| record.benefit.as_str())
            .unwrap_or(NO_DATA_AVAILABLE)
    }
}
