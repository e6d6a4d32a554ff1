use crate::error::{CatalogError, CatalogResult};
use crate::types::BlogRecord;
use serde_json::Value;
use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;
use tracing::{info, warn};

/// Blog Catalog - the full ordered collection of player write-ups
///
/// The catalog is built exactly once at startup from the exported JSON file
/// and is read-only afterwards. File order is significant: it determines
/// which records fall into which rotation day.
pub struct BlogCatalog {
    /// Records in file order
    records: Vec<BlogRecord>,

    /// Map from lowercase player name to record index (for quick lookup)
    by_name: HashMap<String, usize>,
}

impl BlogCatalog {
    /// Create an empty catalog (the degraded "no data loaded" state)
    pub fn empty() -> Self {
        Self { records: Vec::new(), by_name: HashMap::new() }
    }

    /// Build a catalog from already-parsed records
    ///
    /// Records without a name are kept in the ordered view but skipped in
    /// the index. Duplicate names overwrite earlier index entries, so the
    /// indexed view is last-write-wins while the ordered view keeps all.
    pub fn from_records(records: Vec<BlogRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            match record.key() {
                Some(key) => {
                    by_name.insert(key, index);
                }
                None => {
                    warn!("Skipping unnamed blog record at index {index} in name index");
                }
            }
        }

        Self { records, by_name }
    }

    /// Load the catalog from the exported JSON file
    ///
    /// Accepted shapes are an object with a `blogs` array field, or a bare
    /// array of records. Anything else is an error; the caller decides how
    /// to degrade.
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> CatalogResult<Self> {
        info!("Loading blog catalog from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path).await?;
        let document: Value = serde_json::from_str(&json_content)?;

        let items = match document {
            Value::Object(mut fields) => match fields.remove("blogs") {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(CatalogError::UnexpectedShape(format!(
                        "`blogs` field holds {} instead of an array",
                        json_type_name(&other)
                    )))
                }
                None => {
                    return Err(CatalogError::UnexpectedShape(
                        "object without a `blogs` field".to_string(),
                    ))
                }
            },
            Value::Array(items) => items,
            other => {
                return Err(CatalogError::UnexpectedShape(format!(
                    "top-level {} instead of an object or array",
                    json_type_name(&other)
                )))
            }
        };

        let records = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<BlogRecord>, _>>()?;

        info!("Loaded {} blog records from file", records.len());

        Ok(Self::from_records(records))
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in file order
    pub fn records(&self) -> &[BlogRecord] {
        &self.records
    }

    /// Index of the record with the given name (case-insensitive)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Look up a record by player name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&BlogRecord> {
        self.index_of(name).map(|index| &self.records[index])
    }

    /// The contiguous sub-sequence of records covered by `range`
    ///
    /// The range is expected to be pre-clamped to the catalog length.
    pub fn slice(&self, range: Range<usize>) -> &[BlogRecord] {
        &self.records[range]
    }

    /// Number of entries in the name index
    pub fn indexed_count(&self) -> usize {
        self.by_name.len()
    }

    /// Summed word count across the whole catalog
    pub fn total_word_count(&self) -> u64 {
        self.records.iter().map(|record| record.word_count).sum()
    }

    /// Record count per position across the whole catalog
    pub fn position_counts(&self) -> HashMap<String, usize> {
        let mut positions = HashMap::new();
        for record in &self.records {
            *positions.entry(record.position.clone()).or_insert(0) += 1;
        }
        positions
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
