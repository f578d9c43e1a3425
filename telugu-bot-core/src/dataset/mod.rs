//! Instruction-tuning dataset used as an extra chat reply source
//!
//! Records come from an Alpaca-style dataset (`instruction`, `input`,
//! `output`). Matching is a linear containment scan; there is no index.

pub mod loader;

pub use loader::{DatasetError, load_dataset};

use serde::{Deserialize, Serialize};

/// One dataset row; unknown fields are ignored when deserializing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub instruction: String,
    #[serde(default)]
    pub input: String,
    pub output: String,
}

impl DatasetRecord {
    pub fn new(
        instruction: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self { instruction: instruction.into(), input: input.into(), output: output.into() }
    }
}

/// Read-only collection of records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DatasetRecord>,
}

impl Dataset {
    pub fn new(records: Vec<DatasetRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Outputs of every record whose `input` is non-empty and whose
    /// lower-cased `instruction` contains `normalized`
    ///
    /// `normalized` is expected to be lower-cased already. An empty query
    /// matches every record with an input.
    pub fn matching_outputs(&self, normalized: &str) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| {
                !record.input.is_empty() && record.instruction.to_lowercase().contains(normalized)
            })
            .map(|record| record.output.as_str())
            .collect()
    }
}

impl FromIterator<DatasetRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = DatasetRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_of_instruction_matches() {
        let dataset = Dataset::new(vec![DatasetRecord::new(
            "how are you doing today",
            "x",
            "Fine, thanks",
        )]);

        assert_eq!(dataset.matching_outputs("how are you"), vec!["Fine, thanks"]);
        assert!(dataset.matching_outputs("how are they").is_empty());
    }

    #[test]
    fn test_records_without_input_never_match() {
        let dataset = Dataset::new(vec![
            DatasetRecord::new("Tell me a joke", "", "no"),
            DatasetRecord::new("Tell me a JOKE about cats", "cats", "yes"),
        ]);

        assert_eq!(dataset.matching_outputs("joke"), vec!["yes"]);
    }

    #[test]
    fn test_empty_query_matches_all_with_input() {
        let dataset: Dataset = vec![
            DatasetRecord::new("a", "1", "first"),
            DatasetRecord::new("b", "", "second"),
            DatasetRecord::new("c", "3", "third"),
        ]
        .into_iter()
        .collect();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.matching_outputs(""), vec!["first", "third"]);
    }
}
