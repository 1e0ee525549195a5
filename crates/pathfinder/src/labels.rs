use std::collections::HashMap;

use super::error::Error;

/// Bidirectional mapping between human-readable node labels and the dense
/// integer indices the solvers operate on.
///
/// The table is built once from the configured label list and owned by the
/// loading layer; solvers only ever see indices. Index assignment follows
/// list order, so the first label is node 0.
#[derive(Debug, Clone)]
pub struct LabelTable {
    index_by_label: HashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelTable {
    /// Builds the table from an ordered list of labels.
    ///
    /// # Errors
    /// Returns `Error::DuplicateLabel` if the same label appears twice.
    pub fn new(labels: &[String]) -> Result<Self, Error> {
        let mut index_by_label = HashMap::with_capacity(labels.len());

        for (index, label) in labels.iter().enumerate() {
            if index_by_label.insert(label.clone(), index).is_some() {
                return Err(Error::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self {
            index_by_label,
            labels: labels.to_vec(),
        })
    }

    /// Resolves a label to its node index.
    ///
    /// # Errors
    /// Returns `Error::UnknownLabel` for labels outside the table.
    pub fn index(&self, label: &str) -> Result<usize, Error> {
        self.index_by_label
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    /// Resolves a node index back to its label.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of labels, which is also the implied node count when the
    /// input header does not carry one.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
