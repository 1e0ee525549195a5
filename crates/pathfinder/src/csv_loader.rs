use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;

use common::types::Edge;
use pathfind_core::GraphCsr;

use super::error::Error;
use super::labels::LabelTable;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_label: String,

    #[serde(rename = "to")]
    pub to_label: String,

    #[serde(rename = "weight")]
    pub weight: i64,
}

/// Loader for CSV graph input with a `from,to,weight` header row.
///
/// Columns carry node labels, not indices; the node count is taken from the
/// label table. Direction handling matches the edge-list loader.
pub struct CsvLoader {
    path: String,
    directed: bool,
}

impl CsvLoader {
    pub fn new(path: String, directed: bool) -> Self {
        CsvLoader { path, directed }
    }

    /// Reads and parses the file into an immutable CSR graph.
    pub fn load(&self, labels: &LabelTable) -> Result<GraphCsr, Error> {
        let mut edges = self.parse_csv_to_edges(labels)?;
        Ok(GraphCsr::from_edges(labels.len(), &mut edges)?)
    }

    fn parse_csv_to_edges(&self, labels: &LabelTable) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            eprintln!("Failed to read file {}: {:?}", self.path, e);
            Error::Io(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            let u = labels.index(&record.from_label)?;
            let v = labels.index(&record.to_label)?;

            edges.push((u, v, record.weight));
            if !self.directed {
                edges.push((v, u, record.weight));
            }
        }
        Ok(edges)
    }
}
