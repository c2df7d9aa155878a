//! Per-generation evaluation log consumed by reports and plots.

use crate::error::SfResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub generation: usize,
    pub best: String,
    pub cost: usize,
}

/// Append-only sequence of [`TraceRecord`]s, one per evaluated generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationTrace {
    records: Vec<TraceRecord>,
}

#[derive(Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TraceFormat {
    #[default]
    Csv,
    Json,
}

impl EvaluationTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceRecord> {
        self.records.iter()
    }

    /// Writes `generation,best,cost` rows with a header line.
    pub fn write_csv<W: Write>(&self, writer: W) -> SfResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: W) -> SfResult<()> {
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, format: TraceFormat) -> SfResult<()> {
        let file = BufWriter::new(File::create(path)?);
        match format {
            TraceFormat::Csv => self.write_csv(file),
            TraceFormat::Json => self.write_json(file),
        }
    }
}

impl<'a> IntoIterator for &'a EvaluationTrace {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
