//! The feature file: a two-line schema header, then one JSON
//! `["rule text",[f64,...]]` record per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use ruleminer_core::errors::{FeatureError, ParseError, PipelineError, RuleMinerResult};
use ruleminer_core::types::AssociationRule;

use super::{FeatureSchema, FeatureVector};

/// One rule with its feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub rule: AssociationRule,
    pub vector: FeatureVector,
}

/// Wire form of one record line: `["rule text",[f64,...]]`.
#[derive(Serialize, Deserialize)]
struct FeatureLine<'a>(#[serde(borrow)] std::borrow::Cow<'a, str>, Vec<f64>);

/// Streaming writer. The header is written on creation.
pub struct FeatureWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    schema: FeatureSchema,
    written: usize,
}

impl FeatureWriter {
    pub fn create(stage: &'static str, path: &Path, schema: FeatureSchema) -> RuleMinerResult<Self> {
        let file = File::create(path).map_err(|e| PipelineError::io(stage, path, e))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}\n{}", schema.left_count, schema.right_count)
            .map_err(|e| PipelineError::io(stage, path, e))?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            schema,
            written: 0,
        })
    }

    pub fn write_record(&mut self, rule: &AssociationRule, vector: &FeatureVector) -> RuleMinerResult<()> {
        let text = rule.serialize();
        if vector.len() != self.schema.dimension() {
            return Err(FeatureError::DimensionMismatch {
                rule: text,
                expected: self.schema.dimension(),
                actual: vector.len(),
            }
            .into());
        }
        let record = FeatureLine(text.as_str().into(), vector.values().to_vec());
        let line = serde_json::to_string(&record).map_err(|e| {
            PipelineError::Io {
                path: self.path.display().to_string(),
                source: e.into(),
            }
        })?;
        writeln!(self.writer, "{line}").map_err(|e| PipelineError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        self.written += 1;
        Ok(())
    }

    /// Flush and return the number of records written.
    pub fn finish(mut self) -> RuleMinerResult<usize> {
        self.writer.flush().map_err(|e| PipelineError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        debug!(path = %self.path.display(), records = self.written, "feature file written");
        Ok(self.written)
    }
}

/// A fully loaded feature file.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFile {
    pub schema: FeatureSchema,
    pub records: Vec<FeatureRecord>,
}

impl FeatureFile {
    /// Read the header first, then every record, checking each vector
    /// against the header.
    pub fn load(stage: &'static str, path: &Path) -> RuleMinerResult<Self> {
        let file = File::open(path).map_err(|e| PipelineError::io(stage, path, e))?;
        let mut lines = BufReader::new(file).lines();
        let left_count = read_header(stage, path, &mut lines, 1)?;
        let right_count = read_header(stage, path, &mut lines, 2)?;
        let schema = FeatureSchema::new(left_count, right_count);

        let mut records = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line_no = idx + 3;
            let line = line.map_err(|e| PipelineError::io(stage, path, e))?;
            let FeatureLine(text, values) = serde_json::from_str(&line)
                .map_err(|e| invalid_line(path, line_no, e.to_string()))?;
            let rule = AssociationRule::parse(&text)
                .map_err(|e| invalid_line(path, line_no, e.to_string()))?;
            let vector = FeatureVector::new(&schema, &text, values)?;
            records.push(FeatureRecord { rule, vector });
        }

        debug!(
            path = %path.display(),
            left_count,
            right_count,
            records = records.len(),
            "feature file loaded"
        );
        Ok(Self { schema, records })
    }
}

fn read_header(
    stage: &'static str,
    path: &Path,
    lines: &mut Lines<BufReader<File>>,
    line_no: usize,
) -> RuleMinerResult<usize> {
    let line = lines
        .next()
        .ok_or_else(|| FeatureError::MissingHeader {
            path: path.display().to_string(),
            line: line_no,
        })?
        .map_err(|e| PipelineError::io(stage, path, e))?;
    line.trim()
        .parse::<usize>()
        .map_err(|e| invalid_line(path, line_no, format!("bad feature count: {e}")))
}

fn invalid_line(path: &Path, line: usize, message: String) -> PipelineError {
    ParseError::InvalidLine {
        path: path.display().to_string(),
        line,
        message,
    }
    .into()
}
