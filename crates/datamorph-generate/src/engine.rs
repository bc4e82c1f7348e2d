use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::ByteRecord;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::errors::GenerationError;
use crate::model::{MalformedRowPolicy, MaskIssue, MaskOptions, MaskReport};
use crate::output::csv::write_records_csv;
use crate::permutator::ColumnPermutator;

/// One masking job: which file, which column, where to write.
#[derive(Debug, Clone)]
pub struct MaskRequest {
    pub input: PathBuf,
    pub column: String,
    pub output: PathBuf,
}

impl MaskRequest {
    /// Request writing to `<input stem>_masked.csv` next to the input.
    pub fn new(input: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        Self {
            input,
            column: column.into(),
            output,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Result of a masking run.
#[derive(Debug, Clone)]
pub struct MaskResult {
    pub output: PathBuf,
    pub report: MaskReport,
}

/// Entry point for masking one CSV column.
#[derive(Debug, Clone)]
pub struct MaskEngine {
    options: MaskOptions,
}

struct InputTable {
    header: ByteRecord,
    rows: Vec<ByteRecord>,
}

impl MaskEngine {
    pub fn new(options: MaskOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, request: &MaskRequest) -> Result<MaskResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let permutator = ColumnPermutator::from_options(&self.options)?;
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        info!(
            event = "run_started",
            run_id = %run_id,
            input = %request.input.display(),
            column = %request.column,
            mode = permutator.mode().as_str(),
            seed = ?self.options.seed
        );

        let table = read_table(&request.input)?;
        let column_index = table
            .header
            .iter()
            .position(|name| name == request.column.as_bytes())
            .ok_or_else(|| GenerationError::ColumnNotFound(request.column.clone()))?;
        info!(
            event = "column_located",
            column = %request.column,
            column_index,
            rows = table.rows.len()
        );

        let mut report = MaskReport {
            run_id: run_id.clone(),
            started_at,
            input: request.input.display().to_string(),
            output: request.output.display().to_string(),
            column: request.column.clone(),
            column_index,
            seed: self.options.seed,
            malformed_policy: self.options.malformed_rows,
            rows_read: table.rows.len() as u64,
            rows_written: 0,
            malformed_rows: 0,
            column_report: Default::default(),
            bytes_written: 0,
            duration_ms: 0,
            warnings: Vec::new(),
        };

        let expected = table.header.len();
        let mut well_formed = Vec::with_capacity(table.rows.len());
        for (index, row) in table.rows.iter().enumerate() {
            if row.len() == expected {
                well_formed.push(index);
                continue;
            }
            let line = row.position().map(|position| position.line());
            warn!(
                event = "malformed_row",
                line = ?line,
                fields = row.len(),
                expected,
                policy = ?self.options.malformed_rows
            );
            report.malformed_rows += 1;
            report.record_warning(MaskIssue {
                level: "warning".to_string(),
                code: "malformed_row".to_string(),
                message: format!("row has {} fields, header has {expected}", row.len()),
                line,
            });
        }

        // Cells that are not UTF-8 carry no readable shape and pass through.
        let mut maskable = Vec::with_capacity(well_formed.len());
        let mut values = Vec::with_capacity(well_formed.len());
        for index in &well_formed {
            let row = &table.rows[*index];
            let cell = row.get(column_index).unwrap_or_default();
            match std::str::from_utf8(cell) {
                Ok(value) => {
                    maskable.push(*index);
                    values.push(value);
                }
                Err(_) => {
                    let line = row.position().map(|position| position.line());
                    debug!(event = "invalid_utf8", line = ?line);
                    report.record_warning(MaskIssue {
                        level: "warning".to_string(),
                        code: "invalid_utf8".to_string(),
                        message: "cell is not valid UTF-8 and was left unmasked".to_string(),
                        line,
                    });
                }
            }
        }
        let mut permuted = permutator.permute(&values, &mut rng);
        for _ in maskable.len()..well_formed.len() {
            permuted.report.record_pass_through();
        }
        info!(
            event = "column_permuted",
            column = %request.column,
            regenerated = permuted.report.regenerated,
            passed_through = permuted.report.passed_through,
            retries = permuted.report.retries,
            unstable = permuted.report.unstable
        );

        let mut rows: Vec<Option<ByteRecord>> = table.rows.into_iter().map(Some).collect();
        for (index, replacement) in maskable.iter().zip(permuted.values.iter()) {
            if let Some(row) = rows[*index].as_mut() {
                *row = replace_field(row, column_index, replacement.as_bytes());
            }
        }
        if self.options.malformed_rows == MalformedRowPolicy::Skip {
            for row in rows.iter_mut() {
                if row.as_ref().is_some_and(|row| row.len() != expected) {
                    *row = None;
                }
            }
        }
        let output_rows: Vec<&ByteRecord> = rows.iter().flatten().collect();

        report.rows_written = output_rows.len() as u64;
        report.column_report = permuted.report;
        report.bytes_written = write_records_csv(&request.output, &table.header, output_rows)?;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            event = "output_written",
            run_id = %run_id,
            output = %request.output.display(),
            rows_written = report.rows_written,
            malformed_rows = report.malformed_rows,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms
        );

        Ok(MaskResult {
            output: request.output.clone(),
            report,
        })
    }
}

/// `<dir>/<stem>_masked.csv` for an input path.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_masked.csv"))
}

fn read_table(path: &Path) -> Result<InputTable, GenerationError> {
    let file = File::open(path).map_err(|source| GenerationError::Input {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let header = reader.byte_headers()?.clone();
    if header.is_empty() {
        return Err(GenerationError::MissingHeader(path.display().to_string()));
    }

    let rows = reader.byte_records().collect::<Result<Vec<_>, _>>()?;
    Ok(InputTable { header, rows })
}

fn replace_field(row: &ByteRecord, index: usize, value: &[u8]) -> ByteRecord {
    let mut replaced = ByteRecord::with_capacity(row.as_slice().len(), row.len());
    for (position, field) in row.iter().enumerate() {
        if position == index {
            replaced.push_field(value);
        } else {
            replaced.push_field(field);
        }
    }
    replaced.set_position(row.position().cloned());
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/customers.csv")),
            PathBuf::from("data/customers_masked.csv")
        );
        assert_eq!(
            default_output_path(Path::new("export")),
            PathBuf::from("export_masked.csv")
        );
    }

    #[test]
    fn replace_field_keeps_other_columns() {
        let row = ByteRecord::from(vec!["1", "secret", "x"]);
        let replaced = replace_field(&row, 1, b"masked");
        assert_eq!(replaced, ByteRecord::from(vec!["1", "masked", "x"]));
    }
}
