//! Delimited-text → workbook construction.

use crate::convert::detect::sniff_delimiter;
use crate::convert::sanitize::{clean_field, coerce_field, FieldValue};
use crate::error::{ConvertError, ConvertResult};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Malformed rows tolerated before aborting the run.
pub const DEFAULT_ERROR_BUDGET: usize = 50;

/// Excel's column ceiling (XFD).
const MAX_COLS: usize = 16_384;

/// How fields are turned into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionMode {
    /// Keep every field as text after cleaning. The robust default.
    #[default]
    Text,
    /// Try integer, then float, falling back to text.
    Infer,
}

/// Options for a single build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Field delimiter; `None` sniffs it from a leading sample.
    pub delimiter: Option<u8>,
    pub coercion: CoercionMode,
    /// Malformed rows tolerated before aborting.
    pub error_budget: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            coercion: CoercionMode::Text,
            error_budget: DEFAULT_ERROR_BUDGET,
        }
    }
}

/// Outcome of a build run. `aborted` means the error budget was hit;
/// the workbook still holds every row accepted before the abort.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Rows written to the workbook.
    pub rows: usize,
    /// Malformed rows counted against the budget.
    pub errors: usize,
    /// Cells cut down to the Excel length limit.
    pub truncated: usize,
    pub aborted: bool,
}

impl BuildReport {
    pub fn summary(&self) -> String {
        if self.aborted {
            format!(
                "Converted to: {} ({} rows kept, stopped after {} errors)",
                self.output.display(),
                self.rows,
                self.errors
            )
        } else if self.errors > 0 || self.truncated > 0 {
            format!(
                "Successfully converted to: {} ({} rows, {} errors, {} cells truncated - some data was cleaned or skipped)",
                self.output.display(),
                self.rows,
                self.errors,
                self.truncated
            )
        } else {
            format!(
                "Successfully converted to: {} ({} rows)",
                self.output.display(),
                self.rows
            )
        }
    }
}

/// Builder for converting a delimited-text file to a single-sheet workbook
pub struct WorkbookBuilder {
    path: PathBuf,
}

impl WorkbookBuilder {
    /// Create a new builder for the given delimited-text file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build a workbook at `output`, one row per record.
    ///
    /// Records are read one at a time and appended as they arrive.
    /// Malformed records count against the error budget; hitting the
    /// budget stops reading but the workbook is saved with everything
    /// accepted so far.
    pub fn build(&self, output: &Path, options: &BuildOptions) -> ConvertResult<BuildReport> {
        if extension_is(output, "xls") {
            return Err(ConvertError::LegacyXlsOutput);
        }

        let delimiter = match options.delimiter {
            Some(d) => d,
            None => sniff_delimiter(&self.path)?,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_path(&self.path)?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name("Sheet1")
            .map_err(|e| ConvertError::Workbook(format!("Failed to name worksheet: {}", e)))?;

        let mut rows = 0usize;
        let mut errors = 0usize;
        let mut truncated = 0usize;
        let mut aborted = false;
        let mut record = csv::ByteRecord::new();

        loop {
            match reader.read_byte_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {}
                // Record-level errors (e.g. ragged rows) leave the
                // reader positioned at the next record.
                Err(_) => {
                    errors += 1;
                    if errors >= options.error_budget {
                        aborted = true;
                        break;
                    }
                    continue;
                }
            }

            // Skip completely empty rows without counting them.
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            let out_row = rows as u32;
            let mut row_failed = false;

            for (idx, field) in record.iter().enumerate() {
                if idx >= MAX_COLS {
                    row_failed = true;
                    break;
                }
                let col = idx as u16;
                let text = String::from_utf8_lossy(field);
                let cleaned = clean_field(&text);
                if cleaned.truncated {
                    truncated += 1;
                }

                let result = match options.coercion {
                    CoercionMode::Text => {
                        if cleaned.text.is_empty() {
                            continue; // null cell
                        }
                        worksheet.write_string(out_row, col, &cleaned.text)
                    }
                    CoercionMode::Infer => match coerce_field(&cleaned.text) {
                        FieldValue::Empty => continue, // null cell
                        FieldValue::Int(i) => worksheet.write_number(out_row, col, i as f64),
                        FieldValue::Float(f) => worksheet.write_number(out_row, col, f),
                        FieldValue::Text(s) => worksheet.write_string(out_row, col, s),
                    },
                };

                if result.is_err() {
                    row_failed = true;
                    break;
                }
            }

            if row_failed {
                errors += 1;
                if errors >= options.error_budget {
                    aborted = true;
                    break;
                }
            } else {
                rows += 1;
            }
        }

        // Persist whatever was accepted, including on the abort path.
        workbook
            .save(output)
            .map_err(|e| ConvertError::Workbook(format!("Failed to save workbook: {}", e)))?;

        Ok(BuildReport {
            output: output.to_path_buf(),
            rows,
            errors,
            truncated,
            aborted,
        })
    }
}

fn extension_is(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
