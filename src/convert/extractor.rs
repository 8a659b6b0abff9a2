//! Spreadsheet → delimited-text extraction.

use crate::convert::sanitize::{clean_field, CleanedField};
use crate::error::{ConvertError, ConvertResult};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};

/// Options for a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Zero-based sheet index to extract.
    pub sheet_index: usize,
    /// Field delimiter for the output file.
    pub delimiter: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sheet_index: 0,
            delimiter: b',',
        }
    }
}

/// Outcome of a successful extraction.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub output: PathBuf,
    /// Rows written to the output file.
    pub rows: usize,
    /// Cells cut down to the Excel length limit.
    pub truncated: usize,
}

impl ExtractReport {
    pub fn summary(&self) -> String {
        if self.truncated > 0 {
            format!(
                "Successfully converted to: {} ({} rows, {} cells truncated)",
                self.output.display(),
                self.rows,
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

/// Extractor for converting one workbook sheet to a delimited-text file
pub struct ExcelExtractor {
    path: PathBuf,
}

impl ExcelExtractor {
    /// Create a new extractor for the given spreadsheet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Extract the selected sheet to `output`, one record per row.
    ///
    /// Rows are visited through a forward-only cursor over the sheet's
    /// used range and written immediately; no row is retained.
    pub fn extract(&self, output: &Path, options: &ExtractOptions) -> ConvertResult<ExtractReport> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            ConvertError::Sheet(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let sheet_count = workbook.sheet_names().len();
        let range = workbook
            .worksheet_range_at(options.sheet_index)
            .ok_or(ConvertError::SheetIndex {
                index: options.sheet_index,
                count: sheet_count,
            })?
            .map_err(|e| ConvertError::Sheet(format!("Failed to read sheet: {}", e)))?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .from_path(output)?;

        let mut rows = 0usize;
        let mut truncated = 0usize;
        let mut record: Vec<String> = Vec::new();

        for row in range.rows() {
            record.clear();
            for cell in row {
                let cleaned = render_cell(cell);
                if cleaned.truncated {
                    truncated += 1;
                }
                record.push(cleaned.text);
            }
            writer.write_record(&record)?;
            rows += 1;
        }

        writer.flush()?;

        Ok(ExtractReport {
            output: output.to_path_buf(),
            rows,
            truncated,
        })
    }
}

/// Render one cell to its text form. Dates become `YYYY-MM-DD HH:MM:SS`
/// timestamps, empty cells become empty strings, text cells are cleaned
/// of control characters and truncated to the cell limit.
fn render_cell(cell: &Data) -> CleanedField {
    match cell {
        Data::Empty => CleanedField::plain(String::new()),
        Data::String(s) => clean_field(s),
        Data::Int(i) => CleanedField::plain(i.to_string()),
        Data::Float(f) => CleanedField::plain(f.to_string()),
        Data::Bool(b) => CleanedField::plain(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(d) => CleanedField::plain(d.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CleanedField::plain(cell.to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => clean_field(s),
        Data::Error(_) => CleanedField::plain(cell.to_string()),
    }
}
