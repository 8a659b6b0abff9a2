//! Spreadsheet ↔ delimited-text conversion.
//!
//! Three operations, each a single open → stream → close pass:
//! - Extract: workbook sheet → delimited text ([`ExcelExtractor`])
//! - Build: delimited text → single-sheet workbook ([`WorkbookBuilder`])
//! - Inspect: list sheet names and dimensions ([`inspect_workbook`])

mod builder;
mod detect;
mod extractor;
mod inspect;
mod sanitize;

pub use builder::{
    BuildOptions, BuildReport, CoercionMode, WorkbookBuilder, DEFAULT_ERROR_BUDGET,
};
pub use detect::{detect_delimiter, sniff_delimiter};
pub use extractor::{ExcelExtractor, ExtractOptions, ExtractReport};
pub use inspect::{inspect_workbook, SheetInfo};
pub use sanitize::{clean_field, coerce_field, CleanedField, FieldValue, MAX_CELL_LEN};

use std::path::Path;

/// Spreadsheet extensions this tool reads.
pub const EXCEL_EXTENSIONS: [&str; 3] = ["xlsx", "xlsm", "xls"];

/// Delimited-text extensions this tool reads.
pub const DELIMITED_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// True when the path carries a spreadsheet extension.
pub fn is_excel_path(path: &Path) -> bool {
    has_extension_in(path, &EXCEL_EXTENSIONS)
}

/// True when the path carries a delimited-text extension.
pub fn is_delimited_path(path: &Path) -> bool {
    has_extension_in(path, &DELIMITED_EXTENSIONS)
}

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
