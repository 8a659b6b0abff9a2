//! xlsv - Excel ↔ CSV converter
//!
//! This library converts between spreadsheet workbooks (.xls/.xlsx/.xlsm)
//! and delimited text files (.csv/.txt), streaming rows one at a time and
//! cleaning cells along the way.
//!
//! # Features
//!
//! - Spreadsheet → CSV extraction with a forward-only row cursor
//! - CSV → single-sheet .xlsx with an error budget for messy input
//! - Control-character stripping and Excel cell-limit truncation
//! - Delimiter auto-detection (comma, semicolon, tab, pipe)
//! - Workbook introspection (sheet names and dimensions)
//!
//! # Example
//!
//! ```no_run
//! use xlsv::convert::{ExcelExtractor, ExtractOptions};
//! use std::path::Path;
//!
//! let extractor = ExcelExtractor::new("report.xlsx");
//! let report = extractor.extract(Path::new("report.csv"), &ExtractOptions::default())?;
//!
//! println!("{} rows written", report.rows);
//! # Ok::<(), xlsv::error::ConvertError>(())
//! ```

pub mod cli;
pub mod convert;
pub mod error;

// Re-export commonly used types
pub use convert::{
    inspect_workbook, BuildOptions, BuildReport, CoercionMode, ExcelExtractor, ExtractOptions,
    ExtractReport, SheetInfo, WorkbookBuilder,
};
pub use error::{ConvertError, ConvertResult};
