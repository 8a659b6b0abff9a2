use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Sheet(String),

    #[error("Failed to write workbook: {0}")]
    Workbook(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported file extension '{0}' (expected .xlsx/.xlsm/.xls or .csv/.txt)")]
    UnsupportedExtension(String),

    #[error("Writing legacy .xls workbooks is not supported, use .xlsx (reading .xls works)")]
    LegacyXlsOutput,

    #[error("Sheet index {index} out of range: workbook has {count} sheet(s)")]
    SheetIndex { index: usize, count: usize },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
}
