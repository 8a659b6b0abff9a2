//! Workbook introspection.

use crate::error::{ConvertError, ConvertResult};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

/// Descriptor for one sheet, in workbook order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
}

/// List every sheet in a workbook with its used dimensions, without
/// mutating the file. Sheets whose range cannot be read report 0×0.
pub fn inspect_workbook<P: AsRef<Path>>(path: P) -> ConvertResult<Vec<SheetInfo>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        ConvertError::Sheet(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());

    for (index, name) in names.into_iter().enumerate() {
        let (rows, cols) = match workbook.worksheet_range_at(index) {
            Some(Ok(range)) => range.get_size(),
            _ => (0, 0),
        };
        sheets.push(SheetInfo { name, rows, cols });
    }

    Ok(sheets)
}
