//! Cell-level cleaning and coercion applied while streaming rows.

/// Excel's hard ceiling on characters per cell.
pub const MAX_CELL_LEN: usize = 32_767;

/// Marker appended to truncated fields.
const ELLIPSIS: &str = "...";

/// A field after cleaning, with a flag for whether it was cut down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedField {
    pub text: String,
    pub truncated: bool,
}

impl CleanedField {
    /// Wrap a value that needs no cleaning (numbers, dates, booleans).
    pub fn plain(text: String) -> Self {
        Self {
            text,
            truncated: false,
        }
    }
}

/// Clean one text field: strip control characters (everything below
/// U+0020 except tab/newline/carriage-return, which removes null bytes),
/// then truncate to the Excel cell limit with an ellipsis marker.
pub fn clean_field(raw: &str) -> CleanedField {
    let needs_strip = raw
        .chars()
        .any(|c| c < ' ' && !matches!(c, '\t' | '\n' | '\r'));

    let stripped = if needs_strip {
        raw.chars()
            .filter(|&c| c >= ' ' || matches!(c, '\t' | '\n' | '\r'))
            .collect()
    } else {
        raw.to_string()
    };

    // Byte length bounds char length, so short strings skip the count.
    if stripped.len() <= MAX_CELL_LEN || stripped.chars().count() <= MAX_CELL_LEN {
        return CleanedField {
            text: stripped,
            truncated: false,
        };
    }

    let mut text: String = stripped
        .chars()
        .take(MAX_CELL_LEN - ELLIPSIS.len())
        .collect();
    text.push_str(ELLIPSIS);

    CleanedField {
        text,
        truncated: true,
    }
}

/// A field value after best-effort numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Empty field; becomes a null (unwritten) cell.
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

/// Coerce a cleaned field: integer first, then float, else keep as text.
/// Empty fields map to a null cell rather than an empty string.
pub fn coerce_field(text: &str) -> FieldValue {
    if text.is_empty() {
        return FieldValue::Empty;
    }

    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return FieldValue::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return FieldValue::Float(f);
        }
    }

    FieldValue::Text(text.to_string())
}
