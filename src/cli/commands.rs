use crate::convert::{
    inspect_workbook, is_delimited_path, is_excel_path, BuildOptions, CoercionMode,
    ExcelExtractor, ExtractOptions, WorkbookBuilder,
};
use crate::error::{ConvertError, ConvertResult};
use clap::ValueEnum;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Direction for a folder-level batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatchDirection {
    /// Convert every .xlsx/.xlsm/.xls in the folder to .csv
    ToCsv,
    /// Convert every .csv in the folder to .xlsx
    ToExcel,
}

/// Execute a single-file conversion, direction chosen by extension.
pub fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    sheet: usize,
    delimiter: Option<char>,
    infer_types: bool,
    max_errors: usize,
    verbose: bool,
) -> ConvertResult<()> {
    if !input.exists() {
        return Err(ConvertError::FileNotFound(input));
    }

    let delimiter = parse_delimiter(delimiter)?;

    if is_excel_path(&input) {
        let output = output.unwrap_or_else(|| input.with_extension("csv"));
        extract_file(&input, &output, sheet, delimiter, verbose)
    } else if is_delimited_path(&input) {
        let output = output.unwrap_or_else(|| input.with_extension("xlsx"));
        build_file(&input, &output, delimiter, infer_types, max_errors, verbose)
    } else {
        let ext = input
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Err(ConvertError::UnsupportedExtension(ext))
    }
}

/// Execute the info command - list sheets with their dimensions
pub fn info(file: PathBuf) -> ConvertResult<()> {
    if !file.exists() {
        return Err(ConvertError::FileNotFound(file));
    }

    println!("{}", "📊 xlsv - Workbook Info".bold().green());
    println!("   File: {}\n", file.display());

    let sheets = inspect_workbook(&file)?;

    for (index, sheet) in sheets.iter().enumerate() {
        println!(
            "   [{}] {} ({} rows, {} cols)",
            index,
            sheet.name.bright_blue().bold(),
            sheet.rows,
            sheet.cols
        );
    }

    if sheets.len() > 1 {
        println!(
            "\n   {}",
            "Multiple sheets: pick one with --sheet <index>".yellow()
        );
    }

    Ok(())
}

/// Execute the batch command - convert every matching file in a folder,
/// non-recursively, tallying successes and failures. One bad file does
/// not stop the batch.
pub fn batch(
    folder: PathBuf,
    direction: BatchDirection,
    infer_types: bool,
    max_errors: usize,
    verbose: bool,
) -> ConvertResult<()> {
    if !folder.is_dir() {
        return Err(ConvertError::NotADirectory(folder));
    }

    println!("{}", "📁 xlsv - Batch Conversion".bold().green());
    println!("   Folder: {}\n", folder.display());

    let mut files: Vec<PathBuf> = fs::read_dir(&folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && match direction {
                    BatchDirection::ToCsv => is_excel_path(path),
                    BatchDirection::ToExcel => is_delimited_path(path),
                }
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("   {}", "No matching files found".yellow());
        return Ok(());
    }

    let mut converted = 0usize;
    let mut failed = 0usize;

    for file in &files {
        let result = match direction {
            BatchDirection::ToCsv => {
                let output = file.with_extension("csv");
                extract_file(file, &output, 0, None, verbose)
            }
            BatchDirection::ToExcel => {
                let output = file.with_extension("xlsx");
                build_file(file, &output, None, infer_types, max_errors, verbose)
            }
        };

        match result {
            Ok(()) => converted += 1,
            Err(e) => {
                failed += 1;
                println!("   {} {}: {}", "❌".red(), file.display(), e);
            }
        }
    }

    println!();
    println!(
        "{} Batch complete: {} converted, {} failed",
        "✅".green(),
        converted.to_string().bold(),
        failed
    );

    Ok(())
}

fn extract_file(
    input: &Path,
    output: &Path,
    sheet: usize,
    delimiter: Option<u8>,
    verbose: bool,
) -> ConvertResult<()> {
    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
        for sheet_info in inspect_workbook(input)? {
            println!(
                "   {} ({} rows, {} cols)",
                sheet_info.name.bright_blue(),
                sheet_info.rows,
                sheet_info.cols
            );
        }
    }

    let options = ExtractOptions {
        sheet_index: sheet,
        delimiter: delimiter.unwrap_or(b','),
    };

    let report = ExcelExtractor::new(input).extract(output, &options)?;
    println!("   {} {}", "✅".green(), report.summary());
    Ok(())
}

fn build_file(
    input: &Path,
    output: &Path,
    delimiter: Option<u8>,
    infer_types: bool,
    max_errors: usize,
    verbose: bool,
) -> ConvertResult<()> {
    if verbose {
        println!("{}", "📖 Reading delimited text...".cyan());
    }

    let options = BuildOptions {
        delimiter,
        coercion: if infer_types {
            CoercionMode::Infer
        } else {
            CoercionMode::Text
        },
        error_budget: max_errors,
    };

    let report = WorkbookBuilder::new(input).build(output, &options)?;

    if report.aborted {
        println!("   {} {}", "⚠️".yellow(), report.summary().yellow());
    } else {
        println!("   {} {}", "✅".green(), report.summary());
    }
    Ok(())
}

fn parse_delimiter(delimiter: Option<char>) -> ConvertResult<Option<u8>> {
    match delimiter {
        None => Ok(None),
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => Err(ConvertError::InvalidDelimiter(c)),
    }
}
