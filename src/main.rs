use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use xlsv::cli;
use xlsv::cli::BatchDirection;
use xlsv::convert::DEFAULT_ERROR_BUDGET;
use xlsv::error::ConvertResult;

#[derive(Parser)]
#[command(name = "xlsv")]
#[command(about = "Convert between Excel workbooks and delimited text files.")]
#[command(long_about = "xlsv - Excel ↔ CSV converter
Streams rows, cleans messy cells, survives bad data.

USAGE:
  xlsv <input> [output]   - Convert one file; direction follows the
                            input extension (.xlsx/.xlsm/.xls → .csv,
                            .csv/.txt → .xlsx). The output path defaults
                            to the input with its extension swapped.
  xlsv info <file>        - List sheet names and dimensions
  xlsv batch <folder> ..  - Convert every matching file in a folder

EXAMPLES:
  xlsv report.xlsx                      # → report.csv
  xlsv report.xlsx --sheet 2            # extract the third sheet
  xlsv data.csv data.xlsx               # → explicit output path
  xlsv data.csv --infer-types           # coerce numeric-looking fields
  xlsv info report.xlsx                 # list sheets before picking one
  xlsv batch ./exports to-csv           # folder-level conversion

Exit code 0 on success, 1 on failure.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file (.xlsx/.xlsm/.xls or .csv/.txt)
    input: Option<PathBuf>,

    /// Output file (default: input with its extension swapped)
    output: Option<PathBuf>,

    /// Sheet index to extract (spreadsheet input only)
    #[arg(short, long, default_value_t = 0)]
    sheet: usize,

    /// Field delimiter (default: comma on extract, auto-detected on build)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Coerce numeric-looking fields to numbers instead of keeping text
    #[arg(long)]
    infer_types: bool,

    /// Malformed rows tolerated before aborting a CSV → Excel run
    #[arg(long, default_value_t = DEFAULT_ERROR_BUDGET)]
    max_errors: usize,

    /// Show verbose conversion steps
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "List every sheet in a workbook with its name and
used dimensions (rows × cols), without modifying the file.

Use this to pick a --sheet index when a workbook has more than one sheet.

EXAMPLE:
  xlsv info quarterly.xlsx
  xlsv quarterly.xlsx --sheet 1")]
    /// List sheet names and dimensions of a workbook
    Info {
        /// Path to spreadsheet file
        file: PathBuf,
    },

    #[command(long_about = "Convert every matching file in a folder, non-recursively.

DIRECTION:
  to-csv    - every .xlsx/.xlsm/.xls becomes a .csv (first sheet)
  to-excel  - every .csv becomes an .xlsx

Each file is converted independently with default output paths; one bad
file does not stop the batch. A success/failure tally is printed at the end.

EXAMPLES:
  xlsv batch ./exports to-csv
  xlsv batch ./imports to-excel --infer-types")]
    /// Convert every matching file in a folder
    Batch {
        /// Folder to scan (non-recursive)
        folder: PathBuf,

        /// Conversion direction
        direction: BatchDirection,

        /// Coerce numeric-looking fields to numbers (to-excel only)
        #[arg(long)]
        infer_types: bool,

        /// Malformed rows tolerated per file before aborting it
        #[arg(long, default_value_t = DEFAULT_ERROR_BUDGET)]
        max_errors: usize,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> ConvertResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Info { file }) => cli::info(file),

        Some(Commands::Batch {
            folder,
            direction,
            infer_types,
            max_errors,
            verbose,
        }) => cli::batch(folder, direction, infer_types, max_errors, verbose),

        None => {
            let Some(input) = cli.input else {
                // No input and no subcommand: show usage, exit nonzero.
                Cli::command().print_help().ok();
                std::process::exit(2);
            };
            cli::convert(
                input,
                cli.output,
                cli.sheet,
                cli.delimiter,
                cli.infer_types,
                cli.max_errors,
                cli.verbose,
            )
        }
    }
}
