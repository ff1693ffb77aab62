// matchfacile CLI - headless inventory/request engine matching

mod exit_codes;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use matchfacile_engine::MatchReport;

use exit_codes::{EXIT_READ, EXIT_SUCCESS, EXIT_WRITE};

#[derive(Parser)]
#[command(name = "mfacile")]
#[command(about = "Match engine line items between an inventory catalog and a request list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match an inventory file against a request list
    #[command(after_help = "\
Examples:
  mfacile run Inventario.xlsx Richiesta.xlsx
  mfacile run Inventario.xlsx Richiesta.xlsx --json
  mfacile run inventario.csv richiesta.csv -o report.xlsx
  mfacile run Inventario.xlsx Richiesta.xlsx -o report.json --quiet")]
    Run {
        /// Inventory catalog (.xlsx, .xls, .csv)
        inventory: PathBuf,

        /// Request list (.xlsx, .xls, .csv)
        request: PathBuf,

        /// Output JSON to stdout instead of the text report
        #[arg(long)]
        json: bool,

        /// Write the report to a file (.json or .xlsx, by extension)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress the stderr summary
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Print the header row of a tabular file
    #[command(after_help = "\
Examples:
  mfacile headers Inventario.xlsx")]
    Headers {
        /// File to inspect (.xlsx, .xls, .csv)
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { inventory, request, json, output, quiet } => {
            cmd_run(inventory, request, json, output, quiet)
        }
        Commands::Headers { file } => cmd_headers(file),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn read(msg: impl Into<String>) -> Self {
        Self { code: EXIT_READ, message: msg.into(), hint: None }
    }

    fn write(msg: impl Into<String>) -> Self {
        Self { code: EXIT_WRITE, message: msg.into(), hint: None }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn cmd_run(
    inventory: PathBuf,
    request: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    // Both acquisitions must succeed before matching begins; a reader
    // failure aborts without a partial report.
    let inventory_rows =
        matchfacile_io::read_rows(&inventory).map_err(|e| CliError::read(e.to_string()))?;
    let request_rows =
        matchfacile_io::read_rows(&request).map_err(|e| CliError::read(e.to_string()))?;

    let report = matchfacile_engine::run(&inventory_rows, &request_rows);

    if let Some(ref path) = output {
        write_report(&report, path)?;
        if !quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    if json {
        let json_str = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::write(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    } else {
        print!("{}", render::text_report(&report));
    }

    if !quiet {
        let s = &report.summary;
        eprintln!(
            "{} engine request(s): {} with matches, {} without, {} inventory row(s) matched",
            s.total_groups, s.groups_with_matches, s.groups_without_matches, s.matched_rows,
        );
    }

    Ok(())
}

fn write_report(report: &MatchReport, path: &Path) -> Result<(), CliError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => {
            matchfacile_io::export::write_xlsx(report, path)
                .map_err(|e| CliError::write(e.to_string()))
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            let json_str = serde_json::to_string_pretty(report)
                .map_err(|e| CliError::write(format!("JSON serialization error: {e}")))?;
            std::fs::write(path, json_str)
                .map_err(|e| CliError::write(format!("cannot write {}: {e}", path.display())))
        }
        _ => Err(CliError::write(format!(
            "unsupported output extension: {}",
            path.display()
        ))
        .with_hint("use a .json or .xlsx output path")),
    }
}

fn cmd_headers(file: PathBuf) -> Result<(), CliError> {
    let headers =
        matchfacile_io::read_headers(&file).map_err(|e| CliError::read(e.to_string()))?;

    for column in headers {
        println!("{column}");
    }
    Ok(())
}
