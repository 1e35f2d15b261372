use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use expense_ledger::models::{ExpenseInput, ExpenseRecord};
use expense_ledger::report::{self, MonthlyReport};
use expense_ledger::storage::{LoadPolicy, RecordStore, StoreError, DEFAULT_FILE_NAME};

const EMPTY_MESSAGE: &str = "No expenses recorded.";
const COLUMNS: [&str; 4] = ["Date", "Amount", "Category", "Description"];

#[derive(Parser, Debug)]
#[command(name = "expense-ledger")]
#[command(about = "Record expenses and summarize them by month and category")]
struct Cli {
    /// Log verbosity written to stderr: error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "error", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// Ignore unreadable rows in the expense file instead of refusing to start.
    /// The file is left untouched, so `add` fails while rows are being skipped.
    #[arg(long, global = true)]
    skip_malformed: bool,

    /// Like --skip-malformed, and let `add` rewrite the file without those rows.
    #[arg(long, global = true)]
    drop_malformed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new expense dated today.
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
        description: String,
    },
    /// Show every recorded expense.
    List,
    /// Show totals per month and category.
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let policy = if cli.skip_malformed || cli.drop_malformed { LoadPolicy::SkipMalformed } else { LoadPolicy::Strict };
    let mut store = RecordStore::load(DEFAULT_FILE_NAME, policy)?;

    if store.skipped() > 0 {
        eprintln!("Skipped {} malformed row(s) in {}", store.skipped(), store.path().display());

        if cli.drop_malformed {
            store.discard_skipped();
        }
    }

    match cli.command {
        Command::Add { amount, category, description } => {
            let input = ExpenseInput::new(amount, category, description);

            match store.append(input) {
                Ok(record) => write_records_to_stdout(std::slice::from_ref(record))?,
                Err(StoreError::Input(error)) => {
                    eprintln!("Input Error: {error}");
                    exit(2);
                }
                Err(error) => return Err(error.into())
            }
        }
        Command::List => write_records_to_stdout(store.all())?,
        Command::Report => write_report_to_stdout(&report::report(store.all())?)?,
    }

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}', expected one of: error, warn, info, debug, trace"))
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the command output, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_records_to_stdout(records: &[ExpenseRecord]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    if records.is_empty() {
        writeln!(output, "{EMPTY_MESSAGE}")?;
        output.flush()?;
        return Ok(());
    }

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|record| [
            record.date.to_string(),
            record.amount.to_string(),
            escape_cell(&record.category),
            escape_cell(&record.description)
        ])
        .collect();

    let mut widths = COLUMNS.map(str::len);

    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(output, "{}", format_row(&COLUMNS, &widths))?;

    for row in &rows {
        writeln!(output, "{}", format_row(row, &widths))?;
    }

    output.flush()?;

    Ok(())
}

fn escape_cell(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}

fn format_row<S: AsRef<str>>(cells: &[S; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn write_report_to_stdout(monthly_report: &MonthlyReport) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    if monthly_report.is_empty() {
        writeln!(output, "{EMPTY_MESSAGE}")?;
    } else {
        writeln!(output, "Monthly Report")?;
        write!(output, "{monthly_report}")?;
    }

    output.flush()?;

    Ok(())
}
