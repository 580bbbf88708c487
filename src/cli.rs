use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_INPUT: &str = "nurs.csv";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Summarize healthcare workforce CSV data",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Harmonize, validate, and print every summary metric
    Summary(SummaryArgs),
    /// Print the key-metrics dashboard
    Dashboard(DashboardArgs),
    /// Print grouped row counts for a categorical column
    Counts(CountsArgs),
    /// Render the department pie chart or the marital-status bar chart
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input CSV file (`-` reads stdin)
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output format for the summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum CountColumn {
    Department,
    MaritalStatus,
}

#[derive(Debug, Args)]
pub struct CountsArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Column to group by
    #[arg(short = 'C', long = "column", value_enum)]
    pub column: CountColumn,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum ChartType {
    /// Employees per department
    Pie,
    /// Marital status distribution
    Bar,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Chart to render
    #[arg(long = "kind", value_enum)]
    pub kind: ChartType,
    /// Write an SVG document here instead of drawing on stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// SVG width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// SVG height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    /// Width of the longest bar in text output
    #[arg(long = "bar-width", default_value_t = 40)]
    pub bar_width: usize,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
