pub mod chart;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod harmonize;
pub mod io_utils;
pub mod records;
pub mod report;
pub mod schema;
pub mod session;
pub mod summary;
pub mod table;

use std::{env, fs, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

pub use crate::error::Error;
pub use crate::frequency::{department_counts, marital_status_counts};
pub use crate::records::{RecordTable, load_table};
pub use crate::summary::{Summary, summarize};

use crate::{
    chart::{ChartKind, ChartRenderer, SvgRenderer, TextRenderer},
    cli::{ChartType, Cli, Commands, CountColumn, InputArgs, OutputFormat},
    records::LoadOptions,
    session::Session,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("workforce_stats", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Summary(args) => handle_summary(&args),
        Commands::Dashboard(args) => handle_dashboard(&args),
        Commands::Counts(args) => handle_counts(&args),
        Commands::Chart(args) => handle_chart(&args),
    }
}

fn open_session(args: &InputArgs) -> Result<Session> {
    let options = LoadOptions {
        delimiter: args.delimiter,
        encoding: io_utils::resolve_encoding(args.input_encoding.as_deref())?,
    };
    let mut session = Session::new(options);
    session
        .load(&args.input)
        .with_context(|| format!("Loading {:?}", args.input))?;
    Ok(session)
}

fn handle_summary(args: &cli::SummaryArgs) -> Result<()> {
    let mut session = open_session(&args.input)?;
    let summary = session
        .process()
        .with_context(|| format!("Summarizing {:?}", args.input.input))?;
    match args.format {
        OutputFormat::Text => print!(
            "{}",
            report::render_report(summary).context("Rendering summary")?
        ),
        OutputFormat::Json => println!(
            "{}",
            report::render_json(summary).context("Serializing summary")?
        ),
    }
    Ok(())
}

fn handle_dashboard(args: &cli::DashboardArgs) -> Result<()> {
    let mut session = open_session(&args.input)?;
    let items = session
        .dashboard()
        .with_context(|| format!("Building dashboard for {:?}", args.input.input))?;
    print!("{}", table::render_key_values(&items));
    Ok(())
}

fn handle_counts(args: &cli::CountsArgs) -> Result<()> {
    let session = open_session(&args.input)?;
    let records = session.table().context("No table loaded")?;
    let counts = match args.column {
        CountColumn::Department => department_counts(records),
        CountColumn::MaritalStatus => marital_status_counts(records),
    }
    .with_context(|| format!("Counting values in {:?}", args.input.input))?;
    let headers = vec![
        "value".to_string(),
        "count".to_string(),
        "percent".to_string(),
    ];
    table::print_table(&headers, &frequency::render_rows(&counts));
    info!("Counted {} distinct value(s)", counts.len());
    Ok(())
}

fn handle_chart(args: &cli::ChartArgs) -> Result<()> {
    let session = open_session(&args.input)?;
    let kind = match args.kind {
        ChartType::Pie => ChartKind::Pie,
        ChartType::Bar => ChartKind::Bar,
    };
    let chart = session
        .chart(kind)
        .with_context(|| format!("Preparing {kind} chart for {:?}", args.input.input))?;

    match &args.output {
        Some(path) => {
            let renderer = SvgRenderer {
                width: args.width,
                height: args.height,
            };
            let svg = renderer.render(&chart)?;
            fs::write(path, svg).with_context(|| format!("Writing chart to {path:?}"))?;
            info!("{} chart written to {:?}", chart.title, path);
        }
        None => {
            let renderer = TextRenderer {
                bar_width: args.bar_width,
            };
            print!("{}", renderer.render(&chart)?);
        }
    }
    Ok(())
}
