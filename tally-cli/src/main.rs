use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tally_core::{CurrencyCode, LocaleHint, TransactionRecord};
use tally_ingest::{detect_with_evidence, extract_transactions, Evidence};
use tally_report::{
    export_summary, export_transactions, format_amount, format_number, sort_by_date, Breakdown, Summary,
};
use tracing::{debug, error, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Extract transactions from bank statement text")]
struct Cli {
    /// Log level for tally's own crates (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions and a summary from statement text
    Extract {
        /// Text file extracted from a statement (`-` for stdin)
        input: PathBuf,

        /// Locale context used when the text names no currency
        #[arg(long)]
        hint: Option<String>,

        /// Re-sort records by date
        #[arg(long)]
        sort_by_date: bool,

        /// Write the records as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the summary row as CSV
        #[arg(long)]
        summary_csv: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Also report daily and monthly totals
        #[arg(long)]
        breakdown: bool,
    },

    /// Detect the currency of statement text
    Detect {
        /// Text file extracted from a statement (`-` for stdin)
        input: PathBuf,

        #[arg(long)]
        hint: Option<String>,
    },

    /// List the supported currencies
    Currencies,

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    currency: CurrencyCode,
    records: &'a [TransactionRecord],
    summary: &'a Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a Breakdown>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Extract {
            input,
            hint,
            sort_by_date: sort,
            csv,
            summary_csv,
            json,
            breakdown,
        } => {
            let cfg = config::load_config()?;
            let hint = resolve_hint(hint.as_deref().or(cfg.extract.locale_hint.as_deref()));
            let text = state::read_statement_text(&input)?;

            let extraction = extract_transactions(&text, hint)?;
            let currency = extraction.currency();
            let mut records = extraction.records;
            if sort || cfg.extract.sort_by_date {
                sort_by_date(&mut records);
            }
            let summary = Summary::from_records(&records, currency);
            let breakdown = breakdown.then(|| Breakdown::from_records(&records));

            if let Some(path) = csv {
                let path = cfg.export.resolve(&path);
                export_transactions(&records, &path)?;
                debug!("wrote {}", path.display());
            }
            if let Some(path) = summary_csv {
                let path = cfg.export.resolve(&path);
                export_summary(&summary, &path)?;
                debug!("wrote {}", path.display());
            }

            if json {
                let report = JsonReport {
                    currency,
                    records: &records,
                    summary: &summary,
                    breakdown: breakdown.as_ref(),
                };
                println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
            } else {
                print_table(&records, &summary);
                if let Some(breakdown) = &breakdown {
                    print_breakdown(breakdown);
                }
            }
        }

        Command::Detect { input, hint } => {
            let cfg = config::load_config()?;
            let hint = resolve_hint(hint.as_deref().or(cfg.extract.locale_hint.as_deref()));
            let text = state::read_statement_text(&input)?;
            let detection = detect_with_evidence(&text, hint);
            let c = detection.currency;
            println!("{} ({}, {}) via {}", c, c.symbol(), c.name(), describe(detection.evidence));
        }

        Command::Currencies => {
            for c in CurrencyCode::ALL {
                println!("{:<4} {:<6} {}", c.code(), c.symbol(), c.name());
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn resolve_hint(context: Option<&str>) -> Option<LocaleHint> {
    let context = context?;
    let hint = LocaleHint::from_context(context);
    if hint.is_none() && !context.eq_ignore_ascii_case("general") {
        warn!("ignoring unknown locale hint {context:?}");
    }
    hint
}

fn describe(evidence: Evidence) -> String {
    match evidence {
        Evidence::Code => "currency code in text".to_string(),
        Evidence::Symbol(s) => format!("symbol {s:?}"),
        Evidence::Region(r) => format!("region {r:?}"),
        Evidence::Bank(b) => format!("bank {b:?}"),
        Evidence::Hint(h) => format!("locale hint {h}"),
        Evidence::Default => "default".to_string(),
    }
}

fn print_table(records: &[TransactionRecord], summary: &Summary) {
    if records.is_empty() {
        println!("No transactions found.");
    }

    for r in records {
        println!(
            "{:<12} {:<40} {:>20} {:<8} {:>16}",
            r.date(),
            r.description(),
            format_amount(r.amount(), r.currency()),
            r.direction().as_str(),
            format_number(r.balance()),
        );
    }

    println!();
    println!("Total transactions: {}", summary.total_count);
    println!("Incoming: {} ({})", summary.incoming_count, format_number(summary.total_incoming));
    println!("Outgoing: {} ({})", summary.outgoing_count, format_number(summary.total_outgoing));
    println!("Net amount ({}): {}", summary.currency, format_number(summary.net));
}

fn print_breakdown(breakdown: &Breakdown) {
    println!();
    println!("Daily net:");
    for day in &breakdown.daily {
        println!("  {:<12} {:>16}", day.date, format_number(day.net));
    }

    println!();
    println!("Monthly:");
    for month in &breakdown.monthly {
        println!(
            "  {:<8} in {:>16}  out {:>16}",
            month.month,
            format_number(month.incoming),
            format_number(month.outgoing),
        );
    }
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "tally_core={level},tally_ingest={level},tally_report={level},{}={level}",
            env!("CARGO_CRATE_NAME")
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
