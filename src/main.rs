use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use user_scorer::scoring::ScoringSettings;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_REJECTED_ROWS: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score users and write the report and JSON export (default if no subcommand)
    Run,
    /// Score users and print the summary without writing any files
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "user-scorer")]
#[command(about = "Score users from a CSV file and export the ones that qualify", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/user-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Input CSV file
    #[arg(short, long, global = true, default_value = "users.csv")]
    input: PathBuf,

    /// Where to write the text report
    #[arg(short, long, global = true, default_value = "report.txt")]
    report: PathBuf,

    /// Where to write the JSON export
    #[arg(short, long, global = true, default_value = "output.json")]
    output: PathBuf,

    /// CSV column holding the user id (overrides columns.user_id)
    #[arg(long, global = true)]
    id_column: Option<String>,

    /// Weight per purchase (overrides scoring.purchase_weight)
    #[arg(long, global = true, allow_negative_numbers = true)]
    purchase_weight: Option<f64>,

    /// Weight per visit (overrides scoring.visit_weight)
    #[arg(long, global = true, allow_negative_numbers = true)]
    visit_weight: Option<f64>,

    /// Scores must exceed this value (overrides scoring.score_threshold)
    #[arg(long, global = true, allow_negative_numbers = true)]
    score_threshold: Option<i64>,

    /// Minimum age, inclusive (overrides scoring.min_age)
    #[arg(long, global = true, allow_negative_numbers = true)]
    min_age: Option<i64>,

    /// Exit with a non-zero status if any row could not be parsed
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    std::process::exit(run(cli));
}

/// Carry out one invocation and return the process exit code.
fn run(cli: Cli) -> i32 {
    let command = cli.command.unwrap_or(Commands::Run);

    // Load config
    let config = match user_scorer::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    // Validate scoring config before touching any input
    let overrides = ScoringSettings {
        purchase_weight: cli.purchase_weight,
        visit_weight: cli.visit_weight,
        score_threshold: cli.score_threshold,
        min_age: cli.min_age,
    };
    let settings = config.scoring.unwrap_or_default().with_overrides(overrides);
    if let Err(errors) = user_scorer::scoring::validate_scoring(&settings) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_CONFIG;
    }
    let scoring = match settings.resolve() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return EXIT_CONFIG;
        }
    };

    let mut columns = config.columns.unwrap_or_default();
    if let Some(id_column) = cli.id_column {
        columns.user_id = id_column;
    }

    let rows = match user_scorer::records::read_user_rows(&cli.input, &columns) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Input error: {}", e);
            return EXIT_INPUT;
        }
    };

    let result = user_scorer::process(&rows, &scoring);
    let use_colors = user_scorer::output::should_use_colors();

    if !result.errors.is_empty() {
        eprintln!(
            "{}",
            user_scorer::output::format_rejections(&result.errors, use_colors)
        );
    }

    if let Commands::Run = command {
        if let Err(e) = user_scorer::output::write_report(&cli.report, &result) {
            eprintln!("Output error: {:#}", e);
            return EXIT_OUTPUT;
        }
        if let Err(e) = user_scorer::output::write_json(&cli.output, &result.accepted) {
            eprintln!("Output error: {:#}", e);
            return EXIT_OUTPUT;
        }
    }

    println!(
        "{}",
        user_scorer::output::format_summary(&result, use_colors)
    );
    if let Commands::Run = command {
        println!("Report: {}", cli.report.display());
        println!("Export: {}", cli.output.display());
    }

    if cli.strict && !result.errors.is_empty() {
        return EXIT_REJECTED_ROWS;
    }

    EXIT_SUCCESS
}
