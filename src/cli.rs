use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::ProductReport;
use crate::service::{AnalysisOutcome, ConditionAnalyzer};
use crate::source::HttpProductSource;
use crate::telemetry;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(
    name = "Track Fitting Condition Analyzer",
    about = "Fetch a track fitting maintenance record and report its wear condition",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single product id and print the report
    Analyze(AnalyzeArgs),
    /// Prompt for product ids until quit/exit/q (default command)
    Interactive(SessionArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Product identifier to look up
    product_id: String,
    /// Emit the report as pretty JSON instead of the console layout
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Args, Debug, Default)]
struct SessionArgs {
    /// Override the configured product API base URL
    #[arg(long)]
    base_url: Option<String>,
    /// Evaluation date for age/inspection math (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

/// What one prompt line asks for. Exit sentinels are recognized here so the
/// loop itself stays free of string comparisons.
#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Analyze(String),
    Exit,
    Empty,
}

impl PromptAction {
    fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if matches!(trimmed.to_lowercase().as_str(), "quit" | "exit" | "q") {
            return Self::Exit;
        }
        Self::Analyze(trimmed.to_string())
    }
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Interactive(SessionArgs::default()));

    match command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::Interactive(args) => run_interactive(args).await,
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn build_analyzer(
    session: &SessionArgs,
) -> Result<(ConditionAnalyzer<HttpProductSource>, NaiveDate), AppError> {
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(base_url) = &session.base_url {
        config.api.base_url = base_url.clone();
    }

    let source = HttpProductSource::new(&config.api)?;
    let today = session.today.unwrap_or_else(|| Local::now().date_naive());

    Ok((ConditionAnalyzer::new(source), today))
}

async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        product_id,
        json,
        session,
    } = args;

    let (analyzer, today) = build_analyzer(&session)?;
    let outcome = analyzer.analyze(&product_id, today).await?;

    if json {
        println!("{:#}", outcome_json(&outcome));
    } else {
        render_outcome(&outcome);
    }

    Ok(())
}

async fn run_interactive(args: SessionArgs) -> Result<(), AppError> {
    let (analyzer, today) = build_analyzer(&args)?;

    println!("Track fitting condition analyzer. Enter a product id, or 'quit' to exit.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("product id> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed
            break;
        }

        match PromptAction::from_line(&line) {
            PromptAction::Exit => break,
            PromptAction::Empty => {
                println!("Please enter a product id.");
            }
            PromptAction::Analyze(product_id) => {
                match analyzer.analyze(&product_id, today).await {
                    Ok(outcome) => render_outcome(&outcome),
                    Err(error) => println!("Could not analyze '{product_id}': {error}"),
                }
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn outcome_json(outcome: &AnalysisOutcome) -> serde_json::Value {
    match outcome {
        AnalysisOutcome::Report(report) => serde_json::json!(report),
        AnalysisOutcome::Unavailable { product_id } => serde_json::json!({
            "error": format!("Product '{product_id}' not found or API error"),
        }),
    }
}

fn render_outcome(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Unavailable { product_id } => {
            println!("Product '{product_id}' not found or the product API is unavailable.");
        }
        AnalysisOutcome::Report(report) => render_report(report),
    }
}

fn render_report(report: &ProductReport) {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("RAILWAY TRACK FITTING CONDITION REPORT");
    println!("{rule}");

    println!("\nProduct information");
    println!("- Product ID: {}", report.product.product_id);
    println!("- Vendor: {}", report.product.vendor);
    println!("- Batch No: {}", report.product.batch_no);
    println!("- Supply Date: {}", report.product.supply_date);
    println!("- Warranty: {}", report.product.warranty);
    println!("- Status: {}", report.product.status);

    println!("\nCondition analysis");
    println!("- Condition: {}", report.analysis.condition_label);
    println!("- Risk score: {}", report.analysis.risk_score_display);
    println!("- Age: {}", report.analysis.age_display);
    println!(
        "- Last inspection: {}",
        report.analysis.last_inspection_display
    );
    if report.analysis.risk_factors.is_empty() {
        println!("- Risk factors: none");
    } else {
        println!("- Risk factors:");
        for factor in &report.analysis.risk_factors {
            println!("    - {} (+{})", factor.note, factor.weight);
        }
    }

    println!("\nRecommendations");
    for (index, recommendation) in report.recommendations.iter().enumerate() {
        println!("  {}. {recommendation}", index + 1);
    }

    println!("\n{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_recognizes_exit_sentinels() {
        for line in ["quit", "exit", "q", " QUIT \n", "Q\n"] {
            assert_eq!(PromptAction::from_line(line), PromptAction::Exit, "{line:?}");
        }
    }

    #[test]
    fn prompt_treats_blank_lines_as_empty() {
        assert_eq!(PromptAction::from_line("\n"), PromptAction::Empty);
        assert_eq!(PromptAction::from_line("   "), PromptAction::Empty);
    }

    #[test]
    fn prompt_passes_ids_through_trimmed() {
        assert_eq!(
            PromptAction::from_line("  TF-1042 \n"),
            PromptAction::Analyze("TF-1042".to_string())
        );
    }

    #[test]
    fn unavailable_outcome_serializes_to_the_error_shape() {
        let value = outcome_json(&AnalysisOutcome::Unavailable {
            product_id: "TF-9".to_string(),
        });
        assert_eq!(
            value.get("error").and_then(serde_json::Value::as_str),
            Some("Product 'TF-9' not found or API error")
        );
        assert!(value.get("product").is_none());
    }
}
