//! DocSeek CLI
//!
//! Command-line interface for the DocSeek search client.
//! Provides one-shot search and health commands plus the interactive TUI.

use clap::{Parser, Subcommand};
use console::style;
use docseek::{format_percent, logging, ClientConfig, SearchClient};
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// DocSeek - terminal client for an NLP document search backend
#[derive(Parser)]
#[command(name = "docseek")]
#[command(author = "DocSeek Contributors")]
#[command(version)]
#[command(about = "Terminal client for an NLP document search backend", long_about = None)]
struct Cli {
    /// Backend base URL (falls back to DOCSEEK_BASE_URL, then the built-in default)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search UI (the default when no command is given)
    Tui,

    /// Run one search and print the ranked results
    Search {
        /// Query text (use -- before queries that start with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "10")]
        max: usize,
    },

    /// Probe the backend health endpoint
    Health,
}

fn main() {
    logging::init();
    logging::info("MAIN", "docseek starting up");

    let cli = Cli::parse();
    let config = resolve_config(cli.base_url);

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => cmd_tui(&config),
        Commands::Search { query, max } => cmd_search(&config, &query, max),
        Commands::Health => cmd_health(&config),
    };

    logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Base URL precedence: flag, then `DOCSEEK_BASE_URL`, then the default.
/// Resolved once here; nothing changes it at runtime.
fn resolve_config(base_url_flag: Option<String>) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(base_url) = base_url_flag.or_else(|| std::env::var("DOCSEEK_BASE_URL").ok()) {
        config.base_url = base_url;
    }
    logging::info("MAIN", &format!("backend base URL: {}", config.base_url));
    config
}

/// Interactive TUI
fn cmd_tui(config: &ClientConfig) -> docseek::Result<()> {
    let client = SearchClient::new(&config.base_url)?;

    let health = client.check_health();
    logging::info(
        "MAIN",
        &format!(
            "backend health at startup: {} ({})",
            health.status,
            health.message.as_deref().unwrap_or("-")
        ),
    );

    docseek::tui::run(client, config.max_results)
}

/// One-shot search command
fn cmd_search(config: &ClientConfig, query: &str, max_results: usize) -> docseek::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        // Blank submissions are silently ignored, same as in the UI
        logging::info("MAIN", "blank query ignored");
        return Ok(());
    }

    let client = SearchClient::new(&config.base_url)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Searching for '{}'...", query));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let outcome = client.search(query, max_results);
    spinner.finish_and_clear();

    let results = match outcome {
        Ok(results) => results,
        Err(e) if e.is_request_error() => {
            // Status codes are logged, never shown
            logging::error("MAIN", &format!("search failed: {}", e));
            eprintln!("{}", style(docseek::SEARCH_FAILED_MESSAGE).red());
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    println!(
        "Found {} results in {:.2}s:",
        style(results.len()).green(),
        start.elapsed().as_secs_f64()
    );
    println!();

    if results.is_empty() {
        println!("  Your search did not match any documents.");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        let mut heading = format!(
            "  {} {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(result.display_title()).cyan()
        );
        if let Some(category) = &result.category {
            heading.push_str(&format!(" {}", style(format!("[{}]", category)).magenta()));
        }
        println!("{}", heading);
        println!("      {}", style(truncate(result.snippet(), 120)).dim());
        println!(
            "      {} {}   {} {}",
            style("ID:").dim(),
            result.id,
            style("Relevance:").dim(),
            style(format_percent(result.score_percent())).yellow()
        );
    }

    Ok(())
}

/// Health probe command. The probe itself never fails; a degraded backend
/// is reported, not raised.
fn cmd_health(config: &ClientConfig) -> docseek::Result<()> {
    let client = SearchClient::new(&config.base_url)?;
    let health = client.check_health();

    let marker = if health.is_healthy() {
        style("\u{2713}").green().bold()
    } else {
        style("\u{2717}").red().bold()
    };

    println!(
        "{} {} - {}",
        marker,
        health.status,
        health.message.as_deref().unwrap_or("no message")
    );

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}\u{2026}", cut)
}
