//! Finsight CLI
//!
//! Terminal front end for the analysis backend:
//! - Upload a transactions CSV and show the resulting dashboard
//! - Show insights and the AI summary
//! - Ask questions about spending
//! - Check backend reachability

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finsight::config::{generate_default_config, Config};
use finsight::markup::{format_reply, to_plain};
use finsight::preview::preview_csv;
use finsight::report::{
    anomaly_section, chart_slices, format_money, format_percent, summary_cards, trend_arrow,
};
use finsight::{
    AppState, BackendClient, ChatSession, ClientConfig, InsightsBackend, InsightsData,
    Transaction, UploadFile, UploadForm,
};

#[derive(Parser)]
#[command(name = "finsight-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upload transactions and explore spending insights")]
#[command(long_about = "Finsight talks to the Financial Insights analysis backend.\nUpload a CSV of transactions, read the insights, and ask questions about your spending.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config and FINSIGHT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/finsight/config.toml or ./finsight.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a transactions CSV, then show the insights
    Upload {
        /// Path to CSV file (columns: date, description, amount, category)
        path: PathBuf,
        /// Inspect the file locally without uploading
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the insights dashboard
    Insights,

    /// Ask a question; without one, start an interactive session
    Chat {
        /// Question to ask
        query: Option<String>,
    },

    /// Show the AI-written spending summary
    Summary,

    /// Check that the backend is reachable
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = finsight::backend::normalize_base(url);
    }

    init_logging(&config);

    let backend = BackendClient::new(ClientConfig::from(&config.api))?;

    match cli.command {
        Commands::Upload { path, dry_run } => {
            if dry_run {
                inspect_csv(&path)?;
            } else {
                upload(&backend, &path, cli.json).await?;
            }
        }

        Commands::Insights => {
            let mut app = AppState::new();
            if let Err(alert) = app.load_insights(&backend).await {
                bail!(alert);
            }
            if let Some(insights) = &app.insights {
                print_insights(insights, cli.json)?;
            }
        }

        Commands::Chat { query } => match query {
            Some(q) => {
                let mut chat = ChatSession::new();
                chat.set_input(q);
                ask(&mut chat, &backend, cli.json).await?;
            }
            None => interactive_chat(&backend, cli.json).await?,
        },

        Commands::Summary => {
            let summary = backend
                .fetch_summary()
                .await
                .context("Failed to fetch AI summary")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", to_plain(&format_reply(&summary.summary)));
                println!();
                println!("Generated at {}", summary.generated_at);
            }
        }

        Commands::Status => match backend.service_info().await {
            Ok(info) => {
                println!("Finsight CLI v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Backend: {}", backend.base_url());
                println!(
                    "Service: {} {}",
                    info.message,
                    info.version.as_deref().unwrap_or("")
                );
            }
            Err(e) => {
                eprintln!("Cannot reach the analysis backend at {}", backend.base_url());
                eprintln!("Error: {}", e);
                eprintln!();
                eprintln!("Make sure the backend is running, or pass --api-url.");
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("finsight={}", config.logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Upload, then fetch insights exactly like the dashboard does
async fn upload(backend: &BackendClient, path: &Path, json: bool) -> anyhow::Result<()> {
    let mut form = UploadForm::new();
    form.select(UploadFile::from_path(path)?);

    let Some(response) = form.submit(backend).await else {
        bail!(form.error.unwrap_or_else(|| "Upload failed".to_string()));
    };

    if !json {
        println!(
            "{} ({} transactions)",
            response.message, response.transactions_count
        );
        println!();
    }

    let mut app = AppState::new();
    if let Err(alert) = app.load_insights(backend).await {
        bail!(alert);
    }
    if let Some(insights) = &app.insights {
        print_insights(insights, json)?;
    }
    Ok(())
}

/// Report what the backend would receive, without sending anything
fn inspect_csv(path: &Path) -> anyhow::Result<()> {
    let preview = preview_csv(path).with_context(|| format!("Cannot read {:?}", path))?;

    println!("Detected columns:");
    for (i, h) in preview.headers.iter().enumerate() {
        println!("  {}: {}", i, h);
    }

    if !preview.missing.is_empty() {
        println!();
        println!("Warning: the backend expects columns {:?}", Transaction::CSV_COLUMNS);
        println!("Missing: {}", preview.missing.join(", "));
    }

    println!();
    println!("Rows: {}", preview.rows);
    if preview.bad_rows > 0 {
        println!("Unreadable rows: {}", preview.bad_rows);
    }
    println!();
    println!("(Dry run - nothing was uploaded)");
    Ok(())
}

async fn ask(
    chat: &mut ChatSession,
    backend: &BackendClient,
    json: bool,
) -> anyhow::Result<()> {
    if !chat.ask(backend).await {
        return Ok(());
    }

    if let Some(reply) = chat.last_reply() {
        if json {
            let value = serde_json::json!({
                "role": reply.role,
                "content": reply.content,
                "timestamp": reply.timestamp.to_rfc3339(),
            });
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("{}", to_plain(&format_reply(&reply.content)));
            println!("  [{}]", reply.time_label());
        }
    }
    Ok(())
}

async fn interactive_chat(backend: &BackendClient, json: bool) -> anyhow::Result<()> {
    println!("Ask me anything about your spending patterns! (empty line or Ctrl-D to quit)");
    println!("Examples:");
    println!("  Why did my spending spike last month?");
    println!("  What are my top spending categories?");
    println!("  Any unusual transactions recently?");
    println!();

    let mut chat = ChatSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        chat.set_input(line);
        println!("Thinking...");
        ask(&mut chat, backend, json).await?;
        println!();
    }

    Ok(())
}

fn print_insights(insights: &InsightsData, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(insights)?);
        return Ok(());
    }

    println!("Your Financial Insights");
    println!("{}", "=".repeat(60));
    for card in summary_cards(insights) {
        println!("{:<20} {}", card.title, card.value);
    }

    println!();
    println!("Top Spending Categories");
    println!("{}", "-".repeat(60));
    for (cat, slice) in insights.top_categories.iter().zip(chart_slices(insights)) {
        println!(
            "{} {:<24} {:>8} {:>12} {}",
            slice.color,
            cat.category,
            format_percent(cat.percentage),
            format_money(cat.total),
            trend_arrow(cat.trend)
        );
    }

    if let Some(anomalies) = anomaly_section(insights) {
        println!();
        println!("Unusual Transactions");
        println!("{}", "-".repeat(60));
        for anomaly in anomalies {
            println!(
                "{:<12} {:>12}  {}",
                anomaly.date,
                format_money(anomaly.amount),
                anomaly.description
            );
            println!("{:<12} {}", "", anomaly.reason);
        }
    }

    Ok(())
}
