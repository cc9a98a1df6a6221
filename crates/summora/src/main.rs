use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use summora_common::{logger, AppConfig};
use summora_llm::{
    validate_input, GeminiClient, Summarizer, SummaryConfig, SummaryFormat, SummaryLength,
    SummaryResult, SummaryTone,
};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "summora")]
#[command(about = "Summora - AI-powered text summarization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server serving the browser UI
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Summarize a file (or stdin) once and print the result
    Summarize {
        /// Input file; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,

        /// Summary length: concise, balanced, detailed
        #[arg(long, default_value = "balanced")]
        length: SummaryLength,

        /// Summary tone: professional, casual, academic, creative
        #[arg(long, default_value = "professional")]
        tone: SummaryTone,

        /// Output format: paragraph, bullets
        #[arg(long, default_value = "paragraph")]
        format: SummaryFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root before any
    // CLI argument overrides are applied
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            serve().await?;
        }
        Some(Commands::Summarize {
            file,
            length,
            tone,
            format,
        }) => {
            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_console_logging("warn")?;

            let text = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            validate_input(&text)?;

            let summary_config = SummaryConfig {
                length,
                tone,
                format,
            };

            let original_word_count = summora_llm::word_count(&text);
            let summarizer = Summarizer::new(GeminiClient::from_config(&config));
            let content = summarizer.summarize(&text, &summary_config).await?;
            let result = SummaryResult::new(content, original_word_count);

            println!("{}", result.content);
            println!();
            println!(
                "Words: {} -> {} ({}% reduction, ~{} min read)",
                result.original_word_count,
                result.word_count,
                result.reduction_percent(),
                result.reading_time_minutes()
            );
        }
        None => {
            // Default: start server with env-provided configuration
            serve().await?;
        }
    }

    Ok(())
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.validate()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Summora starting...");
    tracing::info!("  Model: {}", config.summary_model);
    tracing::info!("  Static dir: {}", config.static_dir.display());

    println!("Server listening on http://{}", config.server_bind_address());

    summora_server::start_server(config).await?;

    Ok(())
}
