use clap::{Parser, ValueEnum};
use gamerec::{ConfigOverrides, RecommendationEngine, RecommenderConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Recommend video games similar to a given title
#[derive(Parser, Debug)]
#[command(name = "gamerec")]
#[command(about = "Content-based video game recommender", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the game table (CSV)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Title to find similar games for
    #[arg(short, long)]
    title: Option<String>,

    /// Number of recommendations
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Lowest retained price (inclusive)
    #[arg(long)]
    price_min: Option<f64>,

    /// Highest retained price (inclusive)
    #[arg(long)]
    price_max: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Config file values (or defaults) with the command-line flags on top
    fn resolve_config(&self) -> anyhow::Result<RecommenderConfig> {
        let base = match &self.config {
            Some(path) => RecommenderConfig::from_json_file(path)?,
            None => RecommenderConfig::default(),
        };
        let overrides = ConfigOverrides {
            input_path: self.input.clone(),
            query_title: self.title.clone(),
            top_k: self.top_k,
            price_min: self.price_min,
            price_max: self.price_max,
        };
        Ok(base.with_overrides(&overrides)?)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting gamerec v{}", env!("CARGO_PKG_VERSION"));
    let config = args.resolve_config()?;
    info!("Input: {:?}", config.input_path);
    info!("Price band: [{}, {}]", config.price_min, config.price_max);

    let engine = RecommendationEngine::from_config(&config)?;
    let summary = engine.summary(&config.query_title, config.top_k)?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", summary.report);
            println!();
            print!("{}", summary.comparison);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    info!("Done");
    Ok(())
}
