//! dinegraph - restaurant recommendations from a similarity graph
//!
//! Usage:
//!   dinegraph recommend --data zomato.csv --cuisine cafe --min-rating 4 --top-k 5
//!   dinegraph graph --data zomato.csv --cuisine cafe > graph.json
//!   dinegraph config > dinegraph.yaml
//!
//! Logging honours RUST_LOG; `-v` / `-vv` raise the default level.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dinegraph_core::config::RecommenderConfig;
use dinegraph_core::features::preference::Preferences;
use dinegraph_core::features::report::{GraphExport, ReportFormat};
use dinegraph_core::pipeline::RecommendationPipeline;
use dinegraph_core::shared::parallel::init_thread_pool;

#[derive(Parser)]
#[command(name = "dinegraph")]
#[command(about = "Rank restaurants by centrality in a cuisine/rating/cost similarity graph", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top recommendations
    Recommend {
        #[command(flatten)]
        query: QueryArgs,

        /// Number of restaurants to show
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Output format (text or json)
        #[arg(short, long)]
        format: Option<ReportFormat>,
    },

    /// Emit the similarity graph (with scores) as JSON
    Graph {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print the default configuration as YAML
    Config,
}

#[derive(Args)]
struct QueryArgs {
    /// Restaurant CSV file
    #[arg(short, long)]
    data: PathBuf,

    /// Cuisine substring to match (case-insensitive)
    #[arg(short, long)]
    cuisine: Option<String>,

    /// Minimum rating (inclusive)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Maximum cost for two (inclusive)
    #[arg(long)]
    max_cost: Option<f64>,

    /// YAML configuration file (version: 1)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl QueryArgs {
    fn preferences(&self) -> Preferences {
        Preferences {
            cuisine: self.cuisine.clone(),
            min_rating: self.min_rating,
            max_cost: self.max_cost,
        }
    }

    fn load_config(&self) -> Result<RecommenderConfig> {
        match &self.config {
            Some(path) => RecommenderConfig::from_yaml(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Ok(RecommenderConfig::default()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Recommend {
            query,
            top_k,
            format,
        } => recommend(query, top_k, format),
        Commands::Graph { query } => graph(query),
        Commands::Config => {
            print!("{}", RecommenderConfig::default().to_yaml()?);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_pipeline(config: RecommenderConfig) -> Result<RecommendationPipeline> {
    init_thread_pool(&config.parallel);
    RecommendationPipeline::new(config).context("invalid configuration")
}

fn recommend(query: QueryArgs, top_k: Option<usize>, format: Option<ReportFormat>) -> Result<()> {
    let mut config = query.load_config()?;
    if let Some(k) = top_k {
        config.report.top_k = k;
    }
    let format = format.unwrap_or(config.report.format);

    let pipeline = build_pipeline(config)?;
    let output = pipeline
        .run_from_path(&query.data, &query.preferences())
        .with_context(|| format!("ranking restaurants from {}", query.data.display()))?;

    print!("{}", output.report.render(format)?);
    if format == ReportFormat::Json {
        println!();
    }
    Ok(())
}

fn graph(query: QueryArgs) -> Result<()> {
    let pipeline = build_pipeline(query.load_config()?)?;
    let output = pipeline
        .run_from_path(&query.data, &query.preferences())
        .with_context(|| format!("building graph from {}", query.data.display()))?;

    let export = GraphExport::from_graph(&output.graph, Some(&output.ranking));
    println!("{}", export.to_json()?);
    Ok(())
}
