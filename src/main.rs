mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{ExportFormat, OutputFormat};
use recomendar::{CatalogFilter, SkillLevel};

#[derive(Parser)]
#[command(name = "recomendar")]
#[command(version, about = "Stack recommendations over an AI tool catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend tool stacks for a goal
    Recommend {
        /// Free-text description of what to build
        query: String,

        /// Catalog JSON file
        #[arg(long, default_value = "tools.json")]
        catalog: PathBuf,

        /// Skill level for difficulty-aware ranking
        #[arg(long, value_enum)]
        level: Option<SkillLevel>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List and inspect catalog records
    Catalog {
        /// Catalog JSON file
        #[arg(long, default_value = "tools.json")]
        catalog: PathBuf,

        /// Show one tool by name
        #[arg(long)]
        show: Option<String>,

        /// Search tool names and summaries
        #[arg(long)]
        search: Option<String>,

        /// Filter by purpose
        #[arg(long, value_delimiter = ',')]
        purpose: Vec<String>,

        /// Filter by application field
        #[arg(long, value_delimiter = ',')]
        application_field: Vec<String>,

        /// Filter by functional role
        #[arg(long, value_delimiter = ',')]
        functional_role: Vec<String>,

        /// Filter by tech layer
        #[arg(long, value_delimiter = ',')]
        tech_layer: Vec<String>,

        /// Filter by data flow role
        #[arg(long, value_delimiter = ',')]
        data_flow_role: Vec<String>,

        /// Filter by difficulty label
        #[arg(long, value_delimiter = ',')]
        difficulty: Vec<String>,
    },

    /// Export catalog records
    Export {
        /// Catalog JSON file
        #[arg(long, default_value = "tools.json")]
        catalog: PathBuf,

        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("recomendar v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Recommend {
            query,
            catalog,
            level,
            format,
        } => cli::cmd_recommend(&query, &catalog, level, format),
        Commands::Catalog {
            catalog,
            show,
            search,
            purpose,
            application_field,
            functional_role,
            tech_layer,
            data_flow_role,
            difficulty,
        } => {
            let filter = CatalogFilter {
                purpose,
                application_field,
                functional_role,
                tech_layer,
                data_flow_role,
                difficulty,
            };
            cli::cmd_catalog(&catalog, show, search, filter)
        }
        Commands::Export {
            catalog,
            format,
            output,
        } => cli::cmd_export(&catalog, format, output),
    }
}
