mod brief;
mod contact;
mod context;
mod influencers;
mod performance;

use clap::{Parser, Subcommand};
use outreach_core::BriefForm;
use tracing_subscriber::EnvFilter;

use crate::brief::BriefCommands;
use crate::context::AppContext;
use crate::influencers::FilterArgs;
use crate::performance::PerformanceArgs;

#[derive(Debug, Parser)]
#[command(name = "outreach")]
#[command(about = "Influencer outreach dashboard")]
struct Cli {
    /// Use the bundled sample roster only; never call the backend
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,
    /// Browse influencers with search and filters
    Influencers(FilterArgs),
    /// Search influencers by keyword
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Contact an influencer with the templated outreach message
    Contact {
        /// Influencer ID
        #[arg(long)]
        id: i64,
        /// Custom message instead of the template
        #[arg(long)]
        message: Option<String>,
        /// Print the message without sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Show mock campaign performance, or leave feedback on content
    Performance(PerformanceArgs),
    /// Create or upload a client brief
    Brief {
        #[command(subcommand)]
        command: BriefCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = outreach_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("outreach: no command given; run `outreach --help`");
        return Ok(());
    };

    let ctx = AppContext::new(config, cli.offline)?;

    match command {
        Commands::Health => influencers::run_health(&ctx).await,
        Commands::Influencers(args) => influencers::run_influencers(&ctx, &args).await,
        Commands::Search { query, limit } => influencers::run_search(&ctx, &query, limit).await,
        Commands::Contact {
            id,
            message,
            dry_run,
        } => contact::run_contact(&ctx, id, message, dry_run).await,
        Commands::Performance(args) => performance::run_performance(&ctx, &args),
        Commands::Brief { command } => match command {
            BriefCommands::Create {
                client_name,
                product_service,
                target_audience,
                campaign_goal,
                influencer_type,
            } => {
                let form = BriefForm {
                    client_name,
                    product_service,
                    target_audience,
                    campaign_goal,
                    influencer_type,
                };
                brief::run_brief_create(&ctx, form).await
            }
            BriefCommands::Upload { file, tick_ms } => {
                brief::run_brief_upload(&ctx, &file, tick_ms).await
            }
        },
    }
}
