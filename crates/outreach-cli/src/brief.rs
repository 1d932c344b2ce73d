//! Brief commands: generate a brief from the form fields, or simulate an upload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::builder::PossibleValuesParser;
use clap::Subcommand;
use outreach_client::{submit_brief_form, UploadTask};
use outreach_core::{BriefForm, PRODUCT_SERVICES, TARGET_AUDIENCES};

use crate::context::AppContext;
use crate::influencers::{run_influencers, FilterArgs};

/// Sub-commands available under `brief`.
#[derive(Debug, Subcommand)]
pub enum BriefCommands {
    /// Generate a brief from campaign details and submit it
    Create {
        #[arg(long)]
        client_name: String,
        #[arg(long, value_parser = PossibleValuesParser::new(PRODUCT_SERVICES.iter().copied()))]
        product_service: String,
        #[arg(long, value_parser = PossibleValuesParser::new(TARGET_AUDIENCES.iter().copied()))]
        target_audience: String,
        #[arg(long)]
        campaign_goal: String,
        /// Preferred influencer type
        #[arg(long)]
        influencer_type: String,
    },
    /// Upload a brief document (simulated; the file is not read)
    Upload {
        file: PathBuf,
        /// Progress interval in milliseconds (defaults to OUTREACH_UPLOAD_TICK_MS)
        #[arg(long)]
        tick_ms: Option<u64>,
    },
}

/// Submit the brief form. On success the brief becomes active and the
/// influencer list is shown.
///
/// # Errors
///
/// Returns an error if the form is incomplete, the backend is unreachable,
/// or the command runs offline.
pub(crate) async fn run_brief_create(ctx: &AppContext, form: BriefForm) -> anyhow::Result<()> {
    if ctx.offline {
        anyhow::bail!("brief creation needs the backend; run without --offline");
    }

    match submit_brief_form(&ctx.client, form, &ctx.active_brief).await {
        Ok(brief) => {
            println!("Created brief {} for {}", brief.id, brief.name);
            println!();
        }
        Err(err) => {
            eprintln!("Failed to create brief. Please try again.");
            return Err(err.into());
        }
    }

    run_influencers(ctx, &FilterArgs::default()).await
}

/// Run the simulated upload, reporting progress on stderr. Ctrl-C cancels.
///
/// # Errors
///
/// Returns an error if `file` does not exist or the upload is cancelled.
pub(crate) async fn run_brief_upload(
    ctx: &AppContext,
    file: &Path,
    tick_ms: Option<u64>,
) -> anyhow::Result<()> {
    if !file.is_file() {
        anyhow::bail!("brief file '{}' not found", file.display());
    }

    let tick = Duration::from_millis(tick_ms.unwrap_or(ctx.config.upload_tick_ms));
    let task = UploadTask::start(tick, ctx.active_brief.clone());
    let mut progress = task.progress();
    tracing::info!(file = %file.display(), ?tick, "starting brief upload");

    let upload = async move {
        let report = async {
            while progress.changed().await.is_ok() {
                let percent = *progress.borrow_and_update();
                eprintln!("Uploading... {percent}%");
                if percent >= 100 {
                    break;
                }
            }
        };
        let (result, ()) = tokio::join!(task.wait(), report);
        result
    };

    // Dropping the pending upload on ctrl-c aborts its task.
    let brief = tokio::select! {
        result = upload => result?,
        _ = tokio::signal::ctrl_c() => anyhow::bail!("upload cancelled"),
    };

    println!("Uploaded {} as '{}'", file.display(), brief.name);
    println!();
    run_influencers(ctx, &FilterArgs::default()).await
}
