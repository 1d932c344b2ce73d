//! Influencer listing, search and health commands.

use clap::Args;
use outreach_client::Origin;
use outreach_core::{filter_influencers, Influencer, InfluencerFilter, PlatformFilter};

use crate::context::AppContext;

/// Search and filter flags for the influencer list.
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct FilterArgs {
    /// Match name, username or niche (case-insensitive)
    #[arg(long, short = 's', default_value = "")]
    pub search: String,
    /// Platform: all, instagram, youtube or twitter
    #[arg(long, default_value = "all")]
    pub platform: PlatformFilter,
    /// Minimum followers, in thousands
    #[arg(long)]
    pub min_followers: Option<f64>,
    /// Minimum engagement rate, in percent
    #[arg(long)]
    pub min_engagement: Option<f64>,
    /// Location substring (case-insensitive)
    #[arg(long, default_value = "")]
    pub location: String,
}

impl From<&FilterArgs> for InfluencerFilter {
    fn from(args: &FilterArgs) -> Self {
        InfluencerFilter {
            term: args.search.clone(),
            platform: args.platform.clone(),
            min_followers_k: args.min_followers,
            min_engagement: args.min_engagement,
            location: args.location.clone(),
        }
    }
}

/// List influencers, remote-first, through the given filters.
///
/// # Errors
///
/// Never fails today: an unreachable backend falls back to bundled data.
pub(crate) async fn run_influencers(ctx: &AppContext, args: &FilterArgs) -> anyhow::Result<()> {
    let resolved = ctx.source.list().await;
    let filter = InfluencerFilter::from(args);
    let matches = filter_influencers(&resolved.influencers, &filter);

    print_active_brief(ctx);
    print_influencers(&matches, resolved.origin);
    Ok(())
}

/// Search influencers through the backend (or the bundled roster).
///
/// # Errors
///
/// Never fails today: an unreachable backend falls back to bundled data.
pub(crate) async fn run_search(
    ctx: &AppContext,
    query: &str,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    let resolved = ctx.source.search(query, limit).await;
    print_influencers(&resolved.influencers, resolved.origin);
    Ok(())
}

/// Check that the backend is up.
///
/// # Errors
///
/// Returns an error if the health endpoint cannot be reached or fails.
pub(crate) async fn run_health(ctx: &AppContext) -> anyhow::Result<()> {
    let health = ctx.client.health_check().await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}

fn print_active_brief(ctx: &AppContext) {
    if let Some(brief) = ctx.active_brief.current() {
        println!("Active Brief: {} ({}, {})", brief.name, brief.kind, brief.date);
        println!();
    }
}

fn print_influencers(influencers: &[Influencer], origin: Origin) {
    if influencers.is_empty() {
        println!("No influencers found matching your criteria.");
        println!("Try adjusting your filters or search terms.");
        return;
    }

    println!("{} influencers from {origin}", influencers.len());
    println!(
        "{:<5}{:<20}{:<18}{:<11}{:<11}{:<12}{:<22}LOCATION",
        "ID", "NAME", "USERNAME", "PLATFORM", "FOLLOWERS", "ENGAGEMENT", "NICHE"
    );
    for influencer in influencers {
        println!(
            "{:<5}{:<20}{:<18}{:<11}{:<11}{:<12}{:<22}{}",
            influencer.id,
            truncate(&influencer.name, 18),
            truncate(dash(influencer.username.as_deref()), 16),
            influencer.platform,
            influencer.followers.to_string(),
            dash(influencer.engagement_rate.as_deref()),
            truncate(dash(influencer.niche.as_deref()), 20),
            dash(influencer.location.as_deref()),
        );
    }
}

fn dash(value: Option<&str>) -> &str {
    value.unwrap_or("\u{2014}")
}

/// Shortens `value` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let kept: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        value.to_string()
    }
}
