//! Campaign performance report and content feedback.

use clap::Args;
use outreach_core::{CampaignPerformance, ContentFeedback};

use crate::context::AppContext;
use crate::influencers::truncate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PerformanceArgs {
    /// Leave feedback on one content item instead of printing the report
    #[arg(long, value_name = "CONTENT_ID")]
    pub feedback: Option<i64>,
    /// Whether the content was effective (true or false)
    #[arg(long, requires = "feedback")]
    pub effective: Option<bool>,
    /// Free-form feedback text
    #[arg(long, requires = "feedback")]
    pub comment: Option<String>,
}

/// Print the campaign report, or record feedback when `--feedback` is given.
///
/// # Errors
///
/// Returns an error if the performance data cannot be loaded or the feedback
/// names an unknown content item.
pub(crate) fn run_performance(ctx: &AppContext, args: &PerformanceArgs) -> anyhow::Result<()> {
    let performance = match &ctx.config.performance_path {
        Some(path) => outreach_core::load_performance(path)?,
        None => outreach_core::bundled_performance()?,
    };

    if let Some(content_id) = args.feedback {
        let feedback = ContentFeedback {
            content_id,
            effective: args.effective,
            comment: args.comment.clone().unwrap_or_default(),
        };
        println!("{}", submit_feedback(&performance, &feedback)?);
        return Ok(());
    }

    for line in render_report(&performance) {
        println!("{line}");
    }
    Ok(())
}

/// Feedback is acknowledged and logged; nothing stores it.
pub(crate) fn submit_feedback(
    performance: &CampaignPerformance,
    feedback: &ContentFeedback,
) -> anyhow::Result<String> {
    let (influencer, content) = performance
        .find_content(feedback.content_id)
        .ok_or_else(|| anyhow::anyhow!("content {} not found", feedback.content_id))?;

    tracing::info!(
        content_id = content.id,
        influencer = %influencer.name,
        effective = ?feedback.effective,
        comment = %feedback.comment,
        "content feedback submitted"
    );

    Ok(format!(
        "Feedback on {}'s {} (content {}) submitted.",
        influencer.name, content.kind, content.id
    ))
}

pub(crate) fn render_report(performance: &CampaignPerformance) -> Vec<String> {
    let mut lines = vec![
        performance.campaign_name.clone(),
        format!(
            "{:<20}{}",
            "Total Engagements",
            thousands(performance.total_engagements)
        ),
        format!("{:<20}{}", "Conversions", thousands(performance.conversions)),
        format!("{:<20}${}", "Revenue", thousands(performance.revenue)),
        format!("{:<20}{}%", "ROI", performance.roi),
        String::new(),
        "Influencer Content".to_string(),
        format!(
            "{:<5}{:<18}{:<7}{:<9}{:<10}{:<8}{:<9}{:<13}{:<12}CONV RATE",
            "ID", "INFLUENCER", "TYPE", "LIKES", "COMMENTS", "SHARES", "VIEWS", "CONVERSIONS", "ENGAGEMENT"
        ),
    ];

    for influencer in &performance.influencers {
        for content in &influencer.content {
            lines.push(format!(
                "{:<5}{:<18}{:<7}{:<9}{:<10}{:<8}{:<9}{:<13}{:<12}{}",
                content.id,
                truncate(&influencer.name, 16),
                content.kind.to_string(),
                thousands(content.likes),
                thousands(content.comments),
                thousands(content.shares),
                thousands(content.views),
                thousands(content.conversions),
                rate(content.engagement_rate()),
                rate(content.conversion_rate()),
            ));
        }
    }

    lines.push(String::new());
    lines.push("Daily Metrics".to_string());
    lines.push(format!(
        "{:<8}{:<9}{:<10}{:<8}{:<13}VIEWS",
        "DAY", "LIKES", "COMMENTS", "SHARES", "CONVERSIONS"
    ));
    for day in &performance.daily {
        lines.push(format!(
            "{:<8}{:<9}{:<10}{:<8}{:<13}{}",
            day.day,
            thousands(day.likes),
            thousands(day.comments),
            thousands(day.shares),
            thousands(day.conversions),
            thousands(day.views),
        ));
    }

    lines
}

fn rate(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.2}%"))
}

/// `125750` as `125,750`.
pub(crate) fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
