use anyhow::Context as _;
use outreach_core::{contact_message, ContactRequest};

use crate::context::AppContext;

/// Send the templated (or a custom) message to one influencer.
///
/// With `dry_run`, or when offline, the message is only printed.
///
/// # Errors
///
/// Returns an error if the influencer is unknown or the backend rejects the
/// contact request.
pub(crate) async fn run_contact(
    ctx: &AppContext,
    influencer_id: i64,
    message: Option<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let influencer = ctx
        .source
        .find(influencer_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("influencer {influencer_id} not found"))?;

    let message = message.unwrap_or_else(|| contact_message(&influencer));

    println!("Contact {} ({})", influencer.name, influencer.platform);
    println!();
    println!("{message}");
    println!();

    if dry_run || ctx.offline {
        println!("dry run: message not sent");
        return Ok(());
    }

    let response = ctx
        .client
        .contact_influencer(&ContactRequest {
            influencer_id,
            message,
        })
        .await
        .with_context(|| format!("failed to contact {}", influencer.name))?;

    if response.success {
        println!("{}", response.message);
    } else {
        anyhow::bail!("backend declined contact request: {}", response.message);
    }
    Ok(())
}
