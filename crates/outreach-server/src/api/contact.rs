//! POST /api/contact: records outreach against a lead.

use axum::{extract::State, Extension, Json};
use outreach_core::{ContactRequest, ContactResponse};

use crate::middleware::RequestId;

use super::{AppState, ErrorResponse};

const CONTACTED_STAGE: &str = "contacted";

/// Moves the influencer's lead stage to `contacted`. No message is delivered.
pub(super) async fn contact_influencer(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ErrorResponse> {
    let mut roster = state.roster.write().await;
    let influencer = roster
        .iter_mut()
        .find(|influencer| influencer.id == request.influencer_id)
        .ok_or_else(|| {
            ErrorResponse::not_found(format!(
                "influencer {} not found",
                request.influencer_id
            ))
        })?;

    influencer.lead_stage = Some(CONTACTED_STAGE.to_string());
    tracing::info!(
        request_id = %req_id.0,
        influencer_id = request.influencer_id,
        message_len = request.message.len(),
        "influencer marked contacted"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: format!(
            "Contact request sent to influencer {}",
            request.influencer_id
        ),
    }))
}
