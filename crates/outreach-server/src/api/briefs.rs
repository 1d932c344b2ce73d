//! POST /api/briefs: echoes a brief with server defaults filled in.

use axum::Json;
use chrono::Utc;
use outreach_core::BriefKind;
use serde::{Deserialize, Serialize};

const UNNAMED_BRIEF: &str = "Unnamed Brief";

/// A partial brief as posted by clients; every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BriefDraft {
    id: Option<i64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    client_name: Option<String>,
    product_service: Option<String>,
    target_audience: Option<String>,
    campaign_goal: Option<String>,
    influencer_type: Option<String>,
    date: Option<String>,
}

/// The echoed brief. `type` is passed through as sent, so values other than
/// `upload` and `generated` survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BriefRecord {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    client_name: String,
    product_service: String,
    target_audience: String,
    campaign_goal: String,
    influencer_type: String,
    date: String,
}

impl BriefDraft {
    fn complete(self, now_millis: i64) -> BriefRecord {
        BriefRecord {
            id: self.id.filter(|id| *id != 0).unwrap_or(now_millis),
            name: self
                .client_name
                .clone()
                .unwrap_or_else(|| UNNAMED_BRIEF.to_string()),
            kind: self
                .kind
                .unwrap_or_else(|| BriefKind::Generated.to_string()),
            client_name: self.client_name.unwrap_or_default(),
            product_service: self.product_service.unwrap_or_default(),
            target_audience: self.target_audience.unwrap_or_default(),
            campaign_goal: self.campaign_goal.unwrap_or_default(),
            influencer_type: self.influencer_type.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
        }
    }
}

pub(super) async fn create_brief(Json(draft): Json<BriefDraft>) -> Json<BriefRecord> {
    let brief = draft.complete(Utc::now().timestamp_millis());
    tracing::info!(brief_id = brief.id, name = %brief.name, kind = %brief.kind, "brief created");
    Json(brief)
}
