use serde::{Deserialize, Serialize};

use crate::influencer::Influencer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub influencer_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Default outreach message for `influencer`.
#[must_use]
pub fn contact_message(influencer: &Influencer) -> String {
    let niche = influencer.niche.as_deref().unwrap_or("creator");
    format!(
        "Hi {name},\n\n\
         I'm reaching out because I think you'd be a great fit for our upcoming campaign. \
         We're looking for influencers in the {niche} space, and your content really \
         resonates with our brand vision.\n\n\
         Would you be interested in discussing a potential collaboration?\n\n\
         Looking forward to your response,\n\
         [Your Name]",
        name = influencer.name,
    )
}
