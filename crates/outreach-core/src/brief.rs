use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Options offered for the product/service field of the brief form.
pub const PRODUCT_SERVICES: &[&str] = &[
    "Fashion",
    "Beauty",
    "Tech",
    "Food",
    "Fitness",
    "Travel",
    "Lifestyle",
];

/// Options offered for the target audience field of the brief form.
pub const TARGET_AUDIENCES: &[&str] = &[
    "Gen Z",
    "Millennials",
    "Gen X",
    "Boomers",
    "Parents",
    "Professionals",
];

const UPLOADED_BRIEF_NAME: &str = "Uploaded Brief";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BriefKind {
    Upload,
    Generated,
}

impl std::fmt::Display for BriefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BriefKind::Upload => write!(f, "upload"),
            BriefKind::Generated => write!(f, "generated"),
        }
    }
}

/// A campaign brief.
///
/// Uploaded briefs carry only the bookkeeping fields; generated briefs carry
/// all five campaign fields as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBrief {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BriefKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influencer_type: Option<String>,
    pub date: String,
}

impl ClientBrief {
    /// Fabricates the brief recorded once a simulated upload completes.
    #[must_use]
    pub fn uploaded(now: DateTime<Local>) -> Self {
        Self {
            id: now.timestamp_millis(),
            name: UPLOADED_BRIEF_NAME.to_string(),
            kind: BriefKind::Upload,
            client_name: None,
            product_service: None,
            target_audience: None,
            campaign_goal: None,
            influencer_type: None,
            date: display_date(now),
        }
    }
}

/// The structured brief form. All five fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefForm {
    pub client_name: String,
    pub product_service: String,
    pub target_audience: String,
    pub campaign_goal: String,
    pub influencer_type: String,
}

impl BriefForm {
    /// Checks that every field is filled in and that the select fields hold
    /// one of their listed options.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] for a blank field or
    /// [`CoreError::InvalidOption`] for an unlisted select value.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("clientName", &self.client_name),
            ("productService", &self.product_service),
            ("targetAudience", &self.target_audience),
            ("campaignGoal", &self.campaign_goal),
            ("influencerType", &self.influencer_type),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(name));
            }
        }

        check_option("productService", &self.product_service, PRODUCT_SERVICES)?;
        check_option("targetAudience", &self.target_audience, TARGET_AUDIENCES)?;
        Ok(())
    }

    /// Assembles the payload posted to the brief-creation endpoint.
    #[must_use]
    pub fn into_payload(self, now: DateTime<Local>) -> ClientBrief {
        ClientBrief {
            id: now.timestamp_millis(),
            name: self.client_name.clone(),
            kind: BriefKind::Generated,
            client_name: Some(self.client_name),
            product_service: Some(self.product_service),
            target_audience: Some(self.target_audience),
            campaign_goal: Some(self.campaign_goal),
            influencer_type: Some(self.influencer_type),
            date: display_date(now),
        }
    }
}

fn check_option(field: &'static str, value: &str, options: &[&str]) -> Result<(), CoreError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidOption {
            field,
            value: value.to_string(),
        })
    }
}

/// Short `M/D/YYYY` date used on briefs.
fn display_date(now: DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}
