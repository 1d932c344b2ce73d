use serde::{Deserialize, Serialize};

use crate::parse::leading_float;

/// Platforms the dashboard knows how to badge and filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Youtube,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Youtube, Platform::Twitter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Platform::Instagram),
            "youtube" => Ok(Platform::Youtube),
            "twitter" => Ok(Platform::Twitter),
            other => Err(format!(
                "unknown platform '{other}'; expected one of instagram, youtube, twitter"
            )),
        }
    }
}

/// Follower count as sent by the backend: either a raw number or a display
/// label such as `"1.2M"` or `"850K"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FollowerCount {
    Count(u64),
    Label(String),
}

impl FollowerCount {
    /// Absolute follower count.
    ///
    /// Labels are read by their leading number and scaled by 1,000,000 when
    /// they contain `M`, by 1,000 otherwise. Returns `None` for labels with no
    /// leading number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total(&self) -> Option<f64> {
        match self {
            FollowerCount::Count(n) => Some(*n as f64),
            FollowerCount::Label(label) => {
                let scale = if label.contains('M') {
                    1_000_000.0
                } else {
                    1_000.0
                };
                leading_float(label).map(|value| value * scale)
            }
        }
    }
}

impl std::fmt::Display for FollowerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowerCount::Count(n) => write!(f, "{n}"),
            FollowerCount::Label(label) => f.write_str(label),
        }
    }
}

/// An influencer record as exchanged with the backend.
///
/// The lead-tracking fields (`email` through `contract_comments`) are only
/// populated by the backend's lead table; the bundled roster leaves them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub followers: FollowerCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearts: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    /// Platform name as sent by the backend. Usually one of [`Platform`], but
    /// scraped leads may carry others (e.g. `tiktok`).
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_shares: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_plays: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_comments: Option<u64>,
}

impl Influencer {
    /// Absolute follower count, see [`FollowerCount::total`].
    #[must_use]
    pub fn follower_total(&self) -> Option<f64> {
        self.followers.total()
    }

    /// Engagement rate as a percentage (`"3.8%"` is `3.8`).
    #[must_use]
    pub fn engagement_percent(&self) -> Option<f64> {
        self.engagement_rate.as_deref().and_then(leading_float)
    }

    /// The platform as a known [`Platform`], if it is one.
    #[must_use]
    pub fn known_platform(&self) -> Option<Platform> {
        self.platform.parse().ok()
    }
}
