//! Mock campaign performance: a campaign summary, per-influencer content
//! metrics and a daily engagement series.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const BUNDLED_PERFORMANCE: &str = include_str!("../../../config/performance.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPerformance {
    pub campaign_name: String,
    pub total_engagements: u64,
    pub conversions: u64,
    /// Whole dollars.
    pub revenue: u64,
    /// Percent.
    pub roi: u64,
    #[serde(default)]
    pub influencers: Vec<InfluencerContent>,
    #[serde(default)]
    pub daily: Vec<DailyMetrics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerContent {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentMetrics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    Video,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Image => write!(f, "image"),
            ContentKind::Video => write!(f, "video"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    pub conversions: u64,
}

impl ContentMetrics {
    /// Likes, comments and shares as a percentage of views, to two decimals.
    /// `None` when the content has no views.
    #[must_use]
    pub fn engagement_rate(&self) -> Option<f64> {
        percent_of(self.likes + self.comments + self.shares, self.views)
    }

    /// Conversions as a percentage of views, to two decimals.
    #[must_use]
    pub fn conversion_rate(&self) -> Option<f64> {
        percent_of(self.conversions, self.views)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub day: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub conversions: u64,
    pub views: u64,
}

/// Feedback left on one piece of campaign content. Nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFeedback {
    pub content_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective: Option<bool>,
    #[serde(default)]
    pub comment: String,
}

impl CampaignPerformance {
    /// Finds a content item and the influencer who posted it.
    #[must_use]
    pub fn find_content(&self, content_id: i64) -> Option<(&InfluencerContent, &ContentMetrics)> {
        self.influencers.iter().find_map(|influencer| {
            influencer
                .content
                .iter()
                .find(|content| content.id == content_id)
                .map(|content| (influencer, content))
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some((part as f64 / whole as f64 * 10_000.0).round() / 100.0)
}

/// The mock campaign compiled into the binary.
///
/// # Errors
///
/// Returns `ConfigError` if the embedded YAML fails to parse or validate.
pub fn bundled_performance() -> Result<CampaignPerformance, ConfigError> {
    parse_performance(BUNDLED_PERFORMANCE)
}

/// Load and validate campaign performance data from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_performance(path: &Path) -> Result<CampaignPerformance, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::PerformanceFileIo {
            path: path.display().to_string(),
            source: e,
        })?;
    parse_performance(&content)
}

fn parse_performance(content: &str) -> Result<CampaignPerformance, ConfigError> {
    let performance: CampaignPerformance =
        serde_yaml::from_str(content).map_err(ConfigError::PerformanceFileParse)?;
    validate_performance(&performance)?;
    Ok(performance)
}

fn validate_performance(performance: &CampaignPerformance) -> Result<(), ConfigError> {
    if performance.campaign_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "campaign name must not be empty".to_string(),
        ));
    }

    let mut seen_content = HashSet::new();
    for influencer in &performance.influencers {
        for content in &influencer.content {
            if !seen_content.insert(content.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate content id: {} ('{}')",
                    content.id, influencer.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(likes: u64, views: u64, conversions: u64) -> ContentMetrics {
        ContentMetrics {
            id: 1,
            kind: ContentKind::Video,
            thumbnail: None,
            likes,
            comments: 0,
            shares: 0,
            views,
            conversions,
        }
    }

    #[test]
    fn bundled_campaign_loads() {
        let performance = bundled_performance().expect("bundled performance");
        assert_eq!(performance.campaign_name, "Summer Collection Launch");
        assert_eq!(performance.total_engagements, 125_750);
        assert_eq!(performance.conversions, 3240);
        assert_eq!(performance.revenue, 52_680);
        assert_eq!(performance.roi, 315);
        assert_eq!(performance.influencers.len(), 2);
        assert_eq!(performance.influencers[0].content.len(), 2);
        assert_eq!(performance.influencers[1].content[0].kind, ContentKind::Video);
        assert_eq!(performance.daily.len(), 6);
        assert_eq!(performance.daily[5].likes, 27_800);
        assert_eq!(performance.daily[5].views, 62_000);
    }

    #[test]
    fn rates_round_to_two_decimals() {
        let performance = bundled_performance().expect("bundled performance");
        let (influencer, alex_video) = performance.find_content(3).expect("content 3");
        assert_eq!(influencer.name, "Alex Chen");
        assert_eq!(alex_video.engagement_rate(), Some(36.41));
        assert_eq!(alex_video.conversion_rate(), Some(0.85));

        let (_, sarah_video) = performance.find_content(2).expect("content 2");
        assert_eq!(sarah_video.engagement_rate(), Some(35.69));
        assert_eq!(sarah_video.conversion_rate(), Some(0.91));
    }

    #[test]
    fn rates_without_views_are_none() {
        let unseen = content(10, 0, 1);
        assert_eq!(unseen.engagement_rate(), None);
        assert_eq!(unseen.conversion_rate(), None);
        assert_eq!(content(1, 4, 1).engagement_rate(), Some(25.0));
    }

    #[test]
    fn unknown_content_is_not_found() {
        let performance = bundled_performance().expect("bundled performance");
        assert!(performance.find_content(99).is_none());
    }

    #[test]
    fn duplicate_content_ids_are_rejected() {
        let yaml = r"
campaignName: Test
totalEngagements: 0
conversions: 0
revenue: 0
roi: 0
influencers:
  - id: 1
    name: One
    content:
      - { id: 7, type: image, likes: 1, comments: 1, shares: 1, views: 10, conversions: 0 }
  - id: 2
    name: Two
    content:
      - { id: 7, type: video, likes: 1, comments: 1, shares: 1, views: 10, conversions: 0 }
";
        let err = parse_performance(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate content id: 7")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn unknown_content_type_is_a_parse_error() {
        let yaml = r"
campaignName: Test
totalEngagements: 0
conversions: 0
revenue: 0
roi: 0
influencers:
  - id: 1
    name: One
    content:
      - { id: 1, type: podcast, likes: 1, comments: 1, shares: 1, views: 10, conversions: 0 }
";
        assert!(matches!(
            parse_performance(yaml),
            Err(ConfigError::PerformanceFileParse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_performance(Path::new("/nonexistent/performance.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::PerformanceFileIo { .. }));
    }
}
