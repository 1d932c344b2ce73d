//! Influencer search and filter predicate.
//!
//! Every constraint is optional. An inactive constraint never inspects its
//! field; an active constraint excludes candidates whose field is missing or
//! has no parseable number.

use crate::influencer::{Influencer, Platform};

/// Platform constraint: everything, or one platform name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(String),
}

impl From<Platform> for PlatformFilter {
    fn from(platform: Platform) -> Self {
        PlatformFilter::Only(platform.as_str().to_string())
    }
}

impl std::str::FromStr for PlatformFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(PlatformFilter::All);
        }
        s.parse::<Platform>().map(PlatformFilter::from)
    }
}

/// Filter state for the influencer list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfluencerFilter {
    /// Case-insensitive substring of name, username or niche. Empty is inactive.
    pub term: String,
    pub platform: PlatformFilter,
    /// Minimum followers, in thousands.
    pub min_followers_k: Option<f64>,
    /// Minimum engagement, in percent.
    pub min_engagement: Option<f64>,
    /// Case-insensitive substring of location. Empty is inactive.
    pub location: String,
}

impl InfluencerFilter {
    /// A filter that only matches on the free-text term.
    #[must_use]
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
            && self.platform == PlatformFilter::All
            && self.min_followers_k.is_none()
            && self.min_engagement.is_none()
            && self.location.is_empty()
    }

    /// Returns `true` if `influencer` passes every active constraint.
    #[must_use]
    pub fn matches(&self, influencer: &Influencer) -> bool {
        self.matches_term(influencer)
            && self.matches_platform(influencer)
            && self.matches_followers(influencer)
            && self.matches_engagement(influencer)
            && self.matches_location(influencer)
    }

    fn matches_term(&self, influencer: &Influencer) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let needle = self.term.to_lowercase();
        [
            Some(influencer.name.as_str()),
            influencer.username.as_deref(),
            influencer.niche.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_platform(&self, influencer: &Influencer) -> bool {
        match &self.platform {
            PlatformFilter::All => true,
            PlatformFilter::Only(platform) => influencer.platform == *platform,
        }
    }

    fn matches_followers(&self, influencer: &Influencer) -> bool {
        let Some(min_k) = self.min_followers_k else {
            return true;
        };
        influencer
            .follower_total()
            .is_some_and(|total| total >= min_k * 1_000.0)
    }

    fn matches_engagement(&self, influencer: &Influencer) -> bool {
        let Some(min) = self.min_engagement else {
            return true;
        };
        influencer
            .engagement_percent()
            .is_some_and(|rate| rate >= min)
    }

    fn matches_location(&self, influencer: &Influencer) -> bool {
        if self.location.is_empty() {
            return true;
        }
        let needle = self.location.to_lowercase();
        influencer
            .location
            .as_deref()
            .is_some_and(|location| location.to_lowercase().contains(&needle))
    }
}

/// Returns the influencers that pass `filter`, preserving input order.
#[must_use]
pub fn filter_influencers(influencers: &[Influencer], filter: &InfluencerFilter) -> Vec<Influencer> {
    influencers
        .iter()
        .filter(|influencer| filter.matches(influencer))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
