//! Remote-first influencer data with a bundled fallback.
//!
//! [`InfluencerSource`] asks the backend first and quietly serves the bundled
//! sample roster when the backend fails, so callers never branch on which
//! source answered. [`Resolved::origin`] records it for display.

use std::future::Future;

use outreach_core::{filter_influencers, Influencer, InfluencerFilter, SearchRequest};

use crate::client::OutreachClient;
use crate::error::ApiError;

/// Remote influencer operations the source resolves against.
pub trait InfluencerApi {
    fn list_influencers(&self) -> impl Future<Output = Result<Vec<Influencer>, ApiError>> + Send;

    fn search_influencers(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<Influencer>, ApiError>> + Send;
}

impl InfluencerApi for OutreachClient {
    fn list_influencers(&self) -> impl Future<Output = Result<Vec<Influencer>, ApiError>> + Send {
        OutreachClient::list_influencers(self)
    }

    fn search_influencers(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<Influencer>, ApiError>> + Send {
        OutreachClient::search_influencers(self, request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Bundled,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Remote => write!(f, "backend"),
            Origin::Bundled => write!(f, "bundled sample data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub influencers: Vec<Influencer>,
    pub origin: Origin,
}

/// Influencer data resolved remote-first with a local default.
///
/// With no remote configured (offline mode) every call is served from the
/// bundled roster.
#[derive(Debug, Clone)]
pub struct InfluencerSource<A> {
    remote: Option<A>,
    bundled: Vec<Influencer>,
    default_limit: u32,
}

impl<A: InfluencerApi> InfluencerSource<A> {
    pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

    pub fn new(remote: A, bundled: Vec<Influencer>) -> Self {
        Self {
            remote: Some(remote),
            bundled,
            default_limit: Self::DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn offline(bundled: Vec<Influencer>) -> Self {
        Self {
            remote: None,
            bundled,
            default_limit: Self::DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Limit applied to fallback searches that do not specify one.
    #[must_use]
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// All influencers.
    pub async fn list(&self) -> Resolved {
        if let Some(remote) = &self.remote {
            match remote.list_influencers().await {
                Ok(influencers) => {
                    return Resolved {
                        influencers,
                        origin: Origin::Remote,
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "influencer list unavailable; serving bundled roster");
                }
            }
        }

        Resolved {
            influencers: self.bundled.clone(),
            origin: Origin::Bundled,
        }
    }

    /// Influencers matching `query`, at most `limit` of them.
    ///
    /// The fallback matches `query` against name, username and niche of the
    /// bundled roster.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Resolved {
        let request = SearchRequest {
            query: query.to_string(),
            limit,
        };

        if let Some(remote) = &self.remote {
            match remote.search_influencers(&request).await {
                Ok(influencers) => {
                    return Resolved {
                        influencers,
                        origin: Origin::Remote,
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, query, "influencer search unavailable; searching bundled roster");
                }
            }
        }

        let limit = usize::try_from(limit.unwrap_or(self.default_limit)).unwrap_or(usize::MAX);
        let mut influencers =
            filter_influencers(&self.bundled, &InfluencerFilter::with_term(query));
        influencers.truncate(limit);

        Resolved {
            influencers,
            origin: Origin::Bundled,
        }
    }

    /// Looks up one influencer by id in whichever source answers [`Self::list`].
    pub async fn find(&self, id: i64) -> Option<Influencer> {
        self.list()
            .await
            .influencers
            .into_iter()
            .find(|influencer| influencer.id == id)
    }
}
