use outreach_client::{ActiveBrief, InfluencerSource, OutreachClient};
use outreach_core::AppConfig;

/// Everything a command needs, built once in `main` and passed down.
pub(crate) struct AppContext {
    pub(crate) config: AppConfig,
    pub(crate) client: OutreachClient,
    pub(crate) source: InfluencerSource<OutreachClient>,
    pub(crate) active_brief: ActiveBrief,
    pub(crate) offline: bool,
}

impl AppContext {
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded or the API base URL is
    /// invalid.
    pub(crate) fn new(config: AppConfig, offline: bool) -> anyhow::Result<Self> {
        let roster = match &config.roster_path {
            Some(path) => outreach_core::load_roster(path)?,
            None => outreach_core::bundled_roster()?,
        };
        let client = OutreachClient::new(&config.api_url)?;

        let source = if offline {
            InfluencerSource::offline(roster)
        } else {
            InfluencerSource::new(client.clone(), roster)
        }
        .with_default_limit(config.search_limit);

        tracing::debug!(api_url = %client.base_url(), offline, "application context ready");

        Ok(Self {
            config,
            client,
            source,
            active_brief: ActiveBrief::new(),
            offline,
        })
    }
}
