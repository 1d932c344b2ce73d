//! Client side of the influencer outreach dashboard: the REST client, the
//! remote-first data source, the active-brief store and the brief flows.

pub mod client;
pub mod error;
pub mod flow;
pub mod session;
pub mod source;
pub mod upload;

pub use client::{OutreachClient, DEFAULT_BASE_URL};
pub use error::{ApiError, FlowError};
pub use flow::{submit_brief_form, BriefApi};
pub use session::ActiveBrief;
pub use source::{InfluencerApi, InfluencerSource, Origin, Resolved};
pub use upload::UploadTask;
