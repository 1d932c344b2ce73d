use std::future::Future;

use chrono::Local;
use outreach_core::{BriefForm, ClientBrief};

use crate::client::OutreachClient;
use crate::error::{ApiError, FlowError};
use crate::session::ActiveBrief;

/// Backend operation used by the brief form.
pub trait BriefApi {
    fn create_brief(
        &self,
        brief: &ClientBrief,
    ) -> impl Future<Output = Result<ClientBrief, ApiError>> + Send;
}

impl BriefApi for OutreachClient {
    fn create_brief(
        &self,
        brief: &ClientBrief,
    ) -> impl Future<Output = Result<ClientBrief, ApiError>> + Send {
        OutreachClient::create_brief(self, brief)
    }
}

/// Validates `form`, submits it, and on success makes the returned brief the
/// active one.
///
/// On failure the active brief is left as it was.
///
/// # Errors
///
/// Returns [`FlowError::InvalidForm`] before any request is made if the form
/// is incomplete, or [`FlowError::Api`] if the backend call fails.
pub async fn submit_brief_form<A: BriefApi>(
    api: &A,
    form: BriefForm,
    store: &ActiveBrief,
) -> Result<ClientBrief, FlowError> {
    form.validate()?;
    let payload = form.into_payload(Local::now());
    tracing::info!(brief_id = payload.id, client = %payload.name, "submitting brief");

    let created = api.create_brief(&payload).await?;
    store.set(created.clone());
    Ok(created)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use outreach_core::BriefKind;

    use super::*;

    struct RecordingApi {
        fail: bool,
        sent: Mutex<Vec<ClientBrief>>,
    }

    impl RecordingApi {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl BriefApi for RecordingApi {
        fn create_brief(
            &self,
            brief: &ClientBrief,
        ) -> impl Future<Output = Result<ClientBrief, ApiError>> + Send {
            self.sent.lock().unwrap().push(brief.clone());
            let result = if self.fail {
                Err(ApiError::Status {
                    endpoint: "/briefs".to_string(),
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                })
            } else {
                Ok(brief.clone())
            };
            std::future::ready(result)
        }
    }

    fn form() -> BriefForm {
        BriefForm {
            client_name: "Peak Outdoors".to_string(),
            product_service: "Travel".to_string(),
            target_audience: "Millennials".to_string(),
            campaign_goal: "Drive summer trip bookings".to_string(),
            influencer_type: "Adventure travel creators".to_string(),
        }
    }

    #[tokio::test]
    async fn success_sets_active_brief() {
        let api = RecordingApi::new(false);
        let store = ActiveBrief::new();

        let created = submit_brief_form(&api, form(), &store).await.expect("created");
        assert_eq!(created.kind, BriefKind::Generated);
        assert_eq!(created.client_name.as_deref(), Some("Peak Outdoors"));
        assert_eq!(store.current(), Some(created));
    }

    #[tokio::test]
    async fn api_failure_leaves_active_brief_untouched() {
        let api = RecordingApi::new(true);
        let store = ActiveBrief::new();
        let previous = ClientBrief::uploaded(Local::now());
        store.set(previous.clone());

        let result = submit_brief_form(&api, form(), &store).await;
        assert!(matches!(result, Err(FlowError::Api(ApiError::Status { .. }))));
        assert_eq!(store.current(), Some(previous));
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let api = RecordingApi::new(false);
        let store = ActiveBrief::new();
        let incomplete = BriefForm {
            influencer_type: String::new(),
            ..form()
        };

        let result = submit_brief_form(&api, incomplete, &store).await;
        assert!(matches!(result, Err(FlowError::InvalidForm(_))));
        assert!(api.sent.lock().unwrap().is_empty());
        assert!(store.current().is_none());
    }
}
