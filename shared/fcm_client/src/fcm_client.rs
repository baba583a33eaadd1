use crate::{
    access_token_provider::AccessTokenProvider,
    dto::{ErrorResponse, FcmClientConfig, Message, Notification, SendRequest, SendResponse},
    Error, ServiceAccountKey,
};
use std::sync::Arc;

///
/// Firebase Cloud Messaging HTTP v1 client.
///
/// Clones share underlying HTTP connection pool and cached access token.
///
#[derive(Clone)]
pub struct FcmClient {
    inner: Arc<FcmClientInner>,
}

struct FcmClientInner {
    http_client: reqwest::Client,
    send_url: String,
    access_token_provider: AccessTokenProvider,
}

impl FcmClient {
    pub fn new(
        config: FcmClientConfig,
        service_account_key: ServiceAccountKey,
    ) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let send_url = format!(
            "{}/v1/projects/{}/messages:send",
            config.base_url.trim_end_matches('/'),
            service_account_key.project_id,
        );
        let access_token_provider =
            AccessTokenProvider::new(http_client.clone(), service_account_key)?;

        Ok(Self {
            inner: Arc::new(FcmClientInner {
                http_client,
                send_url,
                access_token_provider,
            }),
        })
    }

    ///
    /// Sends notification to a single device
    ///
    /// ### Returns
    /// Name of the message assigned by FCM
    ///
    /// ### Errors
    /// - [Error::Rejected] when FCM refused the message (e.g. token is no longer registered)
    ///
    #[tracing::instrument(name = "FCM Send", target = "fcm_client", skip_all)]
    pub async fn send(&self, token: &str, notification: &Notification) -> Result<String, Error> {
        let access_token = self.inner.access_token_provider.access_token().await?;

        let request = SendRequest {
            message: Message {
                token,
                notification,
            },
        };

        tracing::trace!("sending message");
        let response = self
            .inner
            .http_client
            .post(&self.inner.send_url)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            let (code, message) = match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(ErrorResponse { error }) => (error.code(), error.message),
                Err(_) => (None, String::from_utf8_lossy(&bytes).into_owned()),
            };

            return Err(Error::Rejected {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let SendResponse { name } = response.json().await?;
        tracing::debug!(name, "message accepted");

        Ok(name)
    }
}
