use crate::{
    dto::{AccessTokenResponse, JwtClaims},
    Error, ServiceAccountKey,
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::Mutex;

const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFESPAN: Duration = Duration::from_secs(3600);
const REFRESH_MARGIN: Duration = Duration::from_secs(60);
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 3600);

struct AccessToken {
    value: String,
    expire_at: OffsetDateTime,
}

///
/// Exchanges service account assertions for OAuth2 access tokens.
/// Token is cached and reused until it is about to expire.
///
pub struct AccessTokenProvider {
    http_client: reqwest::Client,
    service_account_key: ServiceAccountKey,
    encoding_key: EncodingKey,

    cached: Mutex<Option<AccessToken>>,
}

impl AccessTokenProvider {
    pub fn new(
        http_client: reqwest::Client,
        service_account_key: ServiceAccountKey,
    ) -> Result<Self, Error> {
        let encoding_key = EncodingKey::from_rsa_pem(service_account_key.private_key.as_bytes())
            .map_err(|err| Error::Credentials(format!("invalid private key: {err}")))?;

        Ok(Self {
            http_client,
            service_account_key,
            encoding_key,
            cached: Mutex::new(None),
        })
    }

    pub async fn access_token(&self) -> Result<String, Error> {
        // Lock is held while fetching so concurrent callers wait for one refresh
        let mut cached = self.cached.lock().await;

        let now = OffsetDateTime::now_utc();
        if let Some(token) = cached.as_ref() {
            if token.expire_at - REFRESH_MARGIN > now {
                return Ok(token.value.clone());
            }
        }

        let token = self.fetch(now).await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }

    #[tracing::instrument(name = "FCM Access Token", target = "fcm_client", skip_all)]
    async fn fetch(&self, now: OffsetDateTime) -> Result<AccessToken, Error> {
        tracing::debug!("fetching access token");

        let claims = JwtClaims {
            iss: &self.service_account_key.client_email,
            scope: FCM_SCOPE,
            aud: &self.service_account_key.token_uri,
            iat: now.unix_timestamp(),
            exp: (now + ASSERTION_LIFESPAN).unix_timestamp(),
        };
        let assertion =
            jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;

        let response = self
            .http_client
            .post(&self.service_account_key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Credentials(format!(
                "token endpoint responded with {status}: {body}"
            )));
        }

        let AccessTokenResponse {
            access_token,
            expires_in,
        } = response.json().await?;

        tracing::debug!(expires_in, "fetched access token");

        // Lifetime reported by the endpoint is capped so `expire_at` can't overflow
        let lifetime = Duration::from_secs(expires_in).min(MAX_TOKEN_LIFETIME);

        Ok(AccessToken {
            value: access_token,
            expire_at: now + lifetime,
        })
    }
}
