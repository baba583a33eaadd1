use crate::Error;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

///
/// Fields of Google service account key file required to authorize FCM requests.
/// Remaining fields of the file are ignored.
///
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,

    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = tokio::fs::read(path).await?;

        Self::from_slice(&content)
    }

    pub fn from_slice(content: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(content)
            .map_err(|err| Error::Credentials(format!("invalid service account key: {err}")))
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}
