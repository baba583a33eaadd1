use anyhow::anyhow;
use std::{path::PathBuf, time::Duration};

const DEFAULT_MEETINGS_COLLECTION: &str = "meetings";
const DEFAULT_USERS_COLLECTION: &str = "users";
const DEFAULT_FCM_BASE_URL: &str = "https://fcm.googleapis.com";

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub db_connection_string: String,
    pub db_name: String,
    pub meetings_collection: String,
    pub users_collection: String,

    /// Path to Google service account key file (JSON)
    pub fcm_service_account_key_path: PathBuf,
    pub fcm_base_url: String,
    pub fcm_request_timeout: Duration,

    pub watch_retry_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MEETING_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MEETING_NOTIFIER_LOG_FILENAME")?;
        let db_connection_string = Self::env_var("MEETING_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("MEETING_NOTIFIER_DB_NAME")?;
        let meetings_collection = Self::env_var_or(
            "MEETING_NOTIFIER_MEETINGS_COLLECTION",
            DEFAULT_MEETINGS_COLLECTION,
        );
        let users_collection =
            Self::env_var_or("MEETING_NOTIFIER_USERS_COLLECTION", DEFAULT_USERS_COLLECTION);
        let fcm_service_account_key_path =
            Self::env_var("MEETING_NOTIFIER_FCM_SERVICE_ACCOUNT_KEY_PATH")?.into();
        let fcm_base_url = Self::env_var_or("MEETING_NOTIFIER_FCM_BASE_URL", DEFAULT_FCM_BASE_URL);
        let fcm_request_timeout =
            Self::env_var("MEETING_NOTIFIER_FCM_REQUEST_TIMEOUT")?.parse()?;
        let fcm_request_timeout = Duration::from_secs(fcm_request_timeout);
        let watch_retry_interval =
            Self::env_var("MEETING_NOTIFIER_WATCH_RETRY_INTERVAL")?.parse()?;
        let watch_retry_interval = Duration::from_secs(watch_retry_interval);

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            db_name,
            meetings_collection,
            users_collection,
            fcm_service_account_key_path,
            fcm_base_url,
            fcm_request_timeout,
            watch_retry_interval,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
}
