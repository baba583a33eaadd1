use serde::Deserialize;

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseBody,
}

#[derive(Deserialize)]
pub struct ErrorResponseBody {
    #[serde(default)]
    pub message: String,

    pub status: Option<String>,

    #[serde(default)]
    pub details: Vec<ErrorResponseDetail>,
}

#[derive(Deserialize)]
pub struct ErrorResponseDetail {
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
}

impl ErrorResponseBody {
    ///
    /// FCM specific error code takes precedence over generic status
    ///
    pub fn code(&self) -> Option<String> {
        self.details
            .iter()
            .find_map(|detail| detail.error_code.clone())
            .or_else(|| self.status.clone())
    }
}
