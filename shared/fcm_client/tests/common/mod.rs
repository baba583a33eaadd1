use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use fcm_client::{FcmClient, FcmClientConfig, ServiceAccountKey};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

pub const PROJECT_ID: &str = "meetings-app";
pub const CLIENT_EMAIL: &str = "notifier@meetings-app.iam.gserviceaccount.com";
pub const PRIVATE_KEY: &str = include_str!("../fixtures/test_private_key.pem");
pub const PUBLIC_KEY: &str = include_str!("../fixtures/test_public_key.pem");

pub struct SentMessage {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct Recorded {
    pub assertions: Vec<String>,
    pub messages: Vec<SentMessage>,
}

///
/// In-process stand-in for Google OAuth2 token endpoint and FCM send endpoint
///
#[derive(Clone)]
pub struct FakeFcm {
    pub address: SocketAddr,
    pub recorded: Arc<Mutex<Recorded>>,
}

#[derive(Clone)]
struct FakeFcmState {
    recorded: Arc<Mutex<Recorded>>,
    token_expires_in: u64,
    token_status: StatusCode,
    send_rejection: Option<(StatusCode, Value)>,
}

pub struct FakeFcmBuilder {
    token_expires_in: u64,
    token_status: StatusCode,
    send_rejection: Option<(StatusCode, Value)>,
}

impl FakeFcm {
    pub fn builder() -> FakeFcmBuilder {
        FakeFcmBuilder {
            token_expires_in: 3600,
            token_status: StatusCode::OK,
            send_rejection: None,
        }
    }

    pub fn service_account_key(&self) -> ServiceAccountKey {
        ServiceAccountKey {
            project_id: PROJECT_ID.to_string(),
            client_email: CLIENT_EMAIL.to_string(),
            private_key: PRIVATE_KEY.to_string(),
            token_uri: self.token_uri(),
        }
    }

    pub fn token_uri(&self) -> String {
        format!("http://{}/token", self.address)
    }

    pub fn client(&self) -> FcmClient {
        let config = FcmClientConfig {
            base_url: format!("http://{}", self.address),
            request_timeout: Duration::from_secs(5),
        };

        FcmClient::new(config, self.service_account_key()).unwrap()
    }
}

impl FakeFcmBuilder {
    pub fn token_expires_in(mut self, seconds: u64) -> Self {
        self.token_expires_in = seconds;
        self
    }

    pub fn token_status(mut self, status: StatusCode) -> Self {
        self.token_status = status;
        self
    }

    pub fn send_rejection(mut self, status: StatusCode, body: Value) -> Self {
        self.send_rejection = Some((status, body));
        self
    }

    pub async fn start(self) -> FakeFcm {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = FakeFcmState {
            recorded: Arc::clone(&recorded),
            token_expires_in: self.token_expires_in,
            token_status: self.token_status,
            send_rejection: self.send_rejection,
        };

        let app = Router::new()
            .route("/token", post(token))
            .fallback(send)
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeFcm { address, recorded }
    }
}

async fn token(
    State(state): State<FakeFcmState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let count = {
        let mut recorded = state.recorded.lock().unwrap();
        if let Some(assertion) = form.get("assertion") {
            recorded.assertions.push(assertion.clone());
        }
        recorded.assertions.len()
    };

    if state.token_status != StatusCode::OK {
        return (state.token_status, "invalid_grant").into_response();
    }

    Json(json!({
        "access_token": format!("test-access-token-{count}"),
        "expires_in": state.token_expires_in,
        "token_type": "Bearer",
    }))
    .into_response()
}

async fn send(
    State(state): State<FakeFcmState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let count = {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.messages.push(SentMessage {
            path: uri.path().to_string(),
            authorization: headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body,
        });
        recorded.messages.len()
    };

    if let Some((status, body)) = state.send_rejection {
        return (status, Json(body)).into_response();
    }

    Json(json!({
        "name": format!("projects/{PROJECT_ID}/messages/{count}"),
    }))
    .into_response()
}
