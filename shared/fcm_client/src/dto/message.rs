use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

#[derive(Serialize)]
pub struct SendRequest<'a> {
    pub message: Message<'a>,
}

#[derive(Serialize)]
pub struct Message<'a> {
    pub token: &'a str,
    pub notification: &'a Notification,
}

#[derive(Deserialize)]
pub struct SendResponse {
    pub name: String,
}
