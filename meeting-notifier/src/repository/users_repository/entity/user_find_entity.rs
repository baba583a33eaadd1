use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    #[serde(rename = "fcmToken")]
    pub fcm_token: Option<String>,
}
