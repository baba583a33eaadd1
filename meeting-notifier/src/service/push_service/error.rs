#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("fcm error: {0}")]
    Fcm(#[from] fcm_client::Error),
}
