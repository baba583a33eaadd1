use bson::Document;
use serde::Deserialize;

///
/// Meeting as seen at the moment of create/delete event
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub user_ids: Vec<String>,
}

#[derive(Deserialize)]
struct MeetingDocument {
    title: Option<String>,
    users: Option<Vec<String>>,
}

impl Meeting {
    ///
    /// Missing `title` becomes empty string,
    /// missing `users` becomes empty list.
    ///
    pub fn from_document(id: String, document: Document) -> Result<Self, bson::de::Error> {
        let MeetingDocument { title, users } = bson::from_document(document)?;

        Ok(Self {
            id,
            title: title.unwrap_or_default(),
            user_ids: users.unwrap_or_default(),
        })
    }
}
