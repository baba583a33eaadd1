use bson::{Bson, Document};
use mongodb::change_stream::event::{ChangeStreamEvent, OperationType};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MeetingChangeKind {
    Created,
    Deleted,
}

///
/// Meeting document that was inserted or deleted
///
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingChange {
    pub kind: MeetingChangeKind,
    pub meeting_id: String,

    /// Inserted document or pre-image of deleted document.
    /// Pre-image is `None` when database did not retain it.
    pub document: Option<Document>,
}

impl MeetingChange {
    ///
    /// Returns `None` for operations other than insert and delete
    ///
    pub fn from_event(event: ChangeStreamEvent<Document>) -> Option<Self> {
        let kind = match event.operation_type {
            OperationType::Insert => MeetingChangeKind::Created,
            OperationType::Delete => MeetingChangeKind::Deleted,
            _ => return None,
        };

        let meeting_id = event
            .document_key
            .as_ref()
            .and_then(|key| key.get("_id"))
            .map(id_to_string)
            .unwrap_or_default();

        let document = match kind {
            MeetingChangeKind::Created => event.full_document,
            MeetingChangeKind::Deleted => event.full_document_before_change,
        };

        Some(Self {
            kind,
            meeting_id,
            document,
        })
    }
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::String(id) => id.clone(),
        Bson::ObjectId(id) => id.to_hex(),
        id => id.to_string(),
    }
}
