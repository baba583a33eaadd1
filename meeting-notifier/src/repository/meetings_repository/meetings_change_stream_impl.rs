use super::{MeetingChange, MeetingsChangeStream, MeetingsStreamEvent};
use crate::repository;
use async_trait::async_trait;
use bson::Document;
use futures_util::StreamExt;
use mongodb::change_stream::{
    event::{ChangeStreamEvent, OperationType, ResumeToken},
    ChangeStream,
};

pub struct MeetingsChangeStreamImpl {
    inner: ChangeStream<ChangeStreamEvent<Document>>,
}

impl MeetingsChangeStreamImpl {
    pub fn new(inner: ChangeStream<ChangeStreamEvent<Document>>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl MeetingsChangeStream for MeetingsChangeStreamImpl {
    async fn next(&mut self) -> Option<Result<MeetingsStreamEvent, repository::Error>> {
        loop {
            let event = match self.inner.next().await? {
                Ok(event) => event,
                Err(err) => return Some(Err(repository::Error::from_change_stream(err))),
            };

            if let Some(event) = stream_event(event) {
                return Some(Ok(event));
            }
        }
    }

    fn resume_token(&self) -> Option<ResumeToken> {
        self.inner.resume_token()
    }
}

fn stream_event(event: ChangeStreamEvent<Document>) -> Option<MeetingsStreamEvent> {
    if event.operation_type == OperationType::Invalidate {
        return Some(MeetingsStreamEvent::Invalidated(event.id));
    }

    MeetingChange::from_event(event).map(MeetingsStreamEvent::Changed)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{test::resume_token, MeetingChangeKind};
    use bson::doc;

    #[test]
    fn stream_event_invalidate() {
        let event = bson::from_document(doc! {
            "_id": { "_data": "token-1" },
            "operationType": "invalidate",
        })
        .unwrap();

        assert_eq!(
            stream_event(event),
            Some(MeetingsStreamEvent::Invalidated(resume_token("token-1")))
        );
    }

    #[test]
    fn stream_event_insert() {
        let event = bson::from_document(doc! {
            "_id": { "_data": "token-1" },
            "operationType": "insert",
            "documentKey": { "_id": "m1" },
            "fullDocument": { "_id": "m1", "title": "Sync", "users": ["u1"] },
        })
        .unwrap();

        let Some(MeetingsStreamEvent::Changed(change)) = stream_event(event) else {
            panic!("expected meeting change");
        };
        assert_eq!(change.kind, MeetingChangeKind::Created);
        assert_eq!(change.meeting_id, "m1");
        assert!(change.document.is_some());
    }

    #[test]
    fn stream_event_update_skipped() {
        let event = bson::from_document(doc! {
            "_id": { "_data": "token-1" },
            "operationType": "update",
            "documentKey": { "_id": "m1" },
        })
        .unwrap();

        assert_eq!(stream_event(event), None);
    }
}
