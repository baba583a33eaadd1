use super::{MeetingsChangeStream, MeetingsChangeStreamImpl, MeetingsRepository, WatchPosition};
use crate::repository;
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::{ChangeStreamOptions, FullDocumentBeforeChangeType};
use mongodb::Database;

pub struct MeetingsRepositoryImpl {
    database: Database,
    collection_name: String,
}

impl MeetingsRepositoryImpl {
    ///
    /// Makes sure collection exists and keeps pre-images of deleted documents,
    /// so delete events carry meeting data.
    ///
    pub async fn new(
        database: Database,
        collection_name: &str,
    ) -> Result<Self, mongodb::error::Error> {
        tracing::debug!("fetching collection names");
        let collection_names = database.list_collection_names().await?;

        if !collection_names.iter().any(|name| name == collection_name) {
            tracing::debug!(collection = collection_name, "creating collection");
            database.create_collection(collection_name).await?;
        }

        database
            .run_command(doc! {
                "collMod": collection_name,
                "changeStreamPreAndPostImages": {
                    "enabled": true,
                },
            })
            .await?;
        tracing::debug!(collection = collection_name, "enabled pre-images");

        Ok(Self {
            database,
            collection_name: collection_name.to_string(),
        })
    }
}

#[async_trait]
impl MeetingsRepository for MeetingsRepositoryImpl {
    async fn watch(
        &self,
        position: WatchPosition,
    ) -> Result<Box<dyn MeetingsChangeStream>, repository::Error> {
        let (resume_after, start_after) = match position {
            WatchPosition::Now => (None, None),
            WatchPosition::ResumeAfter(resume_token) => (Some(resume_token), None),
            WatchPosition::StartAfter(resume_token) => (None, Some(resume_token)),
        };

        let options = ChangeStreamOptions::builder()
            .full_document_before_change(FullDocumentBeforeChangeType::WhenAvailable)
            .resume_after(resume_after)
            .start_after(start_after)
            .build();

        let change_stream = self
            .database
            .collection::<Document>(&self.collection_name)
            .watch()
            .pipeline([doc! {
                "$match": {
                    "operationType": { "$in": ["insert", "delete", "invalidate"] },
                },
            }])
            .with_options(options)
            .await
            .map_err(repository::Error::from_change_stream)?;

        Ok(Box::new(MeetingsChangeStreamImpl::new(change_stream)))
    }
}
