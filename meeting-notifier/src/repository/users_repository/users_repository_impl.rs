use super::{entity::UserFindEntity, UsersRepository};
use crate::repository;
use async_trait::async_trait;
use bson::doc;
use mongodb::{Collection, Database};

pub struct UsersRepositoryImpl {
    collection: Collection<UserFindEntity>,
}

impl UsersRepositoryImpl {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        let collection = database.collection::<UserFindEntity>(collection_name);

        Self { collection }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_fcm_token(&self, user_id: &str) -> Result<Option<String>, repository::Error> {
        let token = self
            .collection
            .find_one(doc! {
                "_id": user_id,
            })
            .projection(doc! {
                "_id": 0,
                "fcmToken": 1,
            })
            .await?
            .and_then(|entity| entity.fcm_token)
            .filter(|token| !token.is_empty());

        Ok(token)
    }
}
