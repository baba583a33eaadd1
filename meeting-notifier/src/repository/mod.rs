mod error;
mod meetings_repository;
mod users_repository;

pub use error::*;
pub use meetings_repository::*;
pub use users_repository::*;

#[cfg(test)]
pub mod test {
    use bson::{doc, Bson};
    use mongodb::{change_stream::event::ResumeToken, options::ClientOptions, Client, Database};
    use uuid::Uuid;

    pub async fn create_test_database() -> Database {
        let _ = dotenvy::dotenv();
        let db_connection_string =
            std::env::var("MEETING_NOTIFIER_DB_CONNECTION_STRING").unwrap();
        let db_name = format!("test_{}", Uuid::new_v4());

        println!("creating test database: {db_name}");

        let db_client_options = ClientOptions::parse(db_connection_string).await.unwrap();
        let db_client = Client::with_options(db_client_options).unwrap();

        db_client.database(&db_name)
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }

    pub fn resume_token(data: &str) -> ResumeToken {
        bson::from_bson(Bson::Document(doc! { "_data": data })).unwrap()
    }
}
