use super::ApplicationEnv;
use crate::{
    repository::{MeetingsRepositoryImpl, UsersRepositoryImpl},
    service::{
        meeting_handlers::{MeetingCreatedHandler, MeetingDeletedHandler},
        meetings_watcher_service::{MeetingsWatcherService, MeetingsWatcherServiceConfig},
        notifier_service::NotifierServiceImpl,
        push_service::FcmPushService,
    },
};
use fcm_client::{FcmClient, FcmClientConfig, ServiceAccountKey};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

///
/// Clients and services created once per process.
/// Everything that handles meeting events receives them from here.
///
pub struct ApplicationState {
    pub db_client: Client,
    pub meetings_watcher_service: MeetingsWatcherService,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(&db, &env.users_collection);
    let users_repository = Arc::new(users_repository);

    let meetings_repository = MeetingsRepositoryImpl::new(db, &env.meetings_collection).await?;
    let meetings_repository = Arc::new(meetings_repository);

    tracing::info!("creating fcm client");
    let service_account_key =
        ServiceAccountKey::from_file(&env.fcm_service_account_key_path).await?;
    let config = FcmClientConfig {
        base_url: env.fcm_base_url.clone(),
        request_timeout: env.fcm_request_timeout,
    };
    let fcm_client = FcmClient::new(config, service_account_key)?;

    tracing::info!("creating services");
    let push_service = FcmPushService::new(fcm_client);
    let push_service = Arc::new(push_service);

    let notifier_service = NotifierServiceImpl::new(users_repository, push_service);
    let notifier_service = Arc::new(notifier_service);

    let created_handler = MeetingCreatedHandler::new(notifier_service.clone());
    let created_handler = Arc::new(created_handler);

    let deleted_handler = MeetingDeletedHandler::new(notifier_service);
    let deleted_handler = Arc::new(deleted_handler);

    let config = MeetingsWatcherServiceConfig {
        retry_interval: env.watch_retry_interval,
    };
    let meetings_watcher_service = MeetingsWatcherService::new(
        config,
        meetings_repository,
        created_handler,
        deleted_handler,
    )
    .await?;

    Ok(ApplicationState {
        db_client,
        meetings_watcher_service,
    })
}
