use super::{MeetingChangeDispatcher, MeetingsWatcherServiceConfig};
use crate::{
    repository::{
        self, MeetingsChangeStream, MeetingsRepository, MeetingsStreamEvent, WatchPosition,
    },
    retry::retry,
    service::meeting_handlers::MeetingHandler,
};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

///
/// Background task that listens to meeting changes
/// and hands them over to meeting handlers one by one.
///
pub struct MeetingsWatcherService {
    task_handle: JoinHandle<()>,

    close_notify: Arc<Notify>,
}

impl MeetingsWatcherService {
    pub async fn new(
        config: MeetingsWatcherServiceConfig,
        meetings_repository: Arc<dyn MeetingsRepository>,
        created_handler: Arc<dyn MeetingHandler>,
        deleted_handler: Arc<dyn MeetingHandler>,
    ) -> anyhow::Result<Self> {
        tracing::info!("opening change stream");
        let change_stream = meetings_repository.watch(WatchPosition::Now).await?;

        let watcher = Watcher {
            config,
            meetings_repository,
            dispatcher: MeetingChangeDispatcher::new(created_handler, deleted_handler),
        };

        let close_notify = Arc::new(Notify::new());
        let close_notify_clone = Arc::clone(&close_notify);
        let task_handle = tokio::spawn(async move {
            watcher.run(change_stream, close_notify_clone).await;
        });

        tracing::info!("watcher started");

        Ok(Self {
            task_handle,
            close_notify,
        })
    }

    pub async fn close(self) {
        tracing::info!("closing watcher");

        self.close_notify.notify_one();

        match self.task_handle.await {
            Ok(()) => tracing::info!("watcher closed"),
            Err(err) => tracing::error!(%err, "watcher task failed"),
        }
    }
}

struct Watcher {
    config: MeetingsWatcherServiceConfig,
    meetings_repository: Arc<dyn MeetingsRepository>,
    dispatcher: MeetingChangeDispatcher,
}

impl Watcher {
    #[tracing::instrument(name = "Meetings Watcher", skip_all)]
    async fn run(
        self,
        mut change_stream: Box<dyn MeetingsChangeStream>,
        close_notify: Arc<Notify>,
    ) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {}

            // Events are processed sequentially in stream order
            _ = async { loop {
                let position = match change_stream.next().await {
                    Some(Ok(MeetingsStreamEvent::Changed(change))) => {
                        self.dispatcher.dispatch(change).await;
                        continue;
                    }
                    Some(Ok(MeetingsStreamEvent::Invalidated(resume_token))) => {
                        tracing::warn!("change stream invalidated");
                        WatchPosition::StartAfter(resume_token)
                    }
                    Some(Err(repository::Error::ResumePointLost(err))) => {
                        tracing::warn!(%err, "resume point lost, watching from now");
                        WatchPosition::Now
                    }
                    Some(Err(err)) => {
                        tracing::warn!(%err, "change stream failed");
                        WatchPosition::resume_after(change_stream.resume_token())
                    }
                    None => {
                        tracing::warn!("change stream closed");
                        WatchPosition::resume_after(change_stream.resume_token())
                    }
                };

                change_stream = self.reopen(position).await;
            }} => {}
        }

        tracing::info!("watcher finished");
    }

    async fn reopen(&self, position: WatchPosition) -> Box<dyn MeetingsChangeStream> {
        let meetings_repository = &self.meetings_repository;
        let position = &position;

        retry(
            self.config.retry_interval,
            |attempt| tracing::info!(attempt, "reopening change stream"),
            |attempt, err| tracing::warn!(attempt, %err, "reopening change stream failed"),
            move || async move {
                match meetings_repository.watch(position.clone()).await {
                    Err(repository::Error::ResumePointLost(err)) => {
                        tracing::warn!(%err, "resume point lost, watching from now");
                        meetings_repository.watch(WatchPosition::Now).await
                    }
                    result => result,
                }
            },
        )
        .await
    }
}
