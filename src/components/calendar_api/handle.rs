use crate::error::DashResult;
use crate::config::Config;
use super::models::CalendarEvent;
use super::actor::CalendarApiActorHandle;
use super::token::TokenStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the calendar API actor
#[derive(Clone)]
pub struct CalendarApiHandle {
    actor_handle: CalendarApiActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CalendarApiHandle {
    /// Create a new CalendarApiHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>, token_store: TokenStore) -> Self {
        use super::actor::CalendarApiActor;

        // Create the actor and get its handle
        let (mut actor, handle) = CalendarApiActor::new(config, token_store);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Fetch the full event set from the backend
    pub async fn fetch_events(&self) -> DashResult<Vec<CalendarEvent>> {
        self.actor_handle.fetch_events().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashResult<()> {
        self.actor_handle.shutdown().await
    }
}
