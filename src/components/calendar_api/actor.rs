use crate::config::Config;
use crate::error::{calendar_api_error, DashResult};
use super::models::{CalendarEvent, EventsEnvelope};
use super::token::TokenStore;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::info;
use url::Url;
use reqwest::Client;

/// The calendar API actor that processes messages
pub struct CalendarApiActor {
    config: Arc<RwLock<Config>>,
    token_store: TokenStore,
    client: Client,
    command_rx: mpsc::Receiver<CalendarApiCommand>,
}

/// Commands that can be sent to the calendar API actor
pub enum CalendarApiCommand {
    FetchEvents(mpsc::Sender<DashResult<Vec<CalendarEvent>>>),
    Shutdown,
}

/// Handle for communicating with the calendar API actor
#[derive(Clone)]
pub struct CalendarApiActorHandle {
    command_tx: mpsc::Sender<CalendarApiCommand>,
}

impl CalendarApiActorHandle {
    /// Fetch the full event set from the backend
    pub async fn fetch_events(&self) -> DashResult<Vec<CalendarEvent>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx.send(CalendarApiCommand::FetchEvents(response_tx)).await
            .map_err(|e| calendar_api_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx.recv().await
            .ok_or_else(|| calendar_api_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashResult<()> {
        let _ = self.command_tx.send(CalendarApiCommand::Shutdown).await;
        Ok(())
    }
}

impl CalendarApiActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>, token_store: TokenStore) -> (Self, CalendarApiActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config: Arc::clone(&config),
            token_store,
            client: Client::new(),
            command_rx,
        };

        let handle = CalendarApiActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Calendar API actor started");

        // Process commands
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CalendarApiCommand::FetchEvents(response_tx) => {
                    let result = Self::fetch_events(
                        Arc::clone(&self.config),
                        self.token_store.clone(),
                        self.client.clone(),
                    ).await;

                    let _ = response_tx.send(result).await;
                },
                CalendarApiCommand::Shutdown => {
                    info!("Calendar API actor shutting down");
                    break;
                }
            }
        }

        info!("Calendar API actor shut down");
    }

    /// Fetch the full event set from the backend
    pub async fn fetch_events(
        config: Arc<RwLock<Config>>,
        token_store: TokenStore,
        client: Client,
    ) -> DashResult<Vec<CalendarEvent>> {
        // Get endpoint from config
        let endpoint = {
            let config_read = config.read().await;
            config_read.events_endpoint()
        };

        // Get session bearer token
        let token = token_store.auth_token()?;

        let url = Url::parse(&endpoint)
            .map_err(|e| calendar_api_error(&format!("Failed to parse URL: {}", e)))?;

        // Make API request
        let response = client.get(url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| calendar_api_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(calendar_api_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status,
                error_body
            )));
        }

        let envelope: EventsEnvelope = response.json().await
            .map_err(|e| calendar_api_error(&format!("Failed to parse events response: {}", e)))?;

        // The backend signals application-level failure inside the envelope
        if !envelope.success {
            return Err(calendar_api_error("Backend reported failure fetching events"));
        }

        Ok(envelope.data)
    }
}
