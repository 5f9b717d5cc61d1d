use std::collections::HashSet;
use std::sync::Arc;

use chrono_tz::Tz;
use tracing::error;

use super::card::{AccordionRow, EventCard};
use super::EventDialogActions;
use crate::components::calendar_api::models::CalendarEvent;
use crate::components::calendar_api::EventsSource;
use crate::utils::time::parse_timestamp;

/// Generic user-facing message for any fetch failure
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load events. Please try again.";

/// Load state of the cached event set
enum LoadState {
    Loading,
    Loaded(Vec<CalendarEvent>),
    Failed(String),
}

/// Rendered state of the all-events dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Closed,
    Loading,
    /// Fetch failed; the message is retryable via [`EventsListDialog::retry`]
    Failed { message: String },
    /// Fetch succeeded but the calendar holds no events
    Empty,
    Loaded(Vec<AccordionRow>),
}

/// Dialog listing every calendar event, newest first.
///
/// Events are fetched on open and cached until close; a confirmed delete
/// re-fetches the whole list rather than removing the row optimistically.
pub struct EventsListDialog {
    source: Arc<dyn EventsSource>,
    actions: Arc<dyn EventDialogActions>,
    tz: Tz,
    open: bool,
    state: LoadState,
    expanded: HashSet<String>,
    pending_delete: Option<String>,
}

impl EventsListDialog {
    pub fn new(source: Arc<dyn EventsSource>, actions: Arc<dyn EventDialogActions>, tz: Tz) -> Self {
        Self {
            source,
            actions,
            tz,
            open: false,
            state: LoadState::Loaded(Vec::new()),
            expanded: HashSet::new(),
            pending_delete: None,
        }
    }

    /// Open the dialog and fetch the full event set
    pub async fn open(&mut self) {
        self.open = true;
        self.expanded.clear();
        self.pending_delete = None;
        self.refresh().await;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Re-run a failed fetch
    pub async fn retry(&mut self) {
        if self.open {
            self.refresh().await;
        }
    }

    async fn refresh(&mut self) {
        self.state = LoadState::Loading;

        let result = self.source.fetch_events().await;
        match result {
            Ok(mut events) => {
                sort_newest_first(&mut events);
                self.state = LoadState::Loaded(events);
            }
            Err(e) => {
                error!("Failed to fetch calendar events: {:?}", e);
                self.state = LoadState::Failed(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Toggle one accordion row between hidden and shown
    pub fn toggle(&mut self, event_id: &str) {
        if !self.expanded.remove(event_id) {
            self.expanded.insert(event_id.to_string());
        }
    }

    /// Close the dialog, dropping the cached events and any error
    pub fn close(&mut self) {
        self.open = false;
        self.state = LoadState::Loaded(Vec::new());
        self.expanded.clear();
        self.pending_delete = None;
        self.actions.on_close();
    }

    /// Hand the event to the external edit flow, then close
    pub fn edit(&mut self, event_id: &str) {
        let event = match &self.state {
            LoadState::Loaded(events) => events.iter().find(|e| e.id == event_id).cloned(),
            _ => None,
        };

        if let Some(event) = event {
            self.actions.on_edit(&event);
            self.close();
        }
    }

    /// First delete step: remember the id pending confirmation
    pub fn request_delete(&mut self, event_id: &str) {
        let known = matches!(&self.state, LoadState::Loaded(events)
            if events.iter().any(|e| e.id == event_id));
        if known {
            self.pending_delete = Some(event_id.to_string());
        }
    }

    /// Dismiss the confirmation prompt
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Second delete step: invoke the host handler, then re-fetch the list.
    ///
    /// Handler failures are logged and swallowed; the cached list is left
    /// untouched so the dialog keeps showing its prior state.
    pub async fn confirm_delete(&mut self) {
        let Some(event_id) = self.pending_delete.take() else {
            return;
        };

        let result = self.actions.on_delete(&event_id).await;
        match result {
            Ok(()) => self.refresh().await,
            Err(e) => {
                error!("Failed to delete event {}: {:?}", event_id, e);
            }
        }
    }

    /// Render the dialog into a view model
    pub fn render(&self) -> ListView {
        if !self.open {
            return ListView::Closed;
        }

        match &self.state {
            LoadState::Loading => ListView::Loading,
            LoadState::Failed(message) => ListView::Failed {
                message: message.clone(),
            },
            LoadState::Loaded(events) if events.is_empty() => ListView::Empty,
            LoadState::Loaded(events) => {
                let rows = events
                    .iter()
                    .map(|event| {
                        let card = EventCard::from_event(event, &self.tz);
                        AccordionRow {
                            id: event.id.clone(),
                            header: card.title.clone(),
                            expanded: self.expanded.contains(&event.id),
                            card,
                        }
                    })
                    .collect();
                ListView::Loaded(rows)
            }
        }
    }
}

/// Sort by start timestamp descending; events without a parseable start sink
/// to the end in their original order.
fn sort_newest_first(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| {
        let a_start = a.start.as_deref().and_then(parse_timestamp);
        let b_start = b.start.as_deref().and_then(parse_timestamp);
        b_start.cmp(&a_start)
    });
}
