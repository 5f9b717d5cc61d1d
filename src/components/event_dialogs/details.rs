use std::collections::HashSet;
use std::sync::Arc;

use chrono_tz::Tz;
use tracing::error;

use super::card::{AccordionRow, EventCard};
use super::EventDialogActions;
use crate::components::calendar_api::models::CalendarEvent;

/// Rendered state of the details dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Dialog closed, or opened with no events
    Hidden,
    /// Exactly one event: a single inline card, always expanded
    Single(EventCard),
    /// Several events for the same day: one toggleable row per event
    Accordion(Vec<AccordionRow>),
}

/// Dialog showing the event(s) of one calendar day.
///
/// With a single event it renders an inline card; with several it renders an
/// accordion whose rows expand independently. Edit and delete are delegated
/// to the host via [`EventDialogActions`].
pub struct EventDetailsDialog {
    events: Vec<CalendarEvent>,
    expanded: HashSet<String>,
    pending_delete: Option<String>,
    open: bool,
    tz: Tz,
    actions: Arc<dyn EventDialogActions>,
}

impl EventDetailsDialog {
    pub fn new(tz: Tz, actions: Arc<dyn EventDialogActions>) -> Self {
        Self {
            events: Vec::new(),
            expanded: HashSet::new(),
            pending_delete: None,
            open: false,
            tz,
            actions,
        }
    }

    /// Open the dialog for a single event
    pub fn open_single(&mut self, event: CalendarEvent) {
        self.open_for_day(vec![event]);
    }

    /// Open the dialog for all events of one day
    pub fn open_for_day(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
        self.expanded.clear();
        self.pending_delete = None;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle one accordion row between hidden and shown
    pub fn toggle(&mut self, event_id: &str) {
        if !self.expanded.remove(event_id) {
            self.expanded.insert(event_id.to_string());
        }
    }

    /// Close the dialog, resetting all per-open state
    pub fn close(&mut self) {
        self.events.clear();
        self.expanded.clear();
        self.pending_delete = None;
        self.open = false;
        self.actions.on_close();
    }

    /// Hand the event to the external edit flow, then close
    pub fn edit(&mut self, event_id: &str) {
        if let Some(event) = self.events.iter().find(|e| e.id == event_id).cloned() {
            self.actions.on_edit(&event);
            self.close();
        }
    }

    /// First delete step: remember the id pending confirmation
    pub fn request_delete(&mut self, event_id: &str) {
        if self.events.iter().any(|e| e.id == event_id) {
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

    /// Second delete step: invoke the host handler and close on success.
    ///
    /// Handler failures are logged and swallowed; the dialog stays in its
    /// prior state so nothing disappears from under the user.
    pub async fn confirm_delete(&mut self) {
        let Some(event_id) = self.pending_delete.take() else {
            return;
        };

        let result = self.actions.on_delete(&event_id).await;
        match result {
            Ok(()) => self.close(),
            Err(e) => {
                error!("Failed to delete event {}: {:?}", event_id, e);
            }
        }
    }

    /// Render the dialog into a view model
    pub fn render(&self) -> DetailView {
        if !self.open || self.events.is_empty() {
            return DetailView::Hidden;
        }

        if self.events.len() == 1 {
            return DetailView::Single(EventCard::from_event(&self.events[0], &self.tz));
        }

        let rows = self
            .events
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

        DetailView::Accordion(rows)
    }
}
