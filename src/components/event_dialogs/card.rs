use chrono_tz::Tz;

use crate::components::calendar_api::models::CalendarEvent;
use crate::utils::time::{format_event_window, format_optional_timestamp, UNKNOWN};

/// Title shown for events without one
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// Formatted per-event card shared by both dialogs.
///
/// Optional fields that are `None` here are omitted from the rendered card;
/// the rest carry placeholder text when the backend left them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub when: String,
    pub location: Option<String>,
    pub created_by: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl EventCard {
    pub fn from_event(event: &CalendarEvent, tz: &Tz) -> Self {
        let title = event
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_EVENT)
            .to_string();

        let created_by = event
            .created_by
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();

        Self {
            id: event.id.clone(),
            title,
            when: format_event_window(event.start.as_deref(), event.end.as_deref(), tz),
            location: event.location.clone().filter(|l| !l.trim().is_empty()),
            created_by,
            description: event.description.clone().filter(|d| !d.trim().is_empty()),
            created_at: format_optional_timestamp(event.created_at.as_deref(), tz),
            updated_at: format_optional_timestamp(event.updated_at.as_deref(), tz),
        }
    }
}

/// One accordion entry: a header plus an independently toggled card body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionRow {
    pub id: String,
    pub header: String,
    pub expanded: bool,
    pub card: EventCard,
}
