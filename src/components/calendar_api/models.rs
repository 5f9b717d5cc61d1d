use serde::{Deserialize, Serialize};

/// Reference to the user that created an event
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreatedBy {
    pub name: Option<String>,
}

/// Calendar event as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    /// Start timestamp, RFC3339; kept raw and parsed where displayed
    pub start: Option<String>,
    /// End timestamp, RFC3339
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<CreatedBy>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// JSON envelope wrapping every calendar API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<CalendarEvent>,
}
