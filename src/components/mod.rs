// Export components
pub mod calendar_api;
pub mod certificate;
pub mod event_dialogs;

// Re-export calendar API handle
pub use calendar_api::CalendarApiHandle;
// Re-export the dialogs
pub use event_dialogs::{EventDetailsDialog, EventsListDialog};
