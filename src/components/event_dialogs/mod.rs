mod card;
mod details;
mod list;

pub use card::{AccordionRow, EventCard, UNTITLED_EVENT};
pub use details::{DetailView, EventDetailsDialog};
pub use list::{EventsListDialog, ListView, LOAD_ERROR_MESSAGE};

use crate::components::calendar_api::models::CalendarEvent;
use crate::error::DashResult;
use async_trait::async_trait;

/// Callbacks a dialog delegates to its host.
///
/// Editing and deletion are owned by the surrounding admin shell; the
/// dialogs only decide when to invoke them and how to react afterwards.
#[async_trait]
pub trait EventDialogActions: Send + Sync {
    /// Hand the event to the external edit flow
    fn on_edit(&self, event: &CalendarEvent);

    /// Delete the event with the given id
    async fn on_delete(&self, event_id: &str) -> DashResult<()>;

    /// Notify the host that the dialog has closed
    fn on_close(&self);
}
