mod actor;
mod handle;
pub mod models;
pub mod token;

pub use handle::CalendarApiHandle;
pub use models::CalendarEvent;
pub use token::TokenStore;

use crate::error::DashResult;
use async_trait::async_trait;

/// Source of the full calendar event set.
///
/// The dialogs depend on this seam so tests can swap in a mock without a
/// running backend.
#[async_trait]
pub trait EventsSource: Send + Sync {
    async fn fetch_events(&self) -> DashResult<Vec<CalendarEvent>>;
}

#[async_trait]
impl EventsSource for CalendarApiHandle {
    async fn fetch_events(&self) -> DashResult<Vec<CalendarEvent>> {
        CalendarApiHandle::fetch_events(self).await
    }
}
