use std::sync::Arc;

use async_trait::async_trait;
use chrono_tz::Tz;
use tracing::info;

use caldesk::components::calendar_api::{CalendarApiHandle, CalendarEvent, TokenStore};
use caldesk::components::event_dialogs::{EventDialogActions, EventsListDialog, ListView};
use caldesk::error::{DashResult, Error};
use caldesk::startup;

/// Demo actions that only log what the host would do
struct LoggingActions;

#[async_trait]
impl EventDialogActions for LoggingActions {
    fn on_edit(&self, event: &CalendarEvent) {
        info!("Edit requested for event {}", event.id);
    }

    async fn on_delete(&self, event_id: &str) -> DashResult<()> {
        info!("Delete requested for event {}", event_id);
        Ok(())
    }

    fn on_close(&self) {
        info!("Dialog closed");
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting caldesk");

    // Load configuration
    let config = startup::load_config().await?;

    let (timezone, enabled) = {
        let config_read = config.read().await;
        (
            config_read.timezone.clone(),
            config_read.is_component_enabled("event_dialogs"),
        )
    };

    if !enabled {
        info!("Event dialogs are disabled in the component configuration");
        return Ok(());
    }

    let tz: Tz = timezone
        .parse()
        .map_err(|_| Error::Config(format!("Invalid timezone: {}", timezone)))?;

    // Spawn the API actor and open the events list against it
    let api = CalendarApiHandle::new(Arc::clone(&config), TokenStore::default());
    let mut dialog = EventsListDialog::new(Arc::new(api.clone()), Arc::new(LoggingActions), tz);

    dialog.open().await;

    match dialog.render() {
        ListView::Loaded(rows) => {
            println!("{} events:", rows.len());
            for row in rows {
                println!("- {} ({})", row.header, row.card.when);
                if let Some(location) = &row.card.location {
                    println!("    at {}", location);
                }
            }
        }
        ListView::Empty => println!("No events found."),
        ListView::Failed { message } => println!("{}", message),
        ListView::Loading | ListView::Closed => {}
    }

    dialog.close();
    api.shutdown().await?;

    Ok(())
}
