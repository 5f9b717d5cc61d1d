use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono_tz::Tz;

use caldesk::components::calendar_api::models::CalendarEvent;
use caldesk::components::calendar_api::EventsSource;
use caldesk::components::event_dialogs::{
    DetailView, EventDetailsDialog, EventDialogActions, EventsListDialog, ListView,
    LOAD_ERROR_MESSAGE,
};
use caldesk::error::{calendar_api_error, DashResult};

fn utc() -> Tz {
    "UTC".parse().unwrap()
}

fn event(id: &str, title: &str, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: Some(title.to_string()),
        start: Some(start.to_string()),
        end: Some(end.to_string()),
        ..Default::default()
    }
}

/// Counting event source with a switchable failure mode
#[derive(Default)]
struct CountingSource {
    events: Mutex<Vec<CalendarEvent>>,
    fail: AtomicBool,
    fetches: AtomicUsize,
}

impl CountingSource {
    fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Default::default()
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventsSource for CountingSource {
    async fn fetch_events(&self) -> DashResult<Vec<CalendarEvent>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(calendar_api_error("boom"));
        }
        Ok(self.events.lock().unwrap().clone())
    }
}

/// Actions implementation that records every callback
#[derive(Default)]
struct RecordingActions {
    edits: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
    closes: AtomicUsize,
    fail_delete: AtomicBool,
}

impl RecordingActions {
    fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventDialogActions for RecordingActions {
    fn on_edit(&self, event: &CalendarEvent) {
        self.edits.lock().unwrap().push(event.id.clone());
    }

    async fn on_delete(&self, event_id: &str) -> DashResult<()> {
        self.deletes.lock().unwrap().push(event_id.to_string());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(calendar_api_error("delete failed"));
        }
        Ok(())
    }

    fn on_close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_details_dialog_mode_selection() {
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventDetailsDialog::new(utc(), actions);

    // No events renders nothing
    dialog.open_for_day(Vec::new());
    assert_eq!(dialog.render(), DetailView::Hidden);

    // One event renders a single inline card
    dialog.open_for_day(vec![event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    )]);
    match dialog.render() {
        DetailView::Single(card) => assert_eq!(card.title, "Briefing"),
        other => panic!("expected single card, got {:?}", other),
    }

    // Several events render an accordion
    dialog.open_for_day(vec![
        event("e1", "Briefing", "2024-01-10T10:00:00Z", "2024-01-10T11:00:00Z"),
        event("e2", "Debrief", "2024-01-10T15:00:00Z", "2024-01-10T16:00:00Z"),
    ]);
    match dialog.render() {
        DetailView::Accordion(rows) => {
            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|r| !r.expanded));
        }
        other => panic!("expected accordion, got {:?}", other),
    }
}

#[tokio::test]
async fn test_details_dialog_expand_collapse_resets_on_close() {
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventDetailsDialog::new(utc(), Arc::clone(&actions) as _);

    let events = vec![
        event("e1", "Briefing", "2024-01-10T10:00:00Z", "2024-01-10T11:00:00Z"),
        event("e2", "Debrief", "2024-01-10T15:00:00Z", "2024-01-10T16:00:00Z"),
    ];
    dialog.open_for_day(events.clone());

    dialog.toggle("e2");
    match dialog.render() {
        DetailView::Accordion(rows) => {
            assert!(!rows[0].expanded);
            assert!(rows[1].expanded);
        }
        other => panic!("expected accordion, got {:?}", other),
    }

    // Toggling again collapses
    dialog.toggle("e2");
    match dialog.render() {
        DetailView::Accordion(rows) => assert!(!rows[1].expanded),
        other => panic!("expected accordion, got {:?}", other),
    }

    dialog.toggle("e1");
    dialog.close();
    assert_eq!(actions.closes(), 1);

    // Reopening starts with everything collapsed
    dialog.open_for_day(events);
    match dialog.render() {
        DetailView::Accordion(rows) => assert!(rows.iter().all(|r| !r.expanded)),
        other => panic!("expected accordion, got {:?}", other),
    }
}

#[tokio::test]
async fn test_details_dialog_all_day_formatting() {
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventDetailsDialog::new(utc(), actions);

    // Midnight-to-midnight over two days collapses to a single date
    dialog.open_single(event(
        "e1",
        "Exercise",
        "2024-02-01T00:00:00Z",
        "2024-02-03T00:00:00Z",
    ));
    match dialog.render() {
        DetailView::Single(card) => assert_eq!(card.when, "February 01, 2024"),
        other => panic!("expected single card, got {:?}", other),
    }

    // A 09:00 start is never all-day, even when the window crosses midnight
    // two days later
    dialog.open_single(event(
        "e2",
        "Long shift",
        "2024-02-01T09:00:00Z",
        "2024-02-03T00:00:00Z",
    ));
    match dialog.render() {
        DetailView::Single(card) => {
            assert_eq!(card.when, "February 01, 2024 09:00 - February 03, 2024 00:00")
        }
        other => panic!("expected single card, got {:?}", other),
    }
}

#[tokio::test]
async fn test_details_dialog_edit_closes() {
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventDetailsDialog::new(utc(), Arc::clone(&actions) as _);

    dialog.open_single(event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    ));
    dialog.edit("e1");

    assert_eq!(*actions.edits.lock().unwrap(), vec!["e1".to_string()]);
    assert!(!dialog.is_open());
    assert_eq!(actions.closes(), 1);
}

#[tokio::test]
async fn test_details_dialog_delete_confirmation() {
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventDetailsDialog::new(utc(), Arc::clone(&actions) as _);

    dialog.open_single(event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    ));

    // Cancelling leaves the handler untouched
    dialog.request_delete("e1");
    assert_eq!(dialog.pending_delete(), Some("e1"));
    dialog.cancel_delete();
    dialog.confirm_delete().await;
    assert!(actions.deletes.lock().unwrap().is_empty());
    assert!(dialog.is_open());

    // Confirming invokes the handler and closes
    dialog.request_delete("e1");
    dialog.confirm_delete().await;
    assert_eq!(*actions.deletes.lock().unwrap(), vec!["e1".to_string()]);
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn test_details_dialog_failed_delete_keeps_dialog_open() {
    let actions = Arc::new(RecordingActions::default());
    actions.fail_delete.store(true, Ordering::SeqCst);
    let mut dialog = EventDetailsDialog::new(utc(), Arc::clone(&actions) as _);

    dialog.open_single(event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    ));
    dialog.request_delete("e1");
    dialog.confirm_delete().await;

    // Handler ran, error was swallowed, dialog is still showing the event
    assert_eq!(actions.deletes.lock().unwrap().len(), 1);
    assert!(dialog.is_open());
    assert!(matches!(dialog.render(), DetailView::Single(_)));
    assert_eq!(actions.closes(), 0);
}

#[tokio::test]
async fn test_list_dialog_sorts_newest_first() {
    let source = Arc::new(CountingSource::with_events(vec![
        event("old", "Old", "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z"),
        event("new", "New", "2024-06-01T10:00:00Z", "2024-06-01T11:00:00Z"),
        event("mid", "Mid", "2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z"),
    ]));
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, actions, utc());

    dialog.open().await;

    match dialog.render() {
        ListView::Loaded(rows) => {
            let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["new", "mid", "old"]);
        }
        other => panic!("expected loaded list, got {:?}", other),
    }
    assert_eq!(source.fetches(), 1);
}

#[tokio::test]
async fn test_list_dialog_error_state_is_distinct_from_empty() {
    // Zero events: a dedicated empty state
    let source = Arc::new(CountingSource::default());
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, actions, utc());
    dialog.open().await;
    assert_eq!(dialog.render(), ListView::Empty);

    // Fetch failure: a retryable error state with the generic message
    let source = Arc::new(CountingSource::default());
    source.fail.store(true, Ordering::SeqCst);
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, actions, utc());
    dialog.open().await;
    assert_eq!(
        dialog.render(),
        ListView::Failed {
            message: LOAD_ERROR_MESSAGE.to_string()
        }
    );

    // Retry after the backend recovers
    source.fail.store(false, Ordering::SeqCst);
    dialog.retry().await;
    assert_eq!(dialog.render(), ListView::Empty);
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn test_list_dialog_delete_refetches_exactly_once() {
    let source = Arc::new(CountingSource::with_events(vec![event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    )]));
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, Arc::clone(&actions) as _, utc());

    dialog.open().await;
    assert_eq!(source.fetches(), 1);

    dialog.request_delete("e1");
    dialog.confirm_delete().await;

    // One delete, then exactly one re-fetch; no optimistic removal
    assert_eq!(*actions.deletes.lock().unwrap(), vec!["e1".to_string()]);
    assert_eq!(source.fetches(), 2);
    assert!(dialog.is_open());
}

#[tokio::test]
async fn test_list_dialog_failed_delete_does_not_refetch() {
    let source = Arc::new(CountingSource::with_events(vec![event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    )]));
    let actions = Arc::new(RecordingActions::default());
    actions.fail_delete.store(true, Ordering::SeqCst);
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, Arc::clone(&actions) as _, utc());

    dialog.open().await;
    dialog.request_delete("e1");
    dialog.confirm_delete().await;

    assert_eq!(source.fetches(), 1);
    assert!(matches!(dialog.render(), ListView::Loaded(_)));
}

#[tokio::test]
async fn test_list_dialog_close_clears_everything() {
    let source = Arc::new(CountingSource::with_events(vec![
        event("e1", "Briefing", "2024-01-10T10:00:00Z", "2024-01-10T11:00:00Z"),
        event("e2", "Debrief", "2024-01-10T15:00:00Z", "2024-01-10T16:00:00Z"),
    ]));
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, Arc::clone(&actions) as _, utc());

    dialog.open().await;
    dialog.toggle("e1");
    dialog.request_delete("e2");
    dialog.close();

    assert_eq!(dialog.render(), ListView::Closed);
    assert_eq!(dialog.pending_delete(), None);
    assert_eq!(actions.closes(), 1);

    // Reopening fetches afresh with collapsed rows
    dialog.open().await;
    assert_eq!(source.fetches(), 2);
    match dialog.render() {
        ListView::Loaded(rows) => assert!(rows.iter().all(|r| !r.expanded)),
        other => panic!("expected loaded list, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_dialog_edit_closes() {
    let source = Arc::new(CountingSource::with_events(vec![event(
        "e1",
        "Briefing",
        "2024-01-10T10:00:00Z",
        "2024-01-10T11:00:00Z",
    )]));
    let actions = Arc::new(RecordingActions::default());
    let mut dialog = EventsListDialog::new(Arc::clone(&source) as _, Arc::clone(&actions) as _, utc());

    dialog.open().await;
    dialog.edit("e1");

    assert_eq!(*actions.edits.lock().unwrap(), vec!["e1".to_string()]);
    assert!(!dialog.is_open());
    assert_eq!(actions.closes(), 1);
}
