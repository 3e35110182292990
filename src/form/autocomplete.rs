//! Debounced point autocomplete for a single form field.
//!
//! Each keystroke resets the field's quiet-window timer; only the input state
//! at the end of the window issues a lookup. Every issued lookup carries a
//! monotonically increasing token, and a result is only applied while its
//! token is still the newest one, so a slow response superseded by a later
//! keystroke can never overwrite fresher dropdown content.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::{Point, PointLookup};
use crate::intent::classify;
use crate::query::PointQuery;

use super::events::{AutocompleteUpdate, FormField, FormUpdate};

/// Autocomplete state for one point-search box.
///
/// The debounce timer is owned by the field itself (an abortable task
/// handle), so source and destination debounce independently.
pub struct AutocompleteField {
    field: FormField,
    lookup: Arc<dyn PointLookup>,
    updates: UnboundedSender<FormUpdate>,
    debounce: Duration,
    limit: u32,
    /// Pending quiet-window timer, aborted by the next keystroke. Only the
    /// timer is cancellable; once a lookup is in flight its result is
    /// discarded through the token instead.
    pending: Option<JoinHandle<()>>,
    /// Token of the most recently issued input; shared with in-flight lookup
    /// tasks so they can detect they have gone stale.
    latest_token: Arc<AtomicU64>,
    selected: Option<Point>,
}

impl AutocompleteField {
    pub fn new(
        field: FormField,
        lookup: Arc<dyn PointLookup>,
        updates: UnboundedSender<FormUpdate>,
        debounce: Duration,
        limit: u32,
    ) -> Self {
        Self {
            field,
            lookup,
            updates,
            debounce,
            limit,
            pending: None,
            latest_token: Arc::new(AtomicU64::new(0)),
            selected: None,
        }
    }

    /// The point currently selected in this field, if any.
    pub fn selected(&self) -> Option<&Point> {
        self.selected.as_ref()
    }

    /// Handle a keystroke: the full current content of the search box.
    ///
    /// Typing always drops the current selection. Blank input cancels any
    /// pending lookup and hides the dropdown; anything else shows the
    /// loading placeholder and schedules a lookup after the quiet window.
    pub fn handle_input(&mut self, database: &str, value: &str) {
        self.selected = None;
        let token = self.supersede();

        if value.trim().is_empty() {
            self.send(AutocompleteUpdate::Hidden);
            return;
        }

        self.send(AutocompleteUpdate::Loading);

        let lookup = Arc::clone(&self.lookup);
        let updates = self.updates.clone();
        let latest_token = Arc::clone(&self.latest_token);
        let field = self.field;
        let debounce = self.debounce;
        let limit = self.limit;
        let database = database.to_string();
        let value = value.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            // The quiet window has elapsed. The lookup runs detached: a
            // later keystroke aborts pending timers only, an in-flight
            // lookup completes and gets dropped by the token check.
            tokio::spawn(async move {
                let Some(intent) = classify(&value) else {
                    return;
                };
                let query = PointQuery::new(intent, database, limit);
                let points = lookup.search_points(&query).await;

                if latest_token.load(Ordering::SeqCst) != token {
                    debug!("Dropping stale autocomplete result for {:?}", field);
                    return;
                }
                let _ = updates.send(FormUpdate::Autocomplete {
                    field,
                    update: AutocompleteUpdate::Results { points },
                });
            });
        }));
    }

    /// Make `point` the field's selection and close the dropdown.
    pub fn select(&mut self, point: Point) {
        self.supersede();
        self.selected = Some(point.clone());
        self.send(AutocompleteUpdate::Selected { point });
    }

    /// Drop the selection and hide the dropdown.
    pub fn clear(&mut self) {
        self.supersede();
        self.selected = None;
        self.send(AutocompleteUpdate::Hidden);
    }

    /// Cancel the pending timer and invalidate any in-flight lookup.
    /// Returns the new current token.
    fn supersede(&mut self) -> u64 {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn send(&self, update: AutocompleteUpdate) {
        let _ = self.updates.send(FormUpdate::Autocomplete {
            field: self.field,
            update,
        });
    }
}

impl Drop for AutocompleteField {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
