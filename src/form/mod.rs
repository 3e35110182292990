//! The travel-search form component.
//!
//! Owns the state behind the form's interactive parts: the source and
//! destination autocomplete fields, the active data source, the arrival
//! range inputs, and submit validation. The hosting UI feeds it
//! [`FormEvent`]s and renders the [`FormUpdate`]s it emits; nothing in here
//! knows what a widget is.

mod autocomplete;
mod bounds;
mod events;

pub use autocomplete::AutocompleteField;
pub use bounds::{CoordinateBoundsDisplay, TravelTimeBoundsDisplay};
pub use events::{AutocompleteUpdate, FormEvent, FormField, FormUpdate};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use crate::api::PointLookup;
use crate::config::FormConfig;
use crate::query::PointQuery;
use crate::validation::validate_date_time;

/// A form input that failed submit validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitField {
    Source,
    Destination,
    ArrivalFrom,
    ArrivalTo,
}

/// One submit-validation failure, with the message to show next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: SubmitField,
    pub message: String,
}

/// Validation failures for a blocked submission. `errors` is ordered source,
/// destination, arrival-from, arrival-to; the first entry is the field that
/// should receive focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitErrors {
    pub errors: Vec<FieldError>,
}

impl SubmitErrors {
    /// The field to focus, the first one that failed.
    pub fn focus_field(&self) -> &SubmitField {
        &self.errors[0].field
    }
}

/// A fully validated search, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSubmission {
    pub database: String,
    pub source_id: String,
    pub destination_id: String,
    pub arrival_from: String,
    pub arrival_to: String,
}

/// State and behavior of the travel-search form.
pub struct TravelSearchForm {
    lookup: Arc<dyn PointLookup>,
    updates: UnboundedSender<FormUpdate>,
    database: String,
    source: AutocompleteField,
    destination: AutocompleteField,
    arrival_from: String,
    arrival_to: String,
}

impl TravelSearchForm {
    pub fn new(
        lookup: Arc<dyn PointLookup>,
        config: &FormConfig,
        updates: UnboundedSender<FormUpdate>,
    ) -> Self {
        let debounce = Duration::from_millis(config.debounce_ms);
        let source = AutocompleteField::new(
            FormField::Source,
            Arc::clone(&lookup),
            updates.clone(),
            debounce,
            config.search_limit,
        );
        let destination = AutocompleteField::new(
            FormField::Destination,
            Arc::clone(&lookup),
            updates.clone(),
            debounce,
            config.search_limit,
        );
        Self {
            lookup,
            updates,
            database: config.database.clone(),
            source,
            destination,
            arrival_from: String::new(),
            arrival_to: String::new(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Dispatch one UI event against the form state.
    pub async fn handle_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::DatabaseChanged { database } => {
                self.database = database;
                self.refresh_bounds().await;
            }
            FormEvent::SearchInput { field, value } => {
                let database = self.database.clone();
                self.field_mut(field).handle_input(&database, &value);
            }
            FormEvent::PointSelected { field, point } => {
                self.field_mut(field).select(point);
            }
            FormEvent::SelectionCleared { field } => {
                self.field_mut(field).clear();
            }
            FormEvent::ArrivalFromChanged { value } => self.arrival_from = value,
            FormEvent::ArrivalToChanged { value } => self.arrival_to = value,
        }
    }

    /// Fetch both bounds kinds for the active data source and emit the
    /// refreshed panel content.
    async fn refresh_bounds(&self) {
        let point_bounds = self.lookup.point_bounds(&self.database).await;
        let _ = self.updates.send(FormUpdate::PointBounds(
            point_bounds.as_ref().map(CoordinateBoundsDisplay::from),
        ));

        let travel_bounds = self.lookup.travel_bounds(&self.database).await;
        let _ = self.updates.send(FormUpdate::TravelBounds(
            travel_bounds.as_ref().map(TravelTimeBoundsDisplay::from),
        ));
    }

    /// Restore a pre-selected point by exact ID, e.g. when the form is
    /// reopened with a previous search in the URL.
    pub async fn restore_selection(&mut self, field: FormField, id: &str) {
        if self.database.is_empty() {
            return;
        }
        let query = PointQuery::by_id(id, &self.database);
        match self.lookup.search_points(&query).await.into_iter().next() {
            Some(point) => self.field_mut(field).select(point),
            None => info!("Pre-selected point {id} not found, leaving {field:?} empty"),
        }
    }

    /// Validate the form for submission.
    ///
    /// Checks run in display order (source, destination, arrival-from,
    /// arrival-to) and every failure is reported, so all offending fields can
    /// be marked at once.
    pub fn validate_submit(&self) -> Result<SearchSubmission, SubmitErrors> {
        let mut errors = Vec::new();

        if self.source.selected().is_none() {
            errors.push(FieldError {
                field: SubmitField::Source,
                message: "Please select a source point from the dropdown".to_string(),
            });
        }
        if self.destination.selected().is_none() {
            errors.push(FieldError {
                field: SubmitField::Destination,
                message: "Please select a destination point from the dropdown".to_string(),
            });
        }
        if let Err(e) = validate_date_time(&self.arrival_from) {
            errors.push(FieldError {
                field: SubmitField::ArrivalFrom,
                message: e.to_string(),
            });
        }
        if let Err(e) = validate_date_time(&self.arrival_to) {
            errors.push(FieldError {
                field: SubmitField::ArrivalTo,
                message: e.to_string(),
            });
        }

        if !errors.is_empty() {
            return Err(SubmitErrors { errors });
        }

        // The unwraps cannot fire: both selections were just checked.
        Ok(SearchSubmission {
            database: self.database.clone(),
            source_id: self.source.selected().unwrap().id.clone(),
            destination_id: self.destination.selected().unwrap().id.clone(),
            arrival_from: self.arrival_from.clone(),
            arrival_to: self.arrival_to.clone(),
        })
    }

    fn field_mut(&mut self, field: FormField) -> &mut AutocompleteField {
        match field {
            FormField::Source => &mut self.source,
            FormField::Destination => &mut self.destination,
        }
    }
}
