//! Event types flowing in and out of the travel-search form.
//!
//! Inbound [`FormEvent`]s come from whatever UI layer hosts the form; the
//! form reacts by emitting [`FormUpdate`]s over an mpsc channel for the UI to
//! render. The form logic itself never touches a widget.

use crate::api::Point;
use crate::form::bounds::{CoordinateBoundsDisplay, TravelTimeBoundsDisplay};

/// The two point-search fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Source,
    Destination,
}

/// A UI event delivered to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The active data source changed (also fired once on startup when a
    /// data source is preselected).
    DatabaseChanged { database: String },
    /// A keystroke in one of the point-search boxes; `value` is the full
    /// current content of the box.
    SearchInput { field: FormField, value: String },
    /// The user picked a point from the dropdown.
    PointSelected { field: FormField, point: Point },
    /// The user hit the clear button next to a selected point.
    SelectionCleared { field: FormField },
    ArrivalFromChanged { value: String },
    ArrivalToChanged { value: String },
}

/// State change of one autocomplete dropdown.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteUpdate {
    /// A lookup is pending or in flight; show the loading placeholder.
    Loading,
    /// Lookup finished. An empty list means "no points found" (which also
    /// covers a failed lookup, see [`crate::api::PointLookup`]).
    Results { points: Vec<Point> },
    /// Hide the dropdown.
    Hidden,
    /// A point became the field's selection.
    Selected { point: Point },
}

/// A rendering instruction emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormUpdate {
    Autocomplete {
        field: FormField,
        update: AutocompleteUpdate,
    },
    /// Coordinate bounds panel content, `None` to hide it.
    PointBounds(Option<CoordinateBoundsDisplay>),
    /// Travel-time bounds panel content, `None` to hide it.
    TravelBounds(Option<TravelTimeBoundsDisplay>),
}
