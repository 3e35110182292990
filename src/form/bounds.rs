//! Bounds hint panels for the selected data source.
//!
//! When a data source is picked, the form shows the coordinate and
//! travel-time extents reported by the backend, along with example inputs in
//! the accepted syntax. A data source without bounds hides the panels.

use crate::api::{PointBounds, TravelTimeBounds};

/// Rendered content of the coordinate bounds panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateBoundsDisplay {
    /// e.g. `"-1.50 to 9.00"`
    pub x_range: String,
    pub y_range: String,
    /// Example source input in `x,y` syntax, the minimum corner.
    pub example_source: String,
    /// Example destination input, the maximum corner.
    pub example_destination: String,
}

impl From<&PointBounds> for CoordinateBoundsDisplay {
    fn from(bounds: &PointBounds) -> Self {
        Self {
            x_range: format!("{:.2} to {:.2}", bounds.min_x, bounds.max_x),
            y_range: format!("{:.2} to {:.2}", bounds.min_y, bounds.max_y),
            example_source: format!("{:.2},{:.2}", bounds.min_x, bounds.min_y),
            example_destination: format!("{:.2},{:.2}", bounds.max_x, bounds.max_y),
        }
    }
}

/// Rendered content of the travel-time bounds panel. The backend already
/// formats the dates, so the values pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimeBoundsDisplay {
    pub departure_range: String,
    pub arrival_range: String,
    /// Example `arrival_from` input, the earliest arrival.
    pub example_arrival_from: String,
    /// Example `arrival_to` input, the latest arrival.
    pub example_arrival_to: String,
}

impl From<&TravelTimeBounds> for TravelTimeBoundsDisplay {
    fn from(bounds: &TravelTimeBounds) -> Self {
        Self {
            departure_range: format!("{} to {}", bounds.min_departure, bounds.max_departure),
            arrival_range: format!("{} to {}", bounds.min_arrival, bounds.max_arrival),
            example_arrival_from: bounds.min_arrival.clone(),
            example_arrival_to: bounds.max_arrival.clone(),
        }
    }
}
