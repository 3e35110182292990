//! Wire models for the travel-search API.
//!
//! Field names follow the server's JSON casing: points use `ID`/`Name`/`X`/`Y`,
//! bounds objects use camelCase.

use serde::{Deserialize, Serialize};

/// A searchable point (station, airport, stop) in a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

impl Point {
    /// The detail line shown under a point in dropdowns and selections.
    pub fn details(&self) -> String {
        format!(
            "ID: {} | Coordinates: ({:.2}, {:.2})",
            self.id, self.x, self.y
        )
    }
}

/// Coordinate extent of all points in a data source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Departure/arrival time extent of all travels in a data source. The values
/// are preformatted date strings, displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelTimeBounds {
    pub min_departure: String,
    pub max_departure: String,
    pub min_arrival: String,
    pub max_arrival: String,
}

/// Response envelope of `GET /api/points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub points: Vec<Point>,
}

/// Response envelope of `GET /api/points/bounds`. `bounds` is absent when the
/// data source has no points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointBoundsResponse {
    #[serde(default)]
    pub bounds: Option<PointBounds>,
}

/// Response envelope of `GET /api/travels/bounds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTimeBoundsResponse {
    #[serde(default)]
    pub bounds: Option<TravelTimeBounds>,
}
