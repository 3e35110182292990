//! Fixture data served by the stub API.

use travel_point_search::api::{Point, PointBounds, TravelTimeBounds};

/// Data source populated with the fixture points below.
pub const TEST_DATABASE: &str = "test-db";

/// Data source with no points and no travels.
pub const EMPTY_DATABASE: &str = "empty-db";

/// Data source whose endpoints always answer 500.
pub const BOOM_DATABASE: &str = "boom-db";

pub fn points() -> Vec<Point> {
    vec![
        Point {
            id: "PAR".to_string(),
            name: "Paris".to_string(),
            x: 48.85,
            y: 2.35,
        },
        Point {
            id: "PAR2".to_string(),
            name: "Paris Nord".to_string(),
            x: 48.88,
            y: 2.36,
        },
        Point {
            id: "LYS".to_string(),
            name: "Lyon".to_string(),
            x: 45.76,
            y: 4.84,
        },
        Point {
            id: "MRS".to_string(),
            name: "Marseille".to_string(),
            x: 43.30,
            y: 5.37,
        },
    ]
}

pub fn point_bounds() -> PointBounds {
    let points = points();
    PointBounds {
        min_x: points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min),
        max_x: points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max),
        min_y: points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min),
        max_y: points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max),
    }
}

pub fn travel_bounds() -> TravelTimeBounds {
    TravelTimeBounds {
        min_departure: "2024-01-01 06:00".to_string(),
        max_departure: "2024-06-30 22:00".to_string(),
        min_arrival: "2024-01-01 08:00".to_string(),
        max_arrival: "2024-07-01 04:00".to_string(),
    }
}
