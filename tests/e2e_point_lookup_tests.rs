//! End-to-end tests for the HTTP point lookup client against the stub API.

mod common;

use common::{StubApiServer, BOOM_DATABASE, EMPTY_DATABASE, TEST_DATABASE};

use travel_point_search::api::HttpPointLookup;
use travel_point_search::api::PointLookup;
use travel_point_search::intent::{classify, SearchIntent};
use travel_point_search::query::PointQuery;

fn query(raw: &str, database: &str) -> PointQuery {
    PointQuery::new(classify(raw).expect("non-blank input"), database, 20)
}

#[tokio::test]
async fn test_name_search_returns_matching_points() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let points = lookup.search_points(&query("paris", TEST_DATABASE)).await;

    let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Paris", "Paris Nord"]);

    // The wire carried the classified parameter plus limit and database.
    let requests = server.point_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].get("name_part").unwrap(), "paris");
    assert_eq!(requests[0].get("database").unwrap(), TEST_DATABASE);
    assert_eq!(requests[0].get("limit").unwrap(), "20");
    assert!(!requests[0].contains_key("id_part"));
}

#[tokio::test]
async fn test_id_search_uses_id_part_parameter() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let points = lookup.search_points(&query("PAR2", TEST_DATABASE)).await;

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].name, "Paris Nord");
    assert!(server.point_requests()[0].contains_key("id_part"));
}

#[tokio::test]
async fn test_coordinate_search_returns_nearest_first() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let raw = "45.7,4.8"; // near Lyon
    assert!(matches!(
        classify(raw),
        Some(SearchIntent::Coordinates { .. })
    ));
    let points = lookup.search_points(&query(raw, TEST_DATABASE)).await;

    assert_eq!(points[0].name, "Lyon");
    let request = &server.point_requests()[0];
    assert_eq!(request.get("x").unwrap(), "45.7");
    assert_eq!(request.get("y").unwrap(), "4.8");
}

#[tokio::test]
async fn test_server_error_surfaces_as_empty_results() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let points = lookup.search_points(&query("paris", BOOM_DATABASE)).await;

    assert!(points.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_surfaces_as_empty_results() {
    // Nothing listens on this port.
    let lookup = HttpPointLookup::new("http://127.0.0.1:9".to_string(), 1).unwrap();

    let points = lookup.search_points(&query("paris", TEST_DATABASE)).await;
    assert!(points.is_empty());

    let bounds = lookup.point_bounds(TEST_DATABASE).await;
    assert!(bounds.is_none());
}

#[tokio::test]
async fn test_point_bounds_for_populated_database() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let bounds = lookup.point_bounds(TEST_DATABASE).await.unwrap();

    assert_eq!(bounds.min_x, 43.30);
    assert_eq!(bounds.max_x, 48.88);
}

#[tokio::test]
async fn test_bounds_absent_for_empty_database() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    assert!(lookup.point_bounds(EMPTY_DATABASE).await.is_none());
    assert!(lookup.travel_bounds(EMPTY_DATABASE).await.is_none());
}

#[tokio::test]
async fn test_travel_bounds_for_populated_database() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let bounds = lookup.travel_bounds(TEST_DATABASE).await.unwrap();

    assert_eq!(bounds.min_arrival, "2024-01-01 08:00");
    assert_eq!(bounds.max_departure, "2024-06-30 22:00");
}

#[tokio::test]
async fn test_find_point_by_id_requests_single_point() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    let point = lookup.find_point_by_id("LYS", TEST_DATABASE).await.unwrap();
    assert_eq!(point.name, "Lyon");

    let request = &server.point_requests()[0];
    assert_eq!(request.get("limit").unwrap(), "1");
    assert_eq!(request.get("id_part").unwrap(), "LYS");

    assert!(lookup.find_point_by_id("XXX", TEST_DATABASE).await.is_none());
}

#[tokio::test]
async fn test_database_value_is_url_encoded() {
    let server = StubApiServer::spawn().await;
    let lookup = HttpPointLookup::new(server.base_url.clone(), 5).unwrap();

    // A database name with a space must arrive decoded on the other side.
    let points = lookup.search_points(&query("paris", "some db")).await;
    assert!(points.is_empty());

    let request = &server.point_requests()[0];
    assert_eq!(request.get("database").unwrap(), "some db");
}
