//! HTTP client for the travel-search API.
//!
//! All lookup failures (unreachable server, non-2xx status, undecodable body)
//! are logged and reported as empty results or absent bounds. The form treats
//! "nothing found" and "lookup failed" the same way, so errors never cross
//! the [`PointLookup`] surface.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::query::PointQuery;

use super::models::*;

/// Read-only access to the point-search side of the travel-search API.
///
/// The autocomplete and bounds components talk to this trait, not to
/// [`HttpPointLookup`] directly, so tests can substitute a scripted fake.
#[async_trait]
pub trait PointLookup: Send + Sync {
    /// Run a point search. Failures surface as an empty list.
    async fn search_points(&self, query: &PointQuery) -> Vec<Point>;

    /// Coordinate bounds of a data source, if it has any points.
    async fn point_bounds(&self, database: &str) -> Option<PointBounds>;

    /// Travel time bounds of a data source, if it has any travels.
    async fn travel_bounds(&self, database: &str) -> Option<TravelTimeBounds>;
}

/// [`PointLookup`] implementation over HTTP.
#[derive(Clone)]
pub struct HttpPointLookup {
    client: Client,
    base_url: String,
}

impl HttpPointLookup {
    /// # Arguments
    /// * `base_url` - Base URL of the travel-search service (e.g., "http://localhost:3000")
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a single point by its exact ID, used to restore a
    /// pre-selected source or destination.
    pub async fn find_point_by_id(&self, id: &str, database: &str) -> Option<Point> {
        let query = PointQuery::by_id(id, database);
        self.search_points(&query).await.into_iter().next()
    }

    async fn try_search_points(&self, query: &PointQuery) -> Result<Vec<Point>> {
        let url = format!("{}/api/points?{}", self.base_url, query.query_string());
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Point search failed with status: {}",
                response.status()
            ));
        }

        let points: PointsResponse = response.json().await?;
        Ok(points.points)
    }

    async fn try_point_bounds(&self, database: &str) -> Result<Option<PointBounds>> {
        let url = format!(
            "{}/api/points/bounds?database={}",
            self.base_url,
            urlencoding::encode(database)
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Point bounds request failed with status: {}",
                response.status()
            ));
        }

        let bounds: PointBoundsResponse = response.json().await?;
        Ok(bounds.bounds)
    }

    async fn try_travel_bounds(&self, database: &str) -> Result<Option<TravelTimeBounds>> {
        let url = format!(
            "{}/api/travels/bounds?database={}",
            self.base_url,
            urlencoding::encode(database)
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Travel bounds request failed with status: {}",
                response.status()
            ));
        }

        let bounds: TravelTimeBoundsResponse = response.json().await?;
        Ok(bounds.bounds)
    }
}

#[async_trait]
impl PointLookup for HttpPointLookup {
    async fn search_points(&self, query: &PointQuery) -> Vec<Point> {
        match self.try_search_points(query).await {
            Ok(points) => points,
            Err(e) => {
                warn!("Point search failed: {e:#}");
                Vec::new()
            }
        }
    }

    async fn point_bounds(&self, database: &str) -> Option<PointBounds> {
        match self.try_point_bounds(database).await {
            Ok(bounds) => bounds,
            Err(e) => {
                warn!("Fetching point bounds failed: {e:#}");
                None
            }
        }
    }

    async fn travel_bounds(&self, database: &str) -> Option<TravelTimeBounds> {
        match self.try_travel_bounds(database).await {
            Ok(bounds) => bounds,
            Err(e) => {
                warn!("Fetching travel bounds failed: {e:#}");
                None
            }
        }
    }
}
