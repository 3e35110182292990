//! Construction of point-search queries against the `/api/points` endpoint.

use crate::intent::SearchIntent;

/// Default number of points requested by autocomplete lookups.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// A fully-specified point-search query: an intent, the data source it runs
/// against, and a result limit.
#[derive(Debug, Clone, PartialEq)]
pub struct PointQuery {
    pub intent: SearchIntent,
    pub database: String,
    pub limit: u32,
}

impl PointQuery {
    pub fn new(intent: SearchIntent, database: impl Into<String>, limit: u32) -> Self {
        Self {
            intent,
            database: database.into(),
            limit,
        }
    }

    /// Exact-ID lookup used to restore a pre-selected point. Limit 1: the ID
    /// is expected to match a single point.
    pub fn by_id(id: impl Into<String>, database: impl Into<String>) -> Self {
        Self::new(SearchIntent::Id(id.into()), database, 1)
    }

    /// The query parameters as ordered key/value pairs.
    ///
    /// Always `limit` and `database`, plus exactly one intent-dependent
    /// parameter pair: `x`+`y` for coordinates, `name_part` for names,
    /// `id_part` for IDs. Coordinate values are not re-validated here, the
    /// classifier already guaranteed they parse.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("database", self.database.clone()),
        ];
        match &self.intent {
            SearchIntent::Coordinates { x, y } => {
                params.push(("x", x.to_string()));
                params.push(("y", y.to_string()));
            }
            SearchIntent::Name(value) => params.push(("name_part", value.clone())),
            SearchIntent::Id(value) => params.push(("id_part", value.clone())),
        }
        params
    }

    /// The URL-encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
