use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::edge::EdgeClient;
use crate::error::EdgeError;

pub const SEARCH_FUNCTION: &str = "search-engine";

/// Full-text query. Ranking and faceting happen server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    /// Restrict hits to these kinds (e.g. `cronjob`, `project`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn of_type(mut self, kind: impl Into<String>) -> Self {
        self.types.push(kind.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct SearchService {
    client: EdgeClient,
}

impl SearchService {
    pub fn new(client: EdgeClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, EdgeError> {
        if query.query.trim().is_empty() {
            return Ok(SearchResults::default());
        }
        self.client.invoke(SEARCH_FUNCTION, "search", query).await
    }

    /// Completion candidates for a partially typed query.
    pub async fn suggest(&self, prefix: &str, limit: u32) -> Result<Vec<String>, EdgeError> {
        if prefix.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.client
            .invoke(SEARCH_FUNCTION, "suggest", &json!({ "prefix": prefix, "limit": limit }))
            .await
    }
}
