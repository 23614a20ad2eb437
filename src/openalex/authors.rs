//! Author endpoints
//!
//! `GET /authors?search={query}&per-page={n}`
//!
//! `GET /authors/{id}`

use crate::{
    error::{Error, Result},
    openalex::{
        client::{OpenAlex, Query, build_request, read_json},
        models::{Author, ListResponse},
    },
    utils::short_id,
};
use serde::Serialize;

/// Number of candidates returned by an author search
pub const SEARCH_PAGE_SIZE: u8 = 10;

/// Query parameters for the author search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSearchParam {
    /// Free-text query matched against author names. May be empty.
    pub search: String,
    /// Page size
    #[serde(rename = "per-page")]
    pub per_page: u8,
}

impl AuthorSearchParam {
    pub fn new(search: &str) -> Self {
        Self {
            search: search.to_owned(),
            per_page: SEARCH_PAGE_SIZE,
        }
    }
}

impl Query for AuthorSearchParam {
    type Response = Vec<Author>;

    async fn query(&self, client: &OpenAlex) -> Result<Self::Response> {
        let url = client.endpoint(&["authors"])?;
        tracing::debug!(search = %self.search, "searching OpenAlex authors");
        let resp = build_request(client, url).query(self).send().await?;
        Ok(read_json::<ListResponse<Author>>(resp).await?.results)
    }
}

/// Single author lookup
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorIdParam {
    id: String,
}

impl AuthorIdParam {
    /// Accepts a bare id (`A5023888391`) or a full OpenAlex id URL.
    pub fn new(id: &str) -> Result<Self> {
        let id = short_id(id);
        if id.is_empty() {
            return Err(Error::InvalidParameter("researcher id is empty".to_owned()));
        }
        Ok(Self { id: id.to_owned() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Query for AuthorIdParam {
    type Response = Author;

    async fn query(&self, client: &OpenAlex) -> Result<Self::Response> {
        let url = client.endpoint(&["authors", &self.id])?;
        tracing::debug!(id = %self.id, "fetching OpenAlex author");
        let resp = build_request(client, url).send().await?;
        read_json(resp).await
    }
}
