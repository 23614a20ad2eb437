//! Works listing for an author
//!
//! `GET {works_api_url}&per-page={n}`, where `works_api_url` comes from the
//! author record, e.g. `https://api.openalex.org/works?filter=author.id:A5023888391`.

use crate::{
    error::{Error, Result},
    openalex::{
        client::{OpenAlex, Query, build_request, read_json},
        models::{ListResponse, Work},
    },
};
use reqwest::Url;
use serde::Serialize;

/// Number of works fetched for one author. Only the first page is read.
pub const WORKS_PAGE_SIZE: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct WorksParam {
    url: Url,
    per_page: u8,
}

#[derive(Serialize)]
struct PageSize {
    #[serde(rename = "per-page")]
    per_page: u8,
}

impl WorksParam {
    /// Wraps a works listing URL as found in [`Author::works_api_url`](crate::Author).
    pub fn new(works_url: &str) -> Result<Self> {
        let url = Url::parse(works_url.trim())
            .map_err(|e| Error::InvalidWorksUrl(format!("{works_url:?}: {e}")))?;
        Ok(Self {
            url,
            per_page: WORKS_PAGE_SIZE,
        })
    }
}

impl Query for WorksParam {
    type Response = Vec<Work>;

    async fn query(&self, client: &OpenAlex) -> Result<Self::Response> {
        tracing::debug!(url = %self.url, "fetching OpenAlex works");
        let resp = build_request(client, self.url.clone())
            .query(&PageSize {
                per_page: self.per_page,
            })
            .send()
            .await?;
        Ok(read_json::<ListResponse<Work>>(resp).await?.results)
    }
}
