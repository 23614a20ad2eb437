//! Researcher search by name

use crate::{
    error::Result,
    openalex::{Author, AuthorSearchParam, OpenAlex},
    utils::profile_url_from_works,
};
use serde::Serialize;

/// Search candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Researcher {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub profile_url: Option<String>,
}

impl Researcher {
    /// `None` for records without an id.
    pub fn from_author(author: &Author) -> Option<Self> {
        let id = author.id.as_deref().filter(|id| !id.trim().is_empty())?;
        Some(Self {
            id: id.to_owned(),
            name: author.name().to_owned(),
            institution: author.institution().to_owned(),
            profile_url: author.works_url().map(profile_url_from_works),
        })
    }
}

/// Up to ten researchers matching `query`, in OpenAlex's order.
pub async fn search_researchers(client: &OpenAlex, query: &str) -> Result<Vec<Researcher>> {
    let authors = client.query(&AuthorSearchParam::new(query)).await?;
    Ok(authors.iter().filter_map(Researcher::from_author).collect())
}
