//! Co-authorship network of one researcher
//!
//! Two sequential OpenAlex calls: the author record, then the first page of
//! the author's works. Co-authors found in those works are tallied and can be
//! rendered as a ranked node-link graph or as a flat tree.

pub mod graph;
pub use graph::*;
pub mod tally;
pub use tally::*;
pub mod tree;
pub use tree::*;

use crate::{
    error::{Error, Result},
    openalex::{AuthorIdParam, OpenAlex, WorksParam},
    utils::profile_url_from_works,
};

/// The researcher whose network is built
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    /// Id as requested by the caller
    pub id: String,
    pub name: String,
    pub institution: String,
    /// Author listing URL derived from `works_url`
    pub profile_url: String,
    pub works_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoauthorNetwork {
    pub subject: Subject,
    pub tally: CollaboratorTally,
}

impl CoauthorNetwork {
    /// Looks up `researcher_id`, fetches up to one page of its works and
    /// tallies the co-authors.
    pub async fn fetch(client: &OpenAlex, researcher_id: &str) -> Result<Self> {
        let param = AuthorIdParam::new(researcher_id)?;
        let author = client.query(&param).await?;

        let works_url = author
            .works_url()
            .ok_or_else(|| Error::InvalidWorksUrl(format!("author {} has none", param.id())))?
            .to_owned();
        let subject = Subject {
            id: researcher_id.trim().to_owned(),
            name: author.name().to_owned(),
            institution: author.institution().to_owned(),
            profile_url: profile_url_from_works(&works_url),
            works_url,
        };

        let works = client.query(&WorksParam::new(&subject.works_url)?).await?;
        let subject_key = author
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(param.id());
        let tally = CollaboratorTally::from_works(subject_key, &works, client.base_url());
        tracing::debug!(
            researcher = %subject.id,
            works = works.len(),
            collaborators = tally.len(),
            "tallied co-authors"
        );

        Ok(Self { subject, tally })
    }

    /// Subject plus its [`TOP_COLLABORATORS`] most frequent collaborators
    pub fn graph(&self) -> NodeLinkGraph {
        NodeLinkGraph::star(&self.subject, &self.tally, TOP_COLLABORATORS)
    }

    /// Subject with every collaborator as a child
    pub fn tree(&self) -> CoauthorTree {
        CoauthorTree::new(&self.subject, &self.tally)
    }
}
