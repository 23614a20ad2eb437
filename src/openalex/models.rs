//! Models for the OpenAlex API
//!
//! Only the fields this crate reads are modelled. Every field is optional so
//! that sparse or partially hydrated records still deserialize.

use serde::Deserialize;

/// Placeholder for a missing name or institution
pub const UNKNOWN: &str = "Unknown";

/// A page of results, e.g. from `/authors?search=` or `/works?filter=`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

/// Institution, as embedded in author and authorship records
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Institution {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Author record from `/authors` or `/authors/{id}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Author {
    /// e.g. `https://openalex.org/A5023888391`
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Deprecated upstream in favour of `last_known_institutions`, still served
    #[serde(default)]
    pub last_known_institution: Option<Institution>,
    #[serde(default)]
    pub last_known_institutions: Option<Vec<Institution>>,
    /// e.g. `https://api.openalex.org/works?filter=author.id:A5023888391`
    #[serde(default)]
    pub works_api_url: Option<String>,
}

impl Author {
    /// Display name, or `"Unknown"`
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Last known institution, if any is recorded
    pub fn institution_name(&self) -> Option<&str> {
        self.last_known_institution
            .as_ref()
            .and_then(|inst| inst.display_name.as_deref())
            .or_else(|| {
                self.last_known_institutions
                    .as_ref()?
                    .iter()
                    .find_map(|inst| inst.display_name.as_deref())
            })
    }

    /// Last known institution, or `"Unknown"`
    pub fn institution(&self) -> &str {
        self.institution_name().unwrap_or(UNKNOWN)
    }

    /// Works listing URL, ignoring an empty value
    pub fn works_url(&self) -> Option<&str> {
        self.works_api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// Work record from a works listing
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub authorships: Vec<Authorship>,
}

/// Link between a work and one of its authors
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Authorship {
    #[serde(default)]
    pub author: Option<Author>,
    /// Institutions the author listed on this work
    #[serde(default)]
    pub institutions: Vec<Institution>,
}

impl Authorship {
    /// Co-author id, ignoring an empty value
    pub fn author_id(&self) -> Option<&str> {
        self.author
            .as_ref()?
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or(UNKNOWN, Author::name)
    }

    /// The author's last known institution, else the first institution
    /// listed on this work, else `"Unknown"`
    pub fn institution(&self) -> &str {
        self.author
            .as_ref()
            .and_then(Author::institution_name)
            .or_else(|| {
                self.institutions
                    .iter()
                    .find_map(|inst| inst.display_name.as_deref())
            })
            .unwrap_or(UNKNOWN)
    }
}
