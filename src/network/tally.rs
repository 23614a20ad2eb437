use crate::{
    openalex::models::Work,
    utils::{author_url, same_id},
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A co-author of the subject researcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    pub institution: String,
    /// `{base}/authors/{short id}`
    pub profile_url: String,
    /// Number of works shared with the subject
    pub count: u32,
}

/// Co-authors of one researcher, keyed by OpenAlex id and kept in order of
/// first appearance. The subject never appears in the tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollaboratorTally {
    entries: Vec<Collaborator>,
    index: HashMap<String, usize>,
}

impl CollaboratorTally {
    /// Counts, for every co-author in `works`, the number of works they share
    /// with `subject_id`. Authorships without an id are ignored, and an author
    /// listed twice on the same work counts once for it.
    pub fn from_works(subject_id: &str, works: &[Work], base_url: &str) -> Self {
        let mut tally = Self::default();
        for work in works {
            let mut seen = HashSet::new();
            for authorship in &work.authorships {
                let Some(id) = authorship.author_id() else {
                    continue;
                };
                if same_id(id, subject_id) || !seen.insert(id) {
                    continue;
                }
                tally.record(id, || Collaborator {
                    id: id.to_owned(),
                    name: authorship.author_name().to_owned(),
                    institution: authorship.institution().to_owned(),
                    profile_url: author_url(base_url, id),
                    count: 0,
                });
            }
        }
        tally
    }

    /// Bumps the count for `id`, creating the entry on first sight.
    fn record<F>(&mut self, id: &str, first_seen: F)
    where
        F: FnOnce() -> Collaborator,
    {
        let pos = match self.index.get(id) {
            Some(&pos) => pos,
            None => {
                self.entries.push(first_seen());
                self.index.insert(id.to_owned(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[pos].count += 1;
    }

    pub fn get(&self, id: &str) -> Option<&Collaborator> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collaborators in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = &Collaborator> {
        self.entries.iter()
    }

    /// The `n` most frequent collaborators. Ties keep first-appearance order.
    pub fn top(&self, n: usize) -> Vec<&Collaborator> {
        let mut ranked: Vec<&Collaborator> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
