use crate::network::{Subject, tally::CollaboratorTally};
use serde::Serialize;

/// One collaborator under the root; `value` is the shared-work count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeChild {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub profile_url: String,
    pub value: u32,
}

/// Subject as root with every collaborator as a child, unranked and uncapped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoauthorTree {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub profile_url: String,
    pub children: Vec<TreeChild>,
}

impl CoauthorTree {
    pub fn new(subject: &Subject, tally: &CollaboratorTally) -> Self {
        Self {
            id: subject.id.clone(),
            name: subject.name.clone(),
            institution: subject.institution.clone(),
            profile_url: subject.profile_url.clone(),
            children: tally
                .iter()
                .map(|collaborator| TreeChild {
                    id: collaborator.id.clone(),
                    name: collaborator.name.clone(),
                    institution: collaborator.institution.clone(),
                    profile_url: collaborator.profile_url.clone(),
                    value: collaborator.count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openalex::models::Work;
    use serde_json::json;

    #[test]
    fn test_keeps_every_collaborator_in_order() {
        let mut works = Vec::new();
        for i in 0..30 {
            works.push(json!({"authorships": [
                {"author": {"id": "A1"}},
                {"author": {"id": format!("C{i}"), "display_name": format!("C{i}")},
                 "institutions": [{"display_name": "Oxford"}]},
            ]}));
        }
        works.push(json!({"authorships": [{"author": {"id": "C29"}}]}));
        let works: Vec<Work> = serde_json::from_value(json!(works)).unwrap();
        let tally = CollaboratorTally::from_works("A1", &works, "https://api.openalex.org");

        let subject = Subject {
            id: "A1".to_owned(),
            name: "A. Smith".to_owned(),
            institution: "Unknown".to_owned(),
            profile_url: "https://api.openalex.org/authors?filter=author.id:A1".to_owned(),
            works_url: "https://api.openalex.org/works?filter=author.id:A1".to_owned(),
        };
        let tree = CoauthorTree::new(&subject, &tally);

        assert_eq!(tree.children.len(), 30);
        assert_eq!(tree.children[0].id, "C0");
        assert_eq!(tree.children[29].value, 2);
        assert!(tree.children[..29].iter().all(|child| child.value == 1));

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value["profile_url"], "https://api.openalex.org/authors?filter=author.id:A1");
        assert_eq!(
            value["children"][0],
            json!({
                "id": "C0",
                "name": "C0",
                "institution": "Oxford",
                "profile_url": "https://api.openalex.org/authors/C0",
                "value": 1,
            })
        );
    }
}
