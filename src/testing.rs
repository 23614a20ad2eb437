//! In-process stand-in for the OpenAlex API, bound to an ephemeral port.

use crate::{
    config::OpenAlexConfig,
    openalex::client::OpenAlex,
    utils::{same_id, short_id},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::{collections::HashMap, sync::Arc};
use tokio::{net::TcpListener, task::JoinHandle};

/// `{"id": "https://openalex.org/{id}", "display_name": name}`
pub(crate) fn author(id: &str, name: &str) -> Value {
    json!({
        "id": format!("https://openalex.org/{id}"),
        "display_name": name,
    })
}

/// A work whose authorships list the given `(id, name)` pairs in order
pub(crate) fn work(authors: &[(&str, &str)]) -> Value {
    let authorships: Vec<Value> = authors
        .iter()
        .map(|(id, name)| {
            json!({
                "author": {
                    "id": format!("https://openalex.org/{id}"),
                    "display_name": name,
                },
                "institutions": [],
            })
        })
        .collect();
    json!({ "authorships": authorships })
}

#[derive(Debug, Default)]
pub(crate) struct FakeOpenAlexBuilder {
    authors: Vec<(String, Value)>,
    works: HashMap<String, Vec<Value>>,
    fail_search: bool,
    fail_works: bool,
}

impl FakeOpenAlexBuilder {
    /// Served at `/authors/{short id}`. Authors without a `works_api_url` key
    /// get one pointing at the fake.
    pub(crate) fn author(self, author: Value) -> Self {
        let key = author["id"].as_str().map(short_id).unwrap_or_default().to_owned();
        self.author_at(&key, author)
    }

    /// Like [`Self::author`] but served at `/authors/{key}` whatever the
    /// record's own `id` says.
    pub(crate) fn author_at(mut self, key: &str, author: Value) -> Self {
        self.authors.push((key.to_owned(), author));
        self
    }

    pub(crate) fn work(mut self, author_id: &str, work: Value) -> Self {
        self.works
            .entry(author_id.to_owned())
            .or_default()
            .push(work);
        self
    }

    /// Make `/authors?search=` answer 503.
    pub(crate) fn fail_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Make `/works` answer 503.
    pub(crate) fn fail_works(mut self) -> Self {
        self.fail_works = true;
        self
    }

    pub(crate) async fn start(self) -> FakeOpenAlex {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let fixtures = Arc::new(Fixtures {
            base_url: base_url.clone(),
            authors: self.authors,
            works: self.works,
            fail_search: self.fail_search,
            fail_works: self.fail_works,
        });
        let app = Router::new()
            .route("/authors", get(search_authors))
            .route("/authors/{id}", get(get_author))
            .route("/works", get(list_works))
            .with_state(fixtures);
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        FakeOpenAlex { base_url, task }
    }
}

pub(crate) struct FakeOpenAlex {
    base_url: String,
    task: JoinHandle<()>,
}

impl FakeOpenAlex {
    pub(crate) fn builder() -> FakeOpenAlexBuilder {
        FakeOpenAlexBuilder::default()
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn client(&self) -> OpenAlex {
        OpenAlex::new(&OpenAlexConfig::with_base_url(&self.base_url)).unwrap()
    }
}

impl Drop for FakeOpenAlex {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct Fixtures {
    base_url: String,
    authors: Vec<(String, Value)>,
    works: HashMap<String, Vec<Value>>,
    fail_search: bool,
    fail_works: bool,
}

impl Fixtures {
    fn hydrate(&self, (key, author): &(String, Value)) -> Value {
        let mut author = author.clone();
        if let Some(fields) = author.as_object_mut()
            && !fields.contains_key("works_api_url")
        {
            fields.insert(
                "works_api_url".to_owned(),
                json!(format!("{}/works?filter=author.id:{key}", self.base_url)),
            );
        }
        author
    }
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
}

fn page_size_is(params: &HashMap<String, String>, expected: &str) -> bool {
    params.get("per-page").map(String::as_str) == Some(expected)
}

async fn search_authors(
    State(fixtures): State<Arc<Fixtures>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if fixtures.fail_search {
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable").into_response();
    }
    if !page_size_is(&params, "10") {
        return bad_request("expected per-page=10");
    }
    let needle = params
        .get("search")
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    let results: Vec<Value> = fixtures
        .authors
        .iter()
        .filter(|(_, author)| {
            author["display_name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .take(10)
        .map(|author| fixtures.hydrate(author))
        .collect();
    Json(json!({ "meta": { "count": results.len() }, "results": results })).into_response()
}

async fn get_author(State(fixtures): State<Arc<Fixtures>>, Path(id): Path<String>) -> Response {
    let found = fixtures
        .authors
        .iter()
        .find(|(key, _)| same_id(key, &id));
    match found {
        Some(author) => Json(fixtures.hydrate(author)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not Found", "message": format!("{id} does not exist") })),
        )
            .into_response(),
    }
}

async fn list_works(
    State(fixtures): State<Arc<Fixtures>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if fixtures.fail_works {
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable").into_response();
    }
    if !page_size_is(&params, "100") {
        return bad_request("expected per-page=100");
    }
    let author_id = params
        .get("filter")
        .and_then(|filter| filter.strip_prefix("author.id:"))
        .unwrap_or_default();
    let results = fixtures.works.get(author_id).cloned().unwrap_or_default();
    Json(json!({ "meta": { "count": results.len() }, "results": results })).into_response()
}
