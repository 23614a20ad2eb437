use crate::{
    config::OpenAlexConfig,
    error::{Error, Result},
};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// OpenAlex API client
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct OpenAlex {
    base_url: String,
    mailto: Option<String>,
    client: Client,
}

impl Default for OpenAlex {
    fn default() -> Self {
        let config = OpenAlexConfig::default();
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .user_agent(APP_USER_AGENT)
                .build()
                .unwrap_or_default(),
            base_url: config.base_url,
            mailto: config.mailto,
        }
    }
}

impl OpenAlex {
    pub fn new(config: &OpenAlexConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidParameter(format!("base url {}: {e}", config.base_url)))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(APP_USER_AGENT)
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            mailto: config.mailto.clone(),
            client,
        })
    }

    /// Create a client that identifies itself with a contact address
    pub fn with_mailto(mailto: &str) -> Self {
        Self {
            mailto: Some(mailto.to_owned()),
            ..Self::default()
        }
    }

    /// API root, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn mailto(&self) -> Option<&str> {
        self.mailto.as_deref()
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// `{base}/{segments...}` with each segment percent-encoded
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::Internal(format!("base url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Internal(format!("base url {} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn query<Q: Query>(&self, query: &Q) -> Result<Q::Response> {
        query.query(self).await
    }
}

pub trait Query {
    type Response;

    fn query(
        &self,
        client: &OpenAlex,
    ) -> impl std::future::Future<Output = Result<Self::Response>> + Send;
}

/// Non-success answer from OpenAlex
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("OpenAlex returned {status}: {error}")]
pub struct RequestFailedError {
    pub status: u16,
    pub error: String,
}

pub(crate) fn build_request(client: &OpenAlex, url: Url) -> RequestBuilder {
    let mut req_builder = client.client().get(url);
    if let Some(mailto) = client.mailto() {
        req_builder = req_builder.query(&[("mailto", mailto)]);
    }
    req_builder
}

/// Decode a successful response, or turn any other status into a
/// [`RequestFailedError`].
pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp.json::<T>().await?)
    } else {
        Err(RequestFailedError {
            status: status.as_u16(),
            error: resp.text().await?,
        }
        .into())
    }
}
