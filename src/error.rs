#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    OpenAlexRequestFailed(#[from] crate::openalex::client::RequestFailedError),
    #[error("{0}")]
    ReqwestError(String),
    #[error("No usable works listing: {0}")]
    InvalidWorksUrl(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Whether the error came from talking to OpenAlex: a transport failure,
    /// a non-success status, or a response that could not be used.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::OpenAlexRequestFailed(_) | Error::ReqwestError(_) | Error::InvalidWorksUrl(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::ReqwestError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
