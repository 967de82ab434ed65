use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("organization and repo must both be non-empty (got {organization:?}/{repo:?})")]
    InvalidRepository { organization: String, repo: String },
    #[error("network error fetching contributors")]
    Network {
        #[source]
        cause: reqwest::Error,
    },
    #[error("GitHub API returned HTTP {status}")]
    Status { status: u16 },
    #[error("failed to parse contributors response")]
    Parse {
        #[source]
        cause: serde_json::Error,
    },
}

/// What a single fetch produced.
pub type FetchOutcome = Result<Vec<crate::contributor::Contributor>, FetchError>;
