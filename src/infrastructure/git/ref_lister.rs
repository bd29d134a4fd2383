use async_trait::async_trait;
use thiserror::Error;

use crate::domain::value_objects::commit_hash::CommitHash;

/// A branch head advertised by a remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHead {
    /// Full reference name, e.g. `refs/heads/master`
    pub name: String,

    /// Commit the reference points at
    pub commit: CommitHash,
}

impl RemoteHead {
    pub fn new(name: impl Into<String>, commit: CommitHash) -> Self {
        Self {
            name: name.into(),
            commit,
        }
    }
}

/// Errors raised while listing the references of a remote
#[derive(Debug, Error)]
pub enum RefListError {
    #[error("Invalid remote {url}: {source}")]
    InvalidRemote {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to connect to {url}: {source}")]
    ConnectFailed {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to list references of {url}: {source}")]
    ListFailed {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Remote listing task failed: {0}")]
    TaskFailed(String),
}

/// Lists the branch heads of a remote repository (`git ls-remote --refs -h`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteRefLister: Send + Sync {
    /// Return every `refs/heads/*` reference advertised by the remote at `url`
    async fn list_heads(&self, url: &str) -> Result<Vec<RemoteHead>, RefListError>;
}
