use async_trait::async_trait;
use tracing::debug;

use super::advertisement::DetachedRemote;
use super::ref_lister::{RefListError, RemoteHead, RemoteRefLister};
use crate::domain::value_objects::branch_name::HEADS_PREFIX;

/// Remote head listing backed by libgit2
///
/// Each call opens a detached remote, so no local repository is needed.
/// SSH remotes authenticate through the running ssh-agent.
#[derive(Debug, Default, Clone)]
pub struct Git2RefLister;

impl Git2RefLister {
    pub fn new() -> Self {
        Self
    }

    fn list_heads_blocking(url: &str) -> Result<Vec<RemoteHead>, RefListError> {
        let mut remote = DetachedRemote::create(url).map_err(|source| {
            RefListError::InvalidRemote {
                url: url.to_string(),
                source,
            }
        })?;

        remote
            .connect()
            .map_err(|source| RefListError::ConnectFailed {
                url: url.to_string(),
                source,
            })?;

        let heads = remote
            .advertised_refs()
            .map_err(|source| RefListError::ListFailed {
                url: url.to_string(),
                source,
            })?
            .into_iter()
            .filter(|advertised| Self::is_branch_head(&advertised.name))
            .map(|advertised| RemoteHead::new(advertised.name, advertised.oid.into()))
            .collect::<Vec<_>>();

        debug!(url, count = heads.len(), "listed remote branch heads");
        Ok(heads)
    }

    /// Branch heads only: no tags, no symbolic HEAD, no peeled entries
    fn is_branch_head(name: &str) -> bool {
        name.starts_with(HEADS_PREFIX) && !name.ends_with("^{}")
    }
}

#[async_trait]
impl RemoteRefLister for Git2RefLister {
    async fn list_heads(&self, url: &str) -> Result<Vec<RemoteHead>, RefListError> {
        let url = url.to_string();
        tokio::task::spawn_blocking(move || Self::list_heads_blocking(&url))
            .await
            .map_err(|e| RefListError::TaskFailed(e.to_string()))?
    }
}
