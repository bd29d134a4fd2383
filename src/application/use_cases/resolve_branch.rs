use thiserror::Error;
use tracing::debug;

use crate::domain::entities::manifest::{BranchSource, ManifestEntry};
use crate::domain::value_objects::{
    branch_name::BranchName, commit_hash::CommitHash, remote_url_template::RemoteUrlTemplate,
    repository_name::RepositoryName,
};
use crate::infrastructure::git::{RefListError, RemoteRefLister};

/// リポジトリ単位の解決失敗
///
/// どちらも実行全体を止めることはなく、呼び出し側でエラー出力に記録される。
#[derive(Debug, Error)]
pub enum LookupFailure {
    /// 要求ブランチも既定ブランチも存在しない
    #[error("Failed to find git hash code for: {repository}")]
    NotFound { repository: RepositoryName },

    /// リモートへの問い合わせ自体が失敗した
    #[error("IOError whilst acquiring git hash code for: {repository}")]
    Transport {
        repository: RepositoryName,
        #[source]
        source: RefListError,
    },
}

impl LookupFailure {
    /// 失敗したリポジトリ名
    pub fn repository(&self) -> &RepositoryName {
        match self {
            Self::NotFound { repository } | Self::Transport { repository, .. } => repository,
        }
    }

    /// 通信エラーによる失敗か
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// リポジトリのブランチ先頭コミットを解決するユースケース
pub struct ResolveBranchUseCase {
    lister: Box<dyn RemoteRefLister>,
    url_template: RemoteUrlTemplate,
}

impl ResolveBranchUseCase {
    /// 新しいインスタンスを作成
    pub fn new(lister: Box<dyn RemoteRefLister>, url_template: RemoteUrlTemplate) -> Self {
        Self {
            lister,
            url_template,
        }
    }

    /// 要求ブランチ、無ければ既定ブランチのコミットを解決する
    ///
    /// 参照名は `refs/heads/<branch>` と完全一致で比較する。
    /// 要求ブランチの問い合わせで通信エラーが起きた場合は既定ブランチを試さない。
    pub async fn resolve(
        &self,
        name: &RepositoryName,
        requested: &BranchName,
        default: &BranchName,
    ) -> Result<ManifestEntry, LookupFailure> {
        let url = self.url_template.render(name);
        let transport = |source: RefListError| LookupFailure::Transport {
            repository: name.clone(),
            source,
        };

        if let Some(commit) = self.find_head(&url, requested).await.map_err(transport)? {
            return Ok(ManifestEntry::new(
                name.clone(),
                commit,
                requested.clone(),
                BranchSource::Requested,
            ));
        }

        if default != requested {
            if let Some(commit) = self.find_head(&url, default).await.map_err(transport)? {
                return Ok(ManifestEntry::new(
                    name.clone(),
                    commit,
                    default.clone(),
                    BranchSource::Default,
                ));
            }
        }

        Err(LookupFailure::NotFound {
            repository: name.clone(),
        })
    }

    async fn find_head(
        &self,
        url: &str,
        branch: &BranchName,
    ) -> Result<Option<CommitHash>, RefListError> {
        debug!(url, head = %branch.head_ref(), "querying remote branch heads");

        let heads = self.lister.list_heads(url).await?;
        Ok(heads
            .into_iter()
            .find(|head| branch.matches_ref(&head.name))
            .map(|head| head.commit))
    }
}
