use std::fmt;

use crate::domain::value_objects::{
    branch_name::BranchName, commit_hash::CommitHash, repository_name::RepositoryName,
};

/// コミットの取得元となったブランチの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSource {
    /// 要求されたブランチ
    Requested,
    /// 要求されたブランチが無かったため使用した既定ブランチ
    Default,
}

/// マニフェストの1行分（リポジトリ名、コミット、使用したブランチ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// リポジトリ名
    pub name: RepositoryName,

    /// ブランチの先頭コミット
    pub commit: CommitHash,

    /// 実際に使用したブランチ
    pub branch: BranchName,

    /// ブランチの取得元
    pub source: BranchSource,
}

impl ManifestEntry {
    /// 新しいManifestEntryを作成
    pub fn new(
        name: RepositoryName,
        commit: CommitHash,
        branch: BranchName,
        source: BranchSource,
    ) -> Self {
        Self {
            name,
            commit,
            branch,
            source,
        }
    }

    /// 既定ブランチにフォールバックしたか
    pub fn used_default_branch(&self) -> bool {
        self.source == BranchSource::Default
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.commit, self.branch)
    }
}
