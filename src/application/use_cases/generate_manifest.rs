use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

use super::load_manifest::LoadManifestUseCase;
use super::resolve_branch::{LookupFailure, ResolveBranchUseCase};
use crate::common::result::BootstrapResult;
use crate::domain::entities::bootstrap_config::BootstrapConfig;
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::git::Git2RefLister;
use crate::infrastructure::http::HttpCatalogClient;

/// マニフェスト生成の実行設定
#[derive(Debug, Clone)]
pub struct GenerateManifestConfig {
    /// 先頭コミットを記録したいブランチ
    pub branch: BranchName,

    /// 除外リストのパス
    pub exclusion_file: PathBuf,
}

impl GenerateManifestConfig {
    /// 新しい設定を作成
    pub fn new(branch: impl Into<String>, exclusion_file: impl Into<PathBuf>) -> Self {
        Self {
            branch: BranchName::new(branch),
            exclusion_file: exclusion_file.into(),
        }
    }
}

/// マニフェスト生成の結果集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateManifestReport {
    /// 要求ブランチから解決できた数
    pub requested_count: usize,

    /// 既定ブランチにフォールバックした数
    pub default_count: usize,

    /// どちらのブランチも見つからなかった数
    pub not_found_count: usize,

    /// 通信エラーになった数
    pub transport_error_count: usize,
}

impl GenerateManifestReport {
    /// マニフェストに出力した数
    pub fn resolved_count(&self) -> usize {
        self.requested_count + self.default_count
    }

    /// 解決できなかった数
    pub fn failure_count(&self) -> usize {
        self.not_found_count + self.transport_error_count
    }

    /// 解決を試みたリポジトリ数
    pub fn attempted_count(&self) -> usize {
        self.resolved_count() + self.failure_count()
    }

    fn record_failure(&mut self, failure: &LookupFailure) {
        if failure.is_transport() {
            self.transport_error_count += 1;
        } else {
            self.not_found_count += 1;
        }
    }
}

/// カタログの読み込みからマニフェスト出力までを1パスで行うユースケース
pub struct GenerateManifestUseCase {
    config: GenerateManifestConfig,
    loader: LoadManifestUseCase,
    resolver: ResolveBranchUseCase,
    default_branch: BranchName,
}

impl GenerateManifestUseCase {
    /// 構成済みのローダーとリゾルバーから作成
    pub fn new(
        config: GenerateManifestConfig,
        loader: LoadManifestUseCase,
        resolver: ResolveBranchUseCase,
        default_branch: BranchName,
    ) -> Self {
        Self {
            config,
            loader,
            resolver,
            default_branch,
        }
    }

    /// HTTPカタログとlibgit2を使う標準構成で作成
    pub fn from_settings(
        config: GenerateManifestConfig,
        settings: &BootstrapConfig,
    ) -> BootstrapResult<Self> {
        if !settings.remote_url_template.has_placeholder() {
            warn!(
                template = %settings.remote_url_template,
                "remote URL template has no {{name}} placeholder; every repository uses the same remote"
            );
        }

        let catalog = HttpCatalogClient::new(settings)?;
        let loader = LoadManifestUseCase::new(Box::new(catalog), &settings.repository_suffix);
        let resolver = ResolveBranchUseCase::new(
            Box::new(Git2RefLister::new()),
            settings.remote_url_template.clone(),
        );

        Ok(Self::new(
            config,
            loader,
            resolver,
            settings.default_branch.clone(),
        ))
    }

    /// マニフェストを生成する
    ///
    /// 解決できたエントリは `out` に、解決できなかったリポジトリは
    /// `FAILURE:` 行として `err` に即座に書き出す。リポジトリ単位の失敗では
    /// 中断せず、除外リストの読み込み失敗と出力先への書き込み失敗のみがエラーになる。
    pub async fn execute<O: Write, E: Write>(
        &self,
        out: &mut O,
        err: &mut E,
    ) -> BootstrapResult<GenerateManifestReport> {
        let repositories = self.loader.execute(&self.config.exclusion_file).await?;
        let mut report = GenerateManifestReport::default();

        for name in &repositories {
            match self
                .resolver
                .resolve(name, &self.config.branch, &self.default_branch)
                .await
            {
                Ok(entry) => {
                    writeln!(out, "{entry}")?;
                    out.flush()?;

                    if entry.used_default_branch() {
                        report.default_count += 1;
                    } else {
                        report.requested_count += 1;
                    }
                    info!(repository = %entry.name, branch = %entry.branch, "resolved");
                }
                Err(failure) => {
                    let repository = failure.repository();
                    match std::error::Error::source(&failure) {
                        Some(cause) => warn!(%repository, error = %cause, "lookup failed"),
                        None => warn!(%repository, "no matching branch"),
                    }
                    writeln!(err, "FAILURE: {failure}")?;
                    err.flush()?;
                    report.record_failure(&failure);
                }
            }
        }

        info!(
            attempted = report.attempted_count(),
            resolved = report.resolved_count(),
            fallback = report.default_count,
            failed = report.failure_count(),
            "manifest generation finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::commit_hash::CommitHash;
    use crate::domain::value_objects::remote_url_template::RemoteUrlTemplate;
    use crate::infrastructure::git::ref_lister::{MockRemoteRefLister, RemoteHead};
    use crate::infrastructure::git::RefListError;
    use crate::infrastructure::http::catalog_source::MockCatalogSource;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn head(branch: &str, hash: &str) -> RemoteHead {
        RemoteHead::new(format!("refs/heads/{branch}"), CommitHash::new(hash))
    }

    fn use_case(
        dir: &TempDir,
        catalog_body: &'static str,
        exclusions: &str,
        lister: MockRemoteRefLister,
    ) -> GenerateManifestUseCase {
        let exclusion_file = dir.path().join("excluded.txt");
        std::fs::write(&exclusion_file, exclusions).unwrap();

        let mut catalog = MockCatalogSource::new();
        catalog
            .expect_fetch_listing()
            .returning(move || Ok(catalog_body.to_string()));

        GenerateManifestUseCase::new(
            GenerateManifestConfig::new("release", exclusion_file),
            LoadManifestUseCase::new(Box::new(catalog), ".git"),
            ResolveBranchUseCase::new(Box::new(lister), RemoteUrlTemplate::new("{name}")),
            BranchName::new("master"),
        )
    }

    #[tokio::test]
    async fn test_manifest_with_exclusion_and_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let mut lister = MockRemoteRefLister::new();
        lister.expect_list_heads().returning(|url| match url {
            "A" => Ok(vec![head("release", "h1"), head("master", "h2")]),
            "B" => Ok(vec![head("master", "h3")]),
            "C" => Ok(vec![head("master", "h4")]),
            other => panic!("unexpected remote {other}"),
        });

        let use_case = use_case(&temp_dir, "A.git\nB.git\nC.git\n", "B\n", lister);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = use_case.execute(&mut out, &mut err).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "A h1 release\nC h4 master\n");
        assert_eq!(String::from_utf8(err).unwrap(), "");
        assert_eq!(
            report,
            GenerateManifestReport {
                requested_count: 1,
                default_count: 1,
                not_found_count: 0,
                transport_error_count: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_failures_are_reported_and_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let mut lister = MockRemoteRefLister::new();
        lister.expect_list_heads().returning(|url| match url {
            "D" => Ok(vec![head("develop", "h5")]),
            "E" => Err(RefListError::TaskFailed("connection refused".to_string())),
            "F" => Ok(vec![head("release", "h6")]),
            other => panic!("unexpected remote {other}"),
        });

        let use_case = use_case(&temp_dir, "D.git E.git F.git", "", lister);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = use_case.execute(&mut out, &mut err).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "F h6 release\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "FAILURE: Failed to find git hash code for: D\n\
             FAILURE: IOError whilst acquiring git hash code for: E\n"
        );
        assert_eq!(report.not_found_count, 1);
        assert_eq!(report.transport_error_count, 1);
        assert_eq!(report.attempted_count(), 3);
    }

    #[tokio::test]
    async fn test_missing_exclusion_file_aborts_before_resolution() {
        let mut catalog = MockCatalogSource::new();
        catalog.expect_fetch_listing().times(0);
        let mut lister = MockRemoteRefLister::new();
        lister.expect_list_heads().times(0);

        let use_case = GenerateManifestUseCase::new(
            GenerateManifestConfig::new("release", "/nonexistent/excluded.txt"),
            LoadManifestUseCase::new(Box::new(catalog), ".git"),
            ResolveBranchUseCase::new(Box::new(lister), RemoteUrlTemplate::default()),
            BranchName::new("master"),
        );

        let mut out = Vec::new();
        let mut err = Vec::new();
        let error = use_case.execute(&mut out, &mut err).await.unwrap_err();
        assert!(error.is_configuration_error());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
