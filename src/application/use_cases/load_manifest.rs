use std::path::Path;
use tracing::{info, warn};

use crate::common::result::BootstrapResult;
use crate::domain::entities::catalog::Catalog;
use crate::domain::value_objects::repository_name::RepositoryName;
use crate::infrastructure::filesystem::ExclusionStore;
use crate::infrastructure::http::CatalogSource;

/// マニフェスト対象のリポジトリ一覧を読み込むユースケース
///
/// 除外リストの読み込み失敗は致命的エラーとする。カタログの取得失敗や
/// 空のカタログは空の一覧として扱い、処理は継続する。
pub struct LoadManifestUseCase {
    catalog: Box<dyn CatalogSource>,
    exclusion_store: ExclusionStore,
    repository_suffix: String,
}

impl LoadManifestUseCase {
    /// 新しいインスタンスを作成
    pub fn new(catalog: Box<dyn CatalogSource>, repository_suffix: impl Into<String>) -> Self {
        Self {
            catalog,
            exclusion_store: ExclusionStore::new(),
            repository_suffix: repository_suffix.into(),
        }
    }

    /// 除外リストを適用したリポジトリ名をカタログ順に返す
    pub async fn execute(&self, exclusion_path: &Path) -> BootstrapResult<Vec<RepositoryName>> {
        // 除外リストを先に読み、設定ミスの場合はネットワークに触れずに終了する
        let exclusions = self.exclusion_store.read(exclusion_path).await?;

        let catalog = match self.catalog.fetch_listing().await {
            Ok(body) => Catalog::parse(&body),
            Err(e) => {
                warn!(error = %e, "repository catalog unavailable");
                Catalog::default()
            }
        };

        if catalog.is_empty() {
            warn!("repository catalog is empty, nothing to resolve");
        }

        let repositories = catalog.select(&exclusions, &self.repository_suffix);
        info!(
            catalog = catalog.entries().len(),
            excluded = exclusions.len(),
            selected = repositories.len(),
            "loaded repository list"
        );

        Ok(repositories)
    }
}
