use crate::domain::value_objects::{
    branch_name::BranchName, remote_url_template::RemoteUrlTemplate,
};

/// リポジトリカタログを提供するCGIのURL
pub const DEFAULT_CATALOG_URL: &str = "http://dev.lsstcorp.org/cgi-bin/build/repolist.cgi";

/// 要求されたブランチが無い場合に使用するブランチ
pub const DEFAULT_FALLBACK_BRANCH: &str = "master";

/// カタログのエントリに付くサフィックス
pub const DEFAULT_REPOSITORY_SUFFIX: &str = ".git";

/// カタログ取得時のHTTPタイムアウト（秒）
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// マニフェスト生成の設定
///
/// CLIからは常に既定値で使用される。ライブラリ利用者やテストは
/// `with_*` で個別に上書きできる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// リポジトリカタログのURL
    pub catalog_url: String,

    /// リモートURLのテンプレート
    pub remote_url_template: RemoteUrlTemplate,

    /// フォールバック先のブランチ
    pub default_branch: BranchName,

    /// カタログのエントリから取り除くサフィックス
    pub repository_suffix: String,

    /// カタログ取得のタイムアウト（秒）
    pub http_timeout_secs: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            remote_url_template: RemoteUrlTemplate::default(),
            default_branch: BranchName::new(DEFAULT_FALLBACK_BRANCH),
            repository_suffix: DEFAULT_REPOSITORY_SUFFIX.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl BootstrapConfig {
    /// 既定値で作成
    pub fn new() -> Self {
        Self::default()
    }

    /// カタログURLを設定
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// リモートURLテンプレートを設定
    pub fn with_remote_url_template(mut self, template: impl Into<String>) -> Self {
        self.remote_url_template = RemoteUrlTemplate::new(template);
        self
    }

    /// フォールバック先のブランチを設定
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = BranchName::new(branch);
        self
    }

    /// サフィックスを設定
    pub fn with_repository_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.repository_suffix = suffix.into();
        self
    }

    /// タイムアウトを設定
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }
}
