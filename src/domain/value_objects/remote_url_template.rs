use std::fmt;

use crate::domain::value_objects::repository_name::RepositoryName;

/// テンプレート中でリポジトリ名に置き換えられるプレースホルダ
pub const NAME_PLACEHOLDER: &str = "{name}";

/// 既定のリモートURLテンプレート
pub const DEFAULT_REMOTE_URL_TEMPLATE: &str = "git@git.lsstcorp.org:LSST/DMS/{name}.git";

/// リポジトリ名からリモートURLを組み立てるテンプレート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrlTemplate {
    template: String,
}

impl RemoteUrlTemplate {
    /// 新しいテンプレートを作成
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// テンプレートにプレースホルダが含まれているか
    pub fn has_placeholder(&self) -> bool {
        self.template.contains(NAME_PLACEHOLDER)
    }

    /// リポジトリのリモートURLを生成
    pub fn render(&self, name: &RepositoryName) -> String {
        self.template.replace(NAME_PLACEHOLDER, name.as_str())
    }

    /// テンプレート文字列を取得
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for RemoteUrlTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE_URL_TEMPLATE)
    }
}

impl fmt::Display for RemoteUrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let template = RemoteUrlTemplate::default();
        let url = template.render(&RepositoryName::new("afw"));
        assert_eq!(url, "git@git.lsstcorp.org:LSST/DMS/afw.git");
    }

    #[test]
    fn test_local_path_template() {
        let template = RemoteUrlTemplate::new("/srv/git/{name}.git");
        assert!(template.has_placeholder());
        assert_eq!(
            template.render(&RepositoryName::new("daf_base")),
            "/srv/git/daf_base.git"
        );
    }

    #[test]
    fn test_template_without_placeholder() {
        let template = RemoteUrlTemplate::new("https://example.com/fixed.git");
        assert!(!template.has_placeholder());
        assert_eq!(
            template.render(&RepositoryName::new("anything")),
            "https://example.com/fixed.git"
        );
    }
}
