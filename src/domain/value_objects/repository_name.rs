use std::fmt;

/// カタログ上のリポジトリ名の値オブジェクト
///
/// カタログのエントリ（例: `afw.git`）からリポジトリのサフィックスを
/// 取り除いた名前（例: `afw`）を保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryName {
    name: String,
}

impl RepositoryName {
    /// 名前から直接作成
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// カタログのエントリから作成
    ///
    /// 末尾の `suffix` を取り除く。サフィックスを持たないエントリはそのまま使う。
    /// サフィックスだけのエントリは名前にならないため `None` を返す。
    pub fn from_catalog_entry(raw: &str, suffix: &str) -> Option<Self> {
        let name = if suffix.is_empty() {
            raw
        } else {
            raw.strip_suffix(suffix).unwrap_or(raw)
        };

        if name.is_empty() {
            None
        } else {
            Some(Self::new(name))
        }
    }

    /// 名前を文字列として取得
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_suffix() {
        let name = RepositoryName::from_catalog_entry("afw.git", ".git").unwrap();
        assert_eq!(name.as_str(), "afw");
    }

    #[test]
    fn test_keeps_entry_without_suffix() {
        let name = RepositoryName::from_catalog_entry("afw", ".git").unwrap();
        assert_eq!(name.as_str(), "afw");
    }

    #[test]
    fn test_only_trailing_suffix_is_stripped() {
        let name = RepositoryName::from_catalog_entry("daf.git.bak", ".git").unwrap();
        assert_eq!(name.as_str(), "daf.git.bak");

        let name = RepositoryName::from_catalog_entry("a.git.git", ".git").unwrap();
        assert_eq!(name.as_str(), "a.git");
    }

    #[test]
    fn test_bare_suffix_is_not_a_name() {
        assert!(RepositoryName::from_catalog_entry(".git", ".git").is_none());
    }

    #[test]
    fn test_empty_suffix() {
        let name = RepositoryName::from_catalog_entry("afw.git", "").unwrap();
        assert_eq!(name.to_string(), "afw.git");
    }
}
