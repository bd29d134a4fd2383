use std::collections::HashSet;

use crate::domain::value_objects::{
    exclusion_set::ExclusionSet, repository_name::RepositoryName,
};

/// リモートカタログから取得したリポジトリ一覧
///
/// カタログ上の順序をそのまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// 空白区切りのテキストから作成
    pub fn parse(content: &str) -> Self {
        Self {
            entries: content.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// カタログのエントリ（生の文字列）
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 除外リストを適用し、処理対象のリポジトリ名をカタログ順に返す
    ///
    /// 同じ名前が複数回現れた場合は最初の一つだけを残す。
    pub fn select(&self, exclusions: &ExclusionSet, suffix: &str) -> Vec<RepositoryName> {
        let mut seen = HashSet::new();

        self.entries
            .iter()
            .filter_map(|raw| {
                let name = RepositoryName::from_catalog_entry(raw, suffix)?;
                if exclusions.excludes(raw, &name) {
                    None
                } else {
                    Some(name)
                }
            })
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[RepositoryName]) -> Vec<&str> {
        list.iter().map(RepositoryName::as_str).collect()
    }

    #[test]
    fn test_parse_keeps_order() {
        let catalog = Catalog::parse("C.git\nA.git B.git\n");
        assert_eq!(catalog.entries(), ["C.git", "A.git", "B.git"]);
    }

    #[test]
    fn test_select_applies_exclusions_in_catalog_order() {
        let catalog = Catalog::parse("A.git\nB.git\nC.git\n");
        let exclusions = ExclusionSet::parse("B");

        let selected = catalog.select(&exclusions, ".git");
        assert_eq!(names(&selected), ["A", "C"]);
    }

    #[test]
    fn test_select_with_raw_exclusions() {
        let catalog = Catalog::parse("A.git B.git C.git");
        let exclusions = ExclusionSet::parse("A.git\nC.git");

        let selected = catalog.select(&exclusions, ".git");
        assert_eq!(names(&selected), ["B"]);
    }

    #[test]
    fn test_select_drops_duplicates() {
        let catalog = Catalog::parse("A.git B.git A.git A");
        let selected = catalog.select(&ExclusionSet::default(), ".git");
        assert_eq!(names(&selected), ["A", "B"]);
    }

    #[test]
    fn test_select_empty_catalog() {
        let catalog = Catalog::parse("");
        assert!(catalog.is_empty());
        assert!(catalog.select(&ExclusionSet::parse("A"), ".git").is_empty());
    }
}
