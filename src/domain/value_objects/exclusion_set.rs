use std::collections::HashSet;

use crate::domain::value_objects::repository_name::RepositoryName;

/// 処理対象から除外するリポジトリ名の集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// 空白区切りのテキストから作成
    pub fn parse(content: &str) -> Self {
        content.split_whitespace().collect()
    }

    /// カタログのエントリが除外対象か
    ///
    /// 除外リストには `afw.git` と `afw` のどちらの書き方も使えるため、
    /// 生のエントリとサフィックス除去後の名前の両方で照合する。
    pub fn excludes(&self, raw_entry: &str, name: &RepositoryName) -> bool {
        self.names.contains(raw_entry) || self.names.contains(name.as_str())
    }

    /// 除外名の数
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
