use std::fmt;

/// ブランチヘッド参照のプレフィックス
pub const HEADS_PREFIX: &str = "refs/heads/";

/// Gitブランチ名の値オブジェクト
///
/// 引数として受け取った名前をそのまま保持する（検証は行わない）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName {
    name: String,
}

impl BranchName {
    /// 新しいBranchNameインスタンスを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// ブランチ名を文字列として取得
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// リモート上のヘッド参照名（`refs/heads/<name>`）を取得
    pub fn head_ref(&self) -> String {
        format!("{}{}", HEADS_PREFIX, self.name)
    }

    /// 参照名がこのブランチのヘッドと完全一致するか
    pub fn matches_ref(&self, ref_name: &str) -> bool {
        ref_name
            .strip_prefix(HEADS_PREFIX)
            .is_some_and(|branch| branch == self.name)
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
