use std::fmt;

/// コミットハッシュの値オブジェクト（40桁の16進文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitHash {
    hex: String,
}

impl CommitHash {
    /// 16進文字列から作成
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }

    /// ハッシュを文字列として取得
    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl From<git2::Oid> for CommitHash {
    fn from(oid: git2::Oid) -> Self {
        Self::new(oid.to_string())
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_oid() {
        let oid = git2::Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap();
        let hash = CommitHash::from(oid);
        assert_eq!(hash.as_str(), "0123456789abcdef0123456789abcdef01234567");
        assert_eq!(hash.to_string().len(), 40);
    }
}
