//! 利用者名（CSVファイル名に使う）

use crate::error::{Error, Result};

/// 出力前に必須となる利用者名
///
/// 一度設定されたら自動では消えない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityGate {
    name: Option<String>,
}

impl IdentityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力された名前を設定する。空白のみなら拒否し、既存の名前は残す。
    pub fn submit(&mut self, raw: &str) -> Result<&str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::IdentityRequired);
        }
        tracing::debug!(identity = %trimmed, "identity set");
        Ok(self.name.insert(trimmed.to_string()).as_str())
    }

    /// 名前を要求する。未設定なら `IdentityRequired`。
    pub fn require(&self) -> Result<&str> {
        self.name.as_deref().ok_or(Error::IdentityRequired)
    }

    pub fn is_set(&self) -> bool {
        self.name.is_some()
    }
}
