//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 入力値の検証エラー（範囲外・非数値の点数）はクランプ/クリアで
/// ローカルに回復するため、ここには現れない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No images selected")]
    EmptySelection,

    #[error("Scoring incomplete: {unscored} photo(s) have no score")]
    Incomplete { unscored: usize },

    #[error("Identity required before export")]
    IdentityRequired,

    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
