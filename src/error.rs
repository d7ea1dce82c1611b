use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoScoreError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("採点エラー: {0}")]
    Session(#[from] photo_score_common::Error),

    #[error("スクリプト {line}行目: {message}")]
    Script { line: usize, message: String },

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, PhotoScoreError>;
