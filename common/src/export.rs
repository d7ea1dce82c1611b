//! CSV出力
//!
//! 出力形式（UTF-8, BOM付き, 改行はCRLF）:
//!
//! ```text
//! \u{FEFF}photo,score
//! a,5
//! b,1
//! ```
//!
//! ファイル名は `<利用者名><接尾辞>.csv`（接尾辞の既定値は `_점수`）。

use crate::error::{Error, Result};
use crate::scores::ScoreStore;
use crate::types::ImageSet;

pub const BOM: &str = "\u{FEFF}";
pub const HEADER: &str = "photo,score";
pub const LINE_END: &str = "\r\n";
pub const DEFAULT_FILE_SUFFIX: &str = "_점수";
pub const MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// 出力オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub file_suffix: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
        }
    }
}

/// 生成されたCSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn as_str(&self) -> &str {
        // bytes は常に String から作られる
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// 出力ファイル名
///
/// ファイル名に使えない文字は `_` に置き換える。
pub fn file_name_for(identity: &str, options: &CsvOptions) -> String {
    let safe: String = identity
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}{}.csv", safe, options.file_suffix)
}

/// カンマ・引用符・改行を含むフィールドだけ引用符で囲む
fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// 写真セットと点数からCSVを生成する
///
/// 空セット・未採点の写真・利用者名なしはいずれも呼び出し側の誤りとして
/// エラーを返し、部分的なファイルは作らない。
pub fn export_csv<H>(
    images: &ImageSet<H>,
    scores: &ScoreStore,
    identity: &str,
    options: &CsvOptions,
) -> Result<CsvExport> {
    if images.is_empty() {
        return Err(Error::EmptySelection);
    }
    if identity.trim().is_empty() {
        return Err(Error::IdentityRequired);
    }

    let mut csv = String::with_capacity(BOM.len() + HEADER.len() + images.len() * 16);
    csv.push_str(BOM);
    csv.push_str(HEADER);
    csv.push_str(LINE_END);

    for item in images {
        let score = scores.get(&item.base_name).ok_or_else(|| Error::Incomplete {
            unscored: scores.unscored_count(images),
        })?;
        csv.push_str(&escape_field(&item.base_name));
        csv.push(',');
        csv.push_str(&score.to_string());
        csv.push_str(LINE_END);
    }

    let file_name = file_name_for(identity, options);
    tracing::info!(file = %file_name, rows = images.len(), "csv exported");

    Ok(CsvExport {
        file_name,
        bytes: csv.into_bytes(),
    })
}
