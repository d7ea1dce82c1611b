use crate::error::Result;
use photo_score_common::CsvExport;
use std::path::{Path, PathBuf};

/// 生成済みCSVを出力先に書き出す
pub fn write_csv(export: &CsvExport, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&export.file_name);
    std::fs::write(&path, &export.bytes)?;
    tracing::info!(path = %path.display(), "csv written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_csv_creates_dir() {
        let dir = tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("out");
        let export = CsvExport {
            file_name: "Kim_점수.csv".to_string(),
            bytes: "\u{FEFF}photo,score\r\n".as_bytes().to_vec(),
        };

        let path = write_csv(&export, &out).expect("書き出せるはず");
        assert_eq!(path, out.join("Kim_점수.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), export.bytes);
    }
}
