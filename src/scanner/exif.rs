use crate::error::{PhotoScoreError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIFの撮影日時（なければ更新日時）
pub fn extract_date(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif = exif::Reader::new()
        .read_from_container(&mut bufreader)
        .map_err(|e| PhotoScoreError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    // 撮影日時を優先
    [exif::Tag::DateTimeOriginal, exif::Tag::DateTime]
        .into_iter()
        .find_map(|tag| exif.get_field(tag, exif::In::PRIMARY))
        .map(|field| field.display_value().to_string())
        .ok_or_else(|| PhotoScoreError::ImageLoad(format!("{}: EXIFに日時がありません", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extract_date_without_exif() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("plain.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(extract_date(&path), Err(PhotoScoreError::ImageLoad(_))));
    }

    #[test]
    fn test_extract_date_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let result = extract_date(&dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(PhotoScoreError::Io(_))));
    }
}
