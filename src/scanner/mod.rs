mod exif;

use crate::error::{PhotoScoreError, Result};
use photo_score_common::SourceFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 表示用の画像メタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub width: u32,
    pub height: u32,
    pub date: Option<String>,
}

/// 拡張子から推測したメディアタイプ（不明なら空文字）
pub fn media_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default()
        .to_string()
}

/// フォルダ内のファイルを選択一覧として集める
///
/// 画像かどうかの判定と並べ替えはローダー側で行う。
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<SourceFile<PathBuf>>> {
    if !folder.is_dir() {
        return Err(PhotoScoreError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        files.push(SourceFile::new(name, media_type_for(path), path.to_path_buf()));
    }

    tracing::debug!(folder = %folder.display(), files = files.len(), "folder scanned");
    Ok(files)
}

/// 画像サイズと撮影日時を読む
pub fn read_meta(path: &Path) -> Result<ImageMeta> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| PhotoScoreError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    let date = exif::extract_date(path).ok();
    Ok(ImageMeta { width, height, date })
}
