use crate::error::{PhotoScoreError, Result};
use photo_score_common::export::DEFAULT_FILE_SUFFIX;
use photo_score_common::CsvOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// CSVの出力先（未設定なら写真フォルダ）
    pub output_dir: Option<PathBuf>,
    /// ファイル名の接尾辞
    pub file_suffix: String,
    /// サブフォルダも読み込む
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            recursive: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoScoreError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-score").join("config.json"))
    }

    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            file_suffix: self.file_suffix.clone(),
        }
    }

    /// 出力先を決める（引数 > 設定 > 写真フォルダ）
    pub fn resolve_output_dir(&self, arg: Option<PathBuf>, folder: &Path) -> PathBuf {
        arg.or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| folder.to_path_buf())
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = Some(dir);
        self.save()
    }

    pub fn set_file_suffix(&mut self, suffix: String) -> Result<()> {
        self.file_suffix = suffix;
        self.save()
    }
}
