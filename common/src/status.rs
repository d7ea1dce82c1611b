//! 画面に出す文言
//!
//! 文言は利用者向けのラベルであり、技術的な契約ではない。

use std::fmt;

/// ロード結果のステータス表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Empty,
    Loaded(usize),
}

impl LoadStatus {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Loaded(count)
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Empty => write!(f, "선택된 이미지가 없습니다."),
            LoadStatus::Loaded(n) => write!(f, "{}개의 사진이 로드되었습니다.", n),
        }
    }
}

/// 操作を止める警告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// 最後の写真で「完了」を押したが未採点がある
    UnscoredRemain,
    /// ダウンロードボタンを押したが未採点がある
    DownloadIncomplete,
    /// 名前入力が空
    NameEmpty,
    /// 出力前に名前が必要
    NameRequired,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::UnscoredRemain => "아직 점수를 입력하지 않은 사진이 있습니다!",
            Notice::DownloadIncomplete => "아직 모든 사진의 점수가 입력되지 않았습니다.",
            Notice::NameEmpty => "이름을 입력해주세요.",
            Notice::NameRequired => "CSV 파일명을 위해 이름을 먼저 입력해주세요.",
        };
        f.write_str(text)
    }
}
