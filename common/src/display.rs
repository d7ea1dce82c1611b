//! 表示更新の内容と、非同期読み込みの世代チェック

use crate::input::ScoreInput;

pub const NEXT_LABEL: &str = "다음";
pub const FINISH_LABEL: &str = "완료";

/// 現在の写真について画面に反映すべき内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub base_name: String,
    pub file_name: String,
    /// 1始まりの位置
    pub position: usize,
    pub total: usize,
    pub input: ScoreInput,
}

impl DisplayState {
    pub fn progress_text(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }

    /// 「前へ」を無効にするか
    pub fn is_first(&self) -> bool {
        self.position == 1
    }

    /// 「次へ」を「完了」に切り替えるか
    pub fn is_last(&self) -> bool {
        self.position == self.total
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            FINISH_LABEL
        } else {
            NEXT_LABEL
        }
    }
}

/// 画像読み込みを始めた時点の位置と世代
///
/// 読み込み完了時にセッションへ照会し、移動済みなら結果を捨てる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub index: usize,
    pub(crate) generation: u64,
}
