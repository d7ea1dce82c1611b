//! 採点セッション（ナビゲーションの状態機械）
//!
//! 状態: Empty（0枚） / Browsing(i)（最後以外） / AtLast
//!
//! - 移動操作はすべて、移動前に入力欄の値を現在の写真へコミットする
//! - 最後の写真で「次へ」を押すと移動せず、完了判定を行う
//! - 位置は常に `0..N` に収まる

use crate::display::{DisplayState, RefreshTicket};
use crate::error::{Error, Result};
use crate::input::ScoreInput;
use crate::list::{list_entries, ListEntry};
use crate::loader::{load_image_set, SourceFile};
use crate::scores::{Score, ScoreStore};
use crate::status::LoadStatus;
use crate::types::{ImageItem, ImageSet};

/// ナビゲーション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Empty,
    Browsing(usize),
    AtLast(usize),
}

/// 「次へ」の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// 写真がない
    Inactive,
    Moved(usize),
    /// 最後の写真だが未採点が残っている
    Incomplete { unscored: usize },
    /// 最後の写真で全件採点済み
    ReadyToExport,
}

/// 1回分の採点セッション
#[derive(Debug, Clone)]
pub struct ScoringSession<H> {
    images: ImageSet<H>,
    scores: ScoreStore,
    current: usize,
    input: ScoreInput,
    generation: u64,
}

impl<H> ScoringSession<H> {
    pub fn new() -> Self {
        Self::with_images(ImageSet::empty())
    }

    pub fn with_images(images: ImageSet<H>) -> Self {
        Self {
            images,
            scores: ScoreStore::new(),
            current: 0,
            input: ScoreInput::default(),
            generation: 0,
        }
    }

    /// 新しいファイル選択で状態を丸ごと置き換える
    pub fn load<I>(&mut self, files: I) -> LoadStatus
    where
        I: IntoIterator<Item = SourceFile<H>>,
    {
        let generation = self.generation + 1;
        *self = Self::with_images(load_image_set(files));
        self.generation = generation;
        self.show(0);
        LoadStatus::from_count(self.images.len())
    }

    pub fn images(&self) -> &ImageSet<H> {
        &self.images
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    pub fn input(&self) -> &ScoreInput {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 現在位置（0枚なら `None`）
    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current)
    }

    pub fn current_item(&self) -> Option<&ImageItem<H>> {
        self.current_index().and_then(|i| self.images.get(i))
    }

    pub fn nav_state(&self) -> NavState {
        match self.current_index() {
            None => NavState::Empty,
            Some(i) if i + 1 == self.images.len() => NavState::AtLast(i),
            Some(i) => NavState::Browsing(i),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.scores.is_complete(&self.images)
    }

    pub fn unscored_count(&self) -> usize {
        self.scores.unscored_count(&self.images)
    }

    // ---- 入力欄（コミット前） ----

    pub fn type_score(&mut self, raw: &str) {
        self.input.type_text(raw);
    }

    pub fn blur_score(&mut self) {
        self.input.blur();
    }

    pub fn slide_score(&mut self, value: i64) {
        self.input.slide(value);
    }

    pub fn stage_score(&mut self, score: Score) {
        if !self.images.is_empty() {
            self.input.stage(score);
        }
    }

    /// 入力欄の値を現在の写真にコミットする
    ///
    /// 空欄ならエントリを消す。0枚のときは何もしない。
    pub fn commit(&mut self) -> Option<Score> {
        let name = self.current_item()?.base_name.clone();
        let stored = self.scores.set(&name, self.input.text());
        tracing::debug!(photo = %name, score = ?stored.map(Score::value), "score committed");
        self.input = ScoreInput::showing(stored);
        stored
    }

    // ---- ナビゲーション ----

    /// 指定位置へ移動する（移動前にコミット）
    pub fn move_to(&mut self, index: usize) -> Result<()> {
        if self.images.is_empty() {
            return Err(Error::EmptySelection);
        }
        if index >= self.images.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.commit();
        self.show(index);
        Ok(())
    }

    pub fn move_next(&mut self) -> NextStep {
        if self.images.is_empty() {
            return NextStep::Inactive;
        }
        self.commit();

        if self.current + 1 < self.images.len() {
            self.show(self.current + 1);
            return NextStep::Moved(self.current);
        }

        match self.unscored_count() {
            0 => NextStep::ReadyToExport,
            unscored => {
                tracing::warn!(unscored, "finish requested with unscored photos");
                NextStep::Incomplete { unscored }
            }
        }
    }

    /// 前へ（先頭ではコミットだけ行う）
    pub fn move_prev(&mut self) -> Option<usize> {
        if self.images.is_empty() {
            return None;
        }
        self.commit();
        if self.current > 0 {
            self.show(self.current - 1);
        }
        Some(self.current)
    }

    fn show(&mut self, index: usize) {
        self.current = index;
        self.generation += 1;
        let stored = self
            .images
            .get(index)
            .and_then(|item| self.scores.get(&item.base_name));
        self.input = ScoreInput::showing(stored);
        tracing::debug!(index, generation = self.generation, "showing photo");
    }

    // ---- 表示 ----

    pub fn display(&self) -> Option<DisplayState> {
        let index = self.current_index()?;
        let item = self.images.get(index)?;
        Some(DisplayState {
            base_name: item.base_name.clone(),
            file_name: item.file_name.clone(),
            position: index + 1,
            total: self.images.len(),
            input: self.input.clone(),
        })
    }

    pub fn list(&self) -> Vec<ListEntry> {
        list_entries(&self.images, &self.scores)
    }

    /// 画像読み込み開始時に取得する
    pub fn refresh_ticket(&self) -> Option<RefreshTicket> {
        self.current_index().map(|index| RefreshTicket {
            index,
            generation: self.generation,
        })
    }

    /// 読み込み結果をまだ反映してよいか
    pub fn accepts(&self, ticket: RefreshTicket) -> bool {
        ticket.generation == self.generation && Some(ticket.index) == self.current_index()
    }
}

impl<H> Default for ScoringSession<H> {
    fn default() -> Self {
        Self::new()
    }
}
