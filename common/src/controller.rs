//! 採点コントローラ
//!
//! セッション・利用者名・出力オプションをひとまとめに所有し、
//! UIからのイベントを1つずつ受け取る。UIツールキットには依存しない。

use crate::error::{Error, Result};
use crate::export::{export_csv, CsvExport, CsvOptions};
use crate::identity::IdentityGate;
use crate::keys::KeyCommand;
use crate::loader::SourceFile;
use crate::scores::Score;
use crate::session::{NextStep, ScoringSession};
use crate::status::{LoadStatus, Notice};

/// イベント処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    /// 表示を更新すべき位置（移動していない場合も含む）
    Moved(usize),
    /// 入力欄に点数を置いた
    Staged(Score),
    /// 警告を出して操作を中断した
    Blocked(Notice),
    /// 名前入力を促して操作を中断した（入力後に再操作が必要）
    IdentityNeeded,
    Exported(CsvExport),
}

#[derive(Debug, Clone)]
pub struct ScoringController<H> {
    session: ScoringSession<H>,
    identity: IdentityGate,
    options: CsvOptions,
}

impl<H> ScoringController<H> {
    pub fn new(options: CsvOptions) -> Self {
        Self {
            session: ScoringSession::new(),
            identity: IdentityGate::new(),
            options,
        }
    }

    pub fn session(&self) -> &ScoringSession<H> {
        &self.session
    }

    pub fn identity(&self) -> &IdentityGate {
        &self.identity
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// ダウンロードボタンを有効にするか
    pub fn can_download(&self) -> bool {
        self.session.is_complete()
    }

    pub fn on_files_selected<I>(&mut self, files: I) -> LoadStatus
    where
        I: IntoIterator<Item = SourceFile<H>>,
    {
        self.session.load(files)
    }

    pub fn on_identity_submit(&mut self, raw: &str) -> std::result::Result<(), Notice> {
        self.identity
            .submit(raw)
            .map(|_| ())
            .map_err(|_| Notice::NameEmpty)
    }

    pub fn on_score_input(&mut self, raw: &str) {
        self.session.type_score(raw);
    }

    pub fn on_score_blur(&mut self) {
        self.session.blur_score();
    }

    pub fn on_slider(&mut self, value: i64) {
        self.session.slide_score(value);
    }

    pub fn on_score_commit(&mut self) -> Option<Score> {
        self.session.commit()
    }

    pub fn on_jump(&mut self, index: usize) -> Result<Outcome> {
        self.session.move_to(index)?;
        Ok(Outcome::Moved(index))
    }

    pub fn on_prev(&mut self) -> Outcome {
        match self.session.move_prev() {
            Some(index) => Outcome::Moved(index),
            None => Outcome::Unchanged,
        }
    }

    /// 「次へ」/「完了」
    pub fn on_next(&mut self) -> Outcome {
        match self.session.move_next() {
            NextStep::Inactive => Outcome::Unchanged,
            NextStep::Moved(index) => Outcome::Moved(index),
            NextStep::Incomplete { .. } => Outcome::Blocked(Notice::UnscoredRemain),
            NextStep::ReadyToExport => self.finish(Notice::UnscoredRemain),
        }
    }

    /// ダウンロードボタン
    pub fn on_export(&mut self) -> Outcome {
        if self.session.is_empty() {
            return Outcome::Unchanged;
        }
        self.session.commit();
        if !self.session.is_complete() {
            tracing::warn!(unscored = self.session.unscored_count(), "download blocked");
            return Outcome::Blocked(Notice::DownloadIncomplete);
        }
        self.finish(Notice::DownloadIncomplete)
    }

    pub fn on_key(&mut self, key: &str) -> Outcome {
        match KeyCommand::from_key(key) {
            Some(KeyCommand::Prev) => self.on_prev(),
            Some(KeyCommand::Next) => self.on_next(),
            Some(KeyCommand::Stage(score)) if !self.session.is_empty() => {
                self.session.stage_score(score);
                Outcome::Staged(score)
            }
            _ => Outcome::Unchanged,
        }
    }

    fn finish(&self, incomplete: Notice) -> Outcome {
        let identity = match self.identity.require() {
            Ok(name) => name,
            Err(_) => {
                tracing::info!("export waiting for identity");
                return Outcome::IdentityNeeded;
            }
        };
        match export_csv(self.session.images(), self.session.scores(), identity, &self.options) {
            Ok(csv) => Outcome::Exported(csv),
            Err(Error::Incomplete { .. }) => Outcome::Blocked(incomplete),
            Err(Error::IdentityRequired) => Outcome::IdentityNeeded,
            Err(Error::EmptySelection) | Err(Error::IndexOutOfRange { .. }) => Outcome::Unchanged,
        }
    }
}
