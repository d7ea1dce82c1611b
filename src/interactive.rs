//! 対話式の採点
//!
//! 入力した点数は入力欄に置かれるだけで、移動・出力のときにコミットされる。

use crate::error::{PhotoScoreError, Result};
use crate::output::write_csv;
use crate::render;
use dialoguer::{Input, Select};
use photo_score_common::{Notice, Outcome, ScoringController};
use std::path::{Path, PathBuf};

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreAction {
    /// キー入力（矢印・数字）
    Key(String),
    /// 点数欄への入力
    Type(String),
    /// 次へ / 完了
    Next,
    /// 前へ
    Prev,
    /// 一覧から移動
    List,
    /// CSVダウンロード
    Download,
    /// 出力せずに終了
    Quit,
}

/// 入力行をアクションに変換
pub fn parse_action(input: &str) -> ScoreAction {
    let trimmed = input.trim();
    match trimmed {
        "" | "n" => ScoreAction::Next,
        "p" => ScoreAction::Prev,
        "l" => ScoreAction::List,
        "d" => ScoreAction::Download,
        "q" | "Q" => ScoreAction::Quit,
        "<" => ScoreAction::Key("ArrowLeft".to_string()),
        ">" => ScoreAction::Key("ArrowRight".to_string()),
        _ if trimmed.len() == 1 && trimmed.chars().all(|c| c.is_ascii_digit()) => {
            ScoreAction::Key(trimmed.to_string())
        }
        _ => ScoreAction::Type(trimmed.to_string()),
    }
}

/// 対話式で採点し、出力できたらCSVのパスを返す
pub fn run_interactive(
    controller: &mut ScoringController<PathBuf>,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    println!("---");
    println!("操作: [数字]点数(0=10) [Enter/n]次へ [p]前へ [l]一覧 [d]ダウンロード [q]終了");
    println!("---");

    loop {
        render::print_current(controller.session());

        let label = controller
            .session()
            .display()
            .map(|d| d.next_label())
            .unwrap_or_default();
        let line: String = Input::new()
            .with_prompt(format!("점수 (Enter: {})", label))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PhotoScoreError::Prompt(e.to_string()))?;

        let outcome = match parse_action(&line) {
            ScoreAction::Key(key) => controller.on_key(&key),
            ScoreAction::Type(raw) => {
                controller.on_score_input(&raw);
                Outcome::Unchanged
            }
            ScoreAction::Next => controller.on_next(),
            ScoreAction::Prev => controller.on_prev(),
            ScoreAction::List => select_from_list(controller)?,
            ScoreAction::Download => controller.on_export(),
            ScoreAction::Quit => {
                println!("出力せずに終了します");
                return Ok(None);
            }
        };

        match outcome {
            Outcome::Exported(csv) => {
                let path = write_csv(&csv, output_dir)?;
                println!("\n✔ CSV出力: {}", path.display());
                return Ok(Some(path));
            }
            Outcome::Blocked(notice) => println!("⚠ {}", notice),
            Outcome::IdentityNeeded => {
                println!("⚠ {}", Notice::NameRequired);
                prompt_identity(controller)?;
            }
            Outcome::Unchanged | Outcome::Moved(_) | Outcome::Staged(_) => {}
        }
    }
}

/// 名前が設定されるまで入力を求める
pub fn prompt_identity(controller: &mut ScoringController<PathBuf>) -> Result<()> {
    loop {
        let name: String = Input::new()
            .with_prompt("이름을 입력하세요 (CSV 파일명에 사용됩니다)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PhotoScoreError::Prompt(e.to_string()))?;

        match controller.on_identity_submit(&name) {
            Ok(()) => return Ok(()),
            Err(notice) => println!("⚠ {}", notice),
        }
    }
}

fn select_from_list(controller: &mut ScoringController<PathBuf>) -> Result<Outcome> {
    let entries = controller.session().list();
    if entries.is_empty() {
        return Ok(Outcome::Unchanged);
    }

    let items: Vec<String> = entries.iter().map(ToString::to_string).collect();
    let selection = Select::new()
        .with_prompt("목록")
        .items(&items)
        .default(controller.session().current_index().unwrap_or(0))
        .interact_opt()
        .map_err(|e| PhotoScoreError::Prompt(e.to_string()))?;

    match selection {
        Some(index) => Ok(controller.on_jump(index)?),
        None => Ok(Outcome::Unchanged),
    }
}
