//! 操作スクリプトの再生
//!
//! 1行1操作:
//!
//! ```text
//! # コメント
//! 5              数字キー（0は10点）
//! ArrowRight     次へ / 完了
//! ArrowLeft      前へ
//! input 7        点数欄への入力
//! slider 3       スライダー操作
//! jump 2         一覧から2番目へ移動
//! name Kim       利用者名を入力
//! download       ダウンロードボタン
//! ```

use crate::error::{PhotoScoreError, Result};
use crate::output::write_csv;
use photo_score_common::{KeyCommand, Outcome, ScoringController};
use std::path::{Path, PathBuf};

/// スクリプトの1操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Key(String),
    Input(String),
    Slider(i64),
    /// 1始まりの位置
    Jump(usize),
    Name(String),
    Download,
}

/// 再生結果
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// 表示された警告（順番どおり）
    pub notices: Vec<String>,
    pub exported: Option<PathBuf>,
}

fn script_error(line: usize, message: impl Into<String>) -> PhotoScoreError {
    PhotoScoreError::Script {
        line,
        message: message.into(),
    }
}

/// スクリプトを解析する（戻り値は行番号付き）
pub fn parse_script(content: &str) -> Result<Vec<(usize, ScriptStep)>> {
    let mut steps = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let step = match head {
            "input" => ScriptStep::Input(rest.to_string()),
            "slider" => ScriptStep::Slider(
                rest.parse()
                    .map_err(|_| script_error(line_no, format!("スライダー値が不正: {}", rest)))?,
            ),
            "jump" => {
                let position: usize = rest
                    .parse()
                    .map_err(|_| script_error(line_no, format!("位置が不正: {}", rest)))?;
                if position == 0 {
                    return Err(script_error(line_no, "位置は1から始まります"));
                }
                ScriptStep::Jump(position)
            }
            "name" => ScriptStep::Name(rest.to_string()),
            "download" => ScriptStep::Download,
            key if rest.is_empty() && KeyCommand::from_key(key).is_some() => {
                ScriptStep::Key(key.to_string())
            }
            _ => return Err(script_error(line_no, format!("不明な操作: {}", line))),
        };
        steps.push((line_no, step));
    }

    Ok(steps)
}

/// スクリプトを再生する
///
/// CSVが出力された時点で再生を終える。
pub fn run_replay(
    controller: &mut ScoringController<PathBuf>,
    steps: &[(usize, ScriptStep)],
    output_dir: &Path,
) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for (line_no, step) in steps {
        tracing::debug!(line = line_no, ?step, "replay step");

        let outcome = match step {
            ScriptStep::Key(key) => controller.on_key(key),
            ScriptStep::Input(raw) => {
                controller.on_score_input(raw);
                Outcome::Unchanged
            }
            ScriptStep::Slider(value) => {
                controller.on_slider(*value);
                Outcome::Unchanged
            }
            ScriptStep::Jump(position) => controller
                .on_jump(position - 1)
                .map_err(|e| script_error(*line_no, e.to_string()))?,
            ScriptStep::Name(name) => {
                if let Err(notice) = controller.on_identity_submit(name) {
                    report.notices.push(notice.to_string());
                }
                Outcome::Unchanged
            }
            ScriptStep::Download => controller.on_export(),
        };

        match outcome {
            Outcome::Moved(_) => {
                if let Some(display) = controller.session().display() {
                    println!("[{}] {}", display.progress_text(), display.base_name);
                }
            }
            Outcome::Blocked(notice) => {
                println!("⚠ {}", notice);
                report.notices.push(notice.to_string());
            }
            Outcome::IdentityNeeded => {
                let notice = photo_score_common::Notice::NameRequired;
                println!("⚠ {}", notice);
                report.notices.push(notice.to_string());
            }
            Outcome::Exported(csv) => {
                let path = write_csv(&csv, output_dir)?;
                println!("✔ CSV出力: {}", path.display());
                report.exported = Some(path);
                break;
            }
            Outcome::Unchanged | Outcome::Staged(_) => {}
        }
    }

    Ok(report)
}
