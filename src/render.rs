//! 端末への表示更新

use crate::scanner;
use photo_score_common::{ListEntry, ScoringSession};
use std::path::PathBuf;

/// スライダー相当のバー表示
pub fn slider_bar(value: u8) -> String {
    (1..=10u8)
        .map(|i| if i <= value { '■' } else { '□' })
        .collect()
}

/// 現在の写真を表示する
///
/// 画像メタデータが読めなくても表示は続ける。
pub fn print_current(session: &ScoringSession<PathBuf>) {
    let (Some(display), Some(item)) = (session.display(), session.current_item()) else {
        return;
    };

    println!(
        "\n[{}] {} ({})",
        display.progress_text(),
        display.base_name,
        display.file_name
    );

    match scanner::read_meta(&item.handle) {
        Ok(meta) => {
            let date = meta.date.as_deref().unwrap_or("-");
            println!("  {}x{}  {}", meta.width, meta.height, date);
        }
        Err(e) => tracing::warn!(error = %e, "image metadata unavailable"),
    }

    let text = display.input.text();
    println!(
        "  점수: {}  {}",
        if text.is_empty() { "-" } else { text },
        slider_bar(display.input.slider())
    );
}

pub fn print_list(entries: &[ListEntry]) {
    for entry in entries {
        println!("  {}", entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_bar() {
        assert_eq!(slider_bar(1), "■□□□□□□□□□");
        assert_eq!(slider_bar(10), "■■■■■■■■■■");
        assert_eq!(slider_bar(3).chars().filter(|&c| c == '■').count(), 3);
    }
}
