//! 点数入力欄（テキスト + スライダー）のステージング
//!
//! 入力欄に置かれた値は、移動・出力のタイミングで初めて点数ストアに
//! コミットされる。スライダーはテキスト欄の値を映す。

use crate::scores::Score;

/// 入力欄の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreInput {
    text: String,
    slider: u8,
}

impl ScoreInput {
    /// 保存済みの点数を表示する（未採点ならテキストは空、スライダーは最小値）
    pub fn showing(stored: Option<Score>) -> Self {
        match stored {
            Some(score) => Self::staged(score),
            None => Self {
                text: String::new(),
                slider: Score::MIN,
            },
        }
    }

    fn staged(score: Score) -> Self {
        Self {
            text: score.to_string(),
            slider: score.value(),
        }
    }

    /// テキスト欄への入力
    ///
    /// 数字以外を取り除き、先頭2桁までに切り詰めてからクランプする。
    /// 数字が残らなければ欄を空にする。
    pub fn type_text(&mut self, raw: &str) {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(2).collect();
        *self = match digits.parse::<i64>() {
            Ok(v) => Self::staged(Score::clamped(v)),
            Err(_) => Self::showing(None),
        };
    }

    /// フォーカスが外れたときの正規化（空欄はそのまま）
    pub fn blur(&mut self) {
        if let Some(score) = Score::parse(&self.text) {
            *self = Self::staged(score);
        }
    }

    /// スライダー操作
    pub fn slide(&mut self, value: i64) {
        *self = Self::staged(Score::clamped(value));
    }

    /// 点数を直接置く（数字キー）
    pub fn stage(&mut self, score: Score) {
        *self = Self::staged(score);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slider(&self) -> u8 {
        self.slider
    }
}

impl Default for ScoreInput {
    fn default() -> Self {
        Self::showing(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing() {
        let empty = ScoreInput::showing(None);
        assert_eq!(empty.text(), "");
        assert_eq!(empty.slider(), 1);

        let stored = ScoreInput::showing(Score::parse("8"));
        assert_eq!(stored.text(), "8");
        assert_eq!(stored.slider(), 8);
    }

    #[test]
    fn test_type_text_sanitizes() {
        let mut input = ScoreInput::default();

        input.type_text("7");
        assert_eq!((input.text(), input.slider()), ("7", 7));

        input.type_text("a1b0");
        assert_eq!((input.text(), input.slider()), ("10", 10));

        input.type_text("999");
        assert_eq!((input.text(), input.slider()), ("10", 10));

        input.type_text("0");
        assert_eq!((input.text(), input.slider()), ("1", 1));

        input.type_text("xyz");
        assert_eq!((input.text(), input.slider()), ("", 1));
    }

    #[test]
    fn test_slide_mirrors_text() {
        let mut input = ScoreInput::default();
        input.slide(6);
        assert_eq!(input.text(), "6");
        input.slide(42);
        assert_eq!((input.text(), input.slider()), ("10", 10));
    }

    #[test]
    fn test_blur_keeps_blank() {
        let mut input = ScoreInput::default();
        input.blur();
        assert_eq!(input.text(), "");

        input.type_text("3");
        input.blur();
        assert_eq!(input.text(), "3");
    }
}
