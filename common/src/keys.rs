//! キーボードショートカット

use crate::scores::Score;

/// キー入力から導かれる操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Prev,
    Next,
    /// 入力欄に点数を置く（コミットはしない）
    Stage(Score),
}

impl KeyCommand {
    /// `KeyboardEvent.key` の値から操作を引く
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c
                        .to_digit(10)
                        .and_then(|d| Score::from_digit(d as u8))
                        .map(Self::Stage),
                    _ => None,
                }
            }
        }
    }
}

/// 文字入力を受ける `<input>` か
///
/// 文字入力欄にフォーカスがある間はショートカットを無効にする。
/// スライダーなどは対象外で、フォーカスが残っていてもショートカットが効く。
pub fn is_text_entry(input_type: &str) -> bool {
    matches!(
        input_type.to_ascii_lowercase().as_str(),
        "" | "text" | "search" | "number" | "email" | "password" | "tel" | "url"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows() {
        assert_eq!(KeyCommand::from_key("ArrowLeft"), Some(KeyCommand::Prev));
        assert_eq!(KeyCommand::from_key("ArrowRight"), Some(KeyCommand::Next));
    }

    #[test]
    fn test_digits() {
        assert_eq!(KeyCommand::from_key("0"), Score::from_digit(0).map(KeyCommand::Stage));
        assert_eq!(KeyCommand::from_key("5"), Score::from_digit(5).map(KeyCommand::Stage));
        if let Some(KeyCommand::Stage(score)) = KeyCommand::from_key("0") {
            assert_eq!(score.value(), 10);
        } else {
            panic!("0キーは10点になるはず");
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(KeyCommand::from_key("ArrowUp"), None);
        assert_eq!(KeyCommand::from_key("a"), None);
        assert_eq!(KeyCommand::from_key("10"), None);
        assert_eq!(KeyCommand::from_key(""), None);
        assert_eq!(KeyCommand::from_key("٣"), None);
    }

    #[test]
    fn test_text_entry_inputs() {
        assert!(is_text_entry("text"));
        assert!(is_text_entry("TEXT"));
        assert!(is_text_entry(""));
        assert!(is_text_entry("number"));
    }

    #[test]
    fn test_slider_keeps_shortcuts() {
        assert!(!is_text_entry("range"));
        assert!(!is_text_entry("file"));
        assert!(!is_text_entry("checkbox"));
    }
}
