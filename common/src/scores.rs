//! 点数ストア
//!
//! ベース名 → 点数（1〜10の整数）のマップ。キーが無い = 未採点。

use crate::types::ImageSet;
use std::collections::HashMap;
use std::fmt;

/// 1〜10に収まった点数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// 範囲外の値は端に寄せる
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// 入力文字列を点数として解釈する
    ///
    /// 空・非数値は `None`（＝クリア）。小数は切り捨ててからクランプする。
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Some(Self::clamped(v));
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(Self::clamped(v.trunc() as i64)),
            _ => None,
        }
    }

    /// 数字キー1つ分の点数（`0` は10点）
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self(10)),
            1..=9 => Some(Self(digit)),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ベース名ごとの点数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    entries: HashMap<String, Score>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力文字列を解釈して保存する。解釈できなければエントリを消す。
    ///
    /// 戻り値は保存された点数（クリアした場合は `None`）。
    pub fn set(&mut self, base_name: &str, raw: &str) -> Option<Score> {
        match Score::parse(raw) {
            Some(score) => {
                self.insert(base_name, score);
                Some(score)
            }
            None => {
                self.clear(base_name);
                None
            }
        }
    }

    pub fn insert(&mut self, base_name: &str, score: Score) {
        self.entries.insert(base_name.to_string(), score);
    }

    pub fn clear(&mut self, base_name: &str) -> Option<Score> {
        self.entries.remove(base_name)
    }

    pub fn get(&self, base_name: &str) -> Option<Score> {
        self.entries.get(base_name).copied()
    }

    pub fn contains(&self, base_name: &str) -> bool {
        self.entries.contains_key(base_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// セット内で未採点の枚数
    pub fn unscored_count<H>(&self, images: &ImageSet<H>) -> usize {
        images.base_names().filter(|name| !self.contains(name)).count()
    }

    /// セットの全写真に点数があるか（空セットは未完了扱い）
    pub fn is_complete<H>(&self, images: &ImageSet<H>) -> bool {
        !images.is_empty() && self.unscored_count(images) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_image_set, SourceFile};

    fn three() -> ImageSet<()> {
        load_image_set(vec![
            SourceFile::new("b.jpg", "image/jpeg", ()),
            SourceFile::new("a.jpg", "image/jpeg", ()),
            SourceFile::new("c.jpg", "image/jpeg", ()),
        ])
    }

    #[test]
    fn test_parse_in_range() {
        assert_eq!(Score::parse("5").map(Score::value), Some(5));
        assert_eq!(Score::parse(" 7 ").map(Score::value), Some(7));
        assert_eq!(Score::parse("10").map(Score::value), Some(10));
    }

    #[test]
    fn test_parse_clamps() {
        assert_eq!(Score::parse("0").map(Score::value), Some(1));
        assert_eq!(Score::parse("-4").map(Score::value), Some(1));
        assert_eq!(Score::parse("11").map(Score::value), Some(10));
        assert_eq!(Score::parse("99999999999999999999999").map(Score::value), Some(10));
        assert_eq!(Score::parse("5.9").map(Score::value), Some(5));
        assert_eq!(Score::parse("0.5").map(Score::value), Some(1));
    }

    #[test]
    fn test_parse_clears_non_numeric() {
        assert_eq!(Score::parse(""), None);
        assert_eq!(Score::parse("   "), None);
        assert_eq!(Score::parse("abc"), None);
        assert_eq!(Score::parse("NaN"), None);
        assert_eq!(Score::parse("inf"), None);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for raw in ["-100", "0", "1", "5", "10", "11", "3.7", "1e9"] {
            let once = Score::parse(raw).expect("数値として解釈できるはず");
            assert!((Score::MIN..=Score::MAX).contains(&once.value()));
            let twice = Score::parse(&once.to_string()).expect("再解釈できるはず");
            assert_eq!(once, twice, "入力 {:?}", raw);
        }
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Score::from_digit(0).map(Score::value), Some(10));
        assert_eq!(Score::from_digit(1).map(Score::value), Some(1));
        assert_eq!(Score::from_digit(9).map(Score::value), Some(9));
        assert_eq!(Score::from_digit(10), None);
    }

    #[test]
    fn test_set_get_clear() {
        let mut store = ScoreStore::new();
        assert_eq!(store.get("a"), None);

        assert_eq!(store.set("a", "5").map(Score::value), Some(5));
        assert_eq!(store.get("a").map(Score::value), Some(5));

        assert_eq!(store.set("a", ""), None);
        assert_eq!(store.get("a"), None);
        assert!(!store.contains("a"));

        store.set("b", "3");
        assert_eq!(store.clear("b").map(Score::value), Some(3));
        assert!(store.is_empty());
    }

    #[test]
    fn test_partial_scores_are_incomplete() {
        let images = three();
        let mut store = ScoreStore::new();
        store.set("a", "5");
        store.set("b", "0");
        store.set("c", "");

        assert_eq!(store.get("a").map(Score::value), Some(5));
        assert_eq!(store.get("b").map(Score::value), Some(1));
        assert_eq!(store.get("c"), None);
        assert_eq!(store.len(), 2);
        assert!(!store.is_complete(&images));
        assert_eq!(store.unscored_count(&images), 1);
    }

    #[test]
    fn test_completeness_is_monotonic_under_set() {
        let images = three();
        let mut store = ScoreStore::new();
        for name in ["a", "b", "c"] {
            store.set(name, "4");
        }
        assert!(store.is_complete(&images));

        for raw in ["1", "10", "-3", "42", "7.5"] {
            store.set("b", raw);
            assert!(store.is_complete(&images), "入力 {:?} で未完了になった", raw);
        }

        store.clear("b");
        assert!(!store.is_complete(&images));
    }

    #[test]
    fn test_empty_set_is_never_complete() {
        let images: ImageSet<()> = ImageSet::empty();
        assert!(!ScoreStore::new().is_complete(&images));
    }
}
