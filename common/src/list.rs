//! 一覧（ジャンプ用）表示

use crate::scores::ScoreStore;
use crate::types::ImageSet;
use std::fmt;

pub const SCORED_MARK: &str = "✓";
pub const UNSCORED_MARK: &str = "—";

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// 0始まりの位置（ジャンプ先）
    pub index: usize,
    pub base_name: String,
    pub scored: bool,
}

impl ListEntry {
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn marker(&self) -> &'static str {
        if self.scored {
            SCORED_MARK
        } else {
            UNSCORED_MARK
        }
    }
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.position(), self.base_name, self.marker())
    }
}

/// 写真セットと点数から一覧を作る
pub fn list_entries<H>(images: &ImageSet<H>, scores: &ScoreStore) -> Vec<ListEntry> {
    images
        .iter()
        .enumerate()
        .map(|(index, item)| ListEntry {
            index,
            base_name: item.base_name.clone(),
            scored: scores.contains(&item.base_name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_image_set, SourceFile};

    #[test]
    fn test_list_lines() {
        let images = load_image_set(vec![
            SourceFile::new("b.jpg", "image/jpeg", ()),
            SourceFile::new("a.jpg", "image/jpeg", ()),
        ]);
        let mut scores = ScoreStore::new();
        scores.set("b", "4");

        let lines: Vec<String> = list_entries(&images, &scores)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, vec!["1. a —", "2. b ✓"]);
    }

    #[test]
    fn test_list_empty() {
        let images: ImageSet<()> = ImageSet::empty();
        assert!(list_entries(&images, &ScoreStore::new()).is_empty());
    }
}
