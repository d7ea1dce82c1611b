//! 写真セットのロード
//!
//! 選択されたファイル一覧から画像だけを抜き出し、ベース名を求めて
//! ロケール順に並べる。ベース名が衝突した場合は後ろの写真に
//! `" (2)"`, `" (3)"` … を付けて一意にする。

use crate::types::{ImageItem, ImageSet};
use std::cmp::Ordering;
use std::collections::HashSet;

/// ファイル選択で渡される1件分
#[derive(Debug, Clone)]
pub struct SourceFile<H> {
    pub name: String,
    /// 宣言されたメディアタイプ（例: `image/jpeg`）
    pub media_type: String,
    pub handle: H,
}

impl<H> SourceFile<H> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            handle,
        }
    }
}

/// メディアタイプが画像かどうか
pub fn is_image_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// 最後の拡張子を取り除いたファイル名
///
/// `.hidden` のように先頭のドットしかない名前はそのまま返す。
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(pos) if pos + 1 == file_name.len() => file_name,
        Some(pos) => &file_name[..pos],
    }
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// ロケールを考慮した文字列比較
///
/// 記号 < 数字 < 文字 の順にまとめ、大文字小文字を区別せずに比べる。
/// 同順位なら小文字を先にし、最後にコードポイント順で決着させるので
/// 全順序になる。ハングル音節はコードポイント順が字母順と一致する。
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| s.chars().map(|c| (char_class(c), fold(c))).collect::<Vec<_>>();
    primary(a)
        .cmp(&primary(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// ファイル一覧から写真セットを作る
///
/// 画像がひとつもなければ空のセットを返す（エラーではない）。
pub fn load_image_set<H, I>(files: I) -> ImageSet<H>
where
    I: IntoIterator<Item = SourceFile<H>>,
{
    let mut items: Vec<ImageItem<H>> = files
        .into_iter()
        .filter(|f| is_image_type(&f.media_type))
        .map(|f| ImageItem {
            base_name: base_name(&f.name).to_string(),
            file_name: f.name,
            handle: f.handle,
        })
        .collect();

    let by_name = |a: &ImageItem<H>, b: &ImageItem<H>| {
        locale_cmp(&a.base_name, &b.base_name).then_with(|| locale_cmp(&a.file_name, &b.file_name))
    };

    // 改名先の順位は元と違うことがあるので、改名後にもう一度並べる
    items.sort_by(by_name);
    if disambiguate(&mut items) {
        items.sort_by(by_name);
    }

    tracing::info!(count = items.len(), "image set loaded");
    ImageSet::from_sorted(items)
}

/// 重複したベース名を改名する（改名があれば `true`）
fn disambiguate<H>(items: &mut [ImageItem<H>]) -> bool {
    let originals: HashSet<String> = items.iter().map(|i| i.base_name.clone()).collect();
    let mut taken: HashSet<String> = HashSet::new();
    let mut renamed_any = false;

    for item in items.iter_mut() {
        if taken.insert(item.base_name.clone()) {
            continue;
        }

        let mut n = 2;
        let renamed = loop {
            let candidate = format!("{} ({})", item.base_name, n);
            if !originals.contains(&candidate) && !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };

        tracing::warn!(
            file = %item.file_name,
            from = %item.base_name,
            to = %renamed,
            "duplicate base name renamed"
        );
        taken.insert(renamed.clone());
        item.base_name = renamed;
        renamed_any = true;
    }

    renamed_any
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpg(name: &str) -> SourceFile<()> {
        SourceFile::new(name, "image/jpeg", ())
    }

    fn names<H>(set: &ImageSet<H>) -> Vec<String> {
        set.base_names().map(str::to_string).collect()
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("a.jpg"), "a");
        assert_eq!(base_name("photo.final.png"), "photo.final");
        assert_eq!(base_name("noext"), "noext");
        assert_eq!(base_name(".hidden"), ".hidden");
        assert_eq!(base_name("trailing."), "trailing.");
        assert_eq!(base_name("사진1.JPG"), "사진1");
    }

    #[test]
    fn test_is_image_type() {
        assert!(is_image_type("image/jpeg"));
        assert!(is_image_type("image/png"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type(""));
        assert!(!is_image_type("application/image"));
    }

    #[test]
    fn test_load_sorts_by_base_name() {
        let set = load_image_set(vec![jpg("b.jpg"), jpg("a.jpg"), jpg("c.jpg")]);
        assert_eq!(names(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_filters_non_images() {
        let set = load_image_set(vec![
            jpg("a.jpg"),
            SourceFile::new("notes.txt", "text/plain", ()),
            SourceFile::new("b.png", "image/png", ()),
            SourceFile::new("unknown", "", ()),
        ]);
        assert_eq!(names(&set), vec!["a", "b"]);
    }

    #[test]
    fn test_load_empty_selection() {
        let set = load_image_set(vec![SourceFile::new("readme.md", "text/markdown", ())]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_case_insensitive_order() {
        let set = load_image_set(vec![jpg("Banana.jpg"), jpg("apple.jpg"), jpg("cherry.jpg")]);
        assert_eq!(names(&set), vec!["apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_load_korean_order() {
        let set = load_image_set(vec![jpg("다.jpg"), jpg("가.jpg"), jpg("나.jpg"), jpg("z.jpg")]);
        assert_eq!(names(&set), vec!["z", "가", "나", "다"]);
    }

    #[test]
    fn test_locale_cmp_is_total() {
        assert_eq!(locale_cmp("a", "a"), Ordering::Equal);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("_x", "1"), Ordering::Less);
        assert_eq!(locale_cmp("1", "a"), Ordering::Less);
        assert_eq!(locale_cmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_duplicate_base_names_are_renamed() {
        let set = load_image_set(vec![
            SourceFile::new("a.png", "image/png", ()),
            jpg("a.jpg"),
            jpg("b.jpg"),
        ]);
        assert_eq!(names(&set), vec!["a", "a (2)", "b"]);
        assert_eq!(set.get(0).map(|i| i.file_name.as_str()), Some("a.jpg"));
        assert_eq!(set.get(1).map(|i| i.file_name.as_str()), Some("a.png"));
    }

    #[test]
    fn test_duplicate_rename_skips_existing_names() {
        let set = load_image_set(vec![jpg("a.jpg"), jpg("a.png"), jpg("a (2).jpg")]);
        let result = names(&set);
        assert_eq!(result.len(), 3);
        assert!(result.contains(&"a".to_string()));
        assert!(result.contains(&"a (2)".to_string()));
        assert!(result.contains(&"a (3)".to_string()));
    }

    #[test]
    fn test_renamed_items_stay_sorted() {
        let set = load_image_set(vec![jpg("a.jpg"), jpg("a.png"), jpg("a (1).jpg")]);
        assert_eq!(names(&set), vec!["a", "a (1)", "a (2)"]);
        assert_eq!(set.get(2).map(|i| i.file_name.as_str()), Some("a.png"));

        let result = names(&set);
        for pair in result.windows(2) {
            assert_eq!(locale_cmp(&pair[0], &pair[1]), Ordering::Less, "{:?}", result);
        }
    }
}
