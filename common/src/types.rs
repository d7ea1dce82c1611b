//! 採点対象の型定義
//!
//! - ImageItem: 1枚の写真（ベース名 + 元ファイルへのハンドル）
//! - ImageSet: ロード時に確定する写真の並び（以後は不変）
//!
//! ハンドル型 `H` は呼び出し側が決める。CLIでは `PathBuf`、
//! Webでは `web_sys::File` を持たせる。

/// 採点対象の写真
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem<H> {
    /// 拡張子を除いたファイル名（点数マップのキー）
    pub base_name: String,
    /// 元のファイル名
    pub file_name: String,
    pub handle: H,
}

/// ロード済みの写真セット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet<H> {
    items: Vec<ImageItem<H>>,
}

impl<H> ImageSet<H> {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// ローダーが並べ替え・重複解決を済ませた順序でそのまま保持する
    pub(crate) fn from_sorted(items: Vec<ImageItem<H>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageItem<H>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageItem<H>> {
        self.items.iter()
    }

    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.base_name.as_str())
    }
}

impl<H> Default for ImageSet<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, H> IntoIterator for &'a ImageSet<H> {
    type Item = &'a ImageItem<H>;
    type IntoIter = std::slice::Iter<'a, ImageItem<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
