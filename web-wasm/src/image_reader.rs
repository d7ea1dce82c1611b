//! 画像ファイルの非同期読み込み

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader};

/// ファイルをData URLとして読み込み、完了したら `on_loaded` を呼ぶ
///
/// 読み込み中に別の画像へ移動している場合があるため、
/// 呼び出し側で結果を使うかどうか判断すること。
pub fn read_as_data_url<F>(file: &File, on_loaded: F) -> Result<(), JsValue>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new()?;
    let reader_clone = reader.clone();
    let file_name = file.name();

    let closure = Closure::once(move |_: web_sys::ProgressEvent| {
        match reader_clone.result() {
            Ok(result) => {
                if let Some(data_url) = result.as_string() {
                    on_loaded(data_url);
                }
            }
            Err(e) => {
                web_sys::console::warn_2(&JsValue::from_str(&format!("画像の読み込みに失敗: {}", file_name)), &e);
            }
        }
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_data_url(file)
}
