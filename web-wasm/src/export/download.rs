//! ブラウザでのファイルダウンロード
//!
//! Blob → オブジェクトURL → 一時的な `<a download>` をクリック → URL解放。

use photo_score_common::export::MIME_TYPE;
use photo_score_common::CsvExport;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// CSVをダウンロードさせる
pub fn download_csv(csv: &CsvExport) -> Result<(), JsValue> {
    download_bytes(&csv.bytes, &csv.file_name, MIME_TYPE)
}

pub fn download_bytes(data: &[u8], file_name: &str, mime_type: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(data));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body is not available"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)
}
