//! フォルダ選択エリアコンポーネント

use crate::app::AppState;
use leptos::prelude::*;
use photo_score_common::SourceFile;
use web_sys::{File, FileList, HtmlInputElement};

fn source_files(files: &FileList) -> Vec<SourceFile<File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| SourceFile::new(file.name(), file.type_(), file))
        .collect()
}

#[component]
pub fn UploadArea(state: AppState) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            state.files_selected(source_files(&files));
        }
    };

    view! {
        <div class="upload-area">
            <label class="upload-label">
                <div class="upload-icon">"📁"</div>
                <p>"사진 폴더를 선택하세요"</p>
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    webkitdirectory=""
                    on:change=on_change
                />
            </label>
            <p class="meta-info">
                {move || state.status.get().map(|s| s.to_string()).unwrap_or_default()}
            </p>
        </div>
    }
}
