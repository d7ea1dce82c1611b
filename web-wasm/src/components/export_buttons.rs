//! 一覧・ダウンロードボタン

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn ExportButtons(state: AppState) -> impl IntoView {
    let has_photos = move || state.ctrl.with(|c| !c.session().is_empty());
    let can_download = move || state.ctrl.with(|c| c.can_download());

    view! {
        <div class="export-buttons">
            <button
                class="btn btn-secondary"
                disabled=move || !has_photos()
                on:click=move |_| state.show_list.set(true)
            >
                "목록"
            </button>

            <button
                class="btn btn-primary"
                disabled=move || !can_download()
                on:click=move |_| state.dispatch(|c| c.on_export())
            >
                "CSV 다운로드"
            </button>
        </div>
    }
}
