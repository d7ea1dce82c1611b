//! 写真ビューアコンポーネント
//!
//! 写真・名前・進捗・点数入力（テキストとスライダー）・前後ボタン。

use crate::app::AppState;
use leptos::prelude::*;
use photo_score_common::Score;

#[component]
pub fn Viewer(state: AppState) -> impl IntoView {
    let display = move || state.ctrl.with(|c| c.session().display());

    let name = move || display().map(|d| d.base_name).unwrap_or_default();
    let progress = move || display().map(|d| d.progress_text()).unwrap_or_default();
    let score_text = move || display().map(|d| d.input.text().to_string()).unwrap_or_default();
    let slider = move || {
        display()
            .map(|d| d.input.slider())
            .unwrap_or(Score::MIN)
            .to_string()
    };
    let is_first = move || display().map(|d| d.is_first()).unwrap_or(true);
    let is_last = move || display().map(|d| d.is_last()).unwrap_or(false);
    let next_label = move || display().map(|d| d.next_label()).unwrap_or_default();

    let on_score_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        state.ctrl.update(|c| c.on_score_input(&raw));
    };

    let on_slider = move |ev: web_sys::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<i64>() {
            state.ctrl.update(|c| c.on_slider(value));
        }
    };

    view! {
        <div class="viewer">
            <div class="photo-frame">
                <Show
                    when=move || state.image_url.get().is_some()
                    fallback=|| view! { <p class="text-muted">"불러오는 중..."</p> }
                >
                    <img
                        class="photo-display"
                        src=move || state.image_url.get().unwrap_or_default()
                        alt=name
                    />
                </Show>
            </div>

            <div class="photo-info">
                <span class="photo-name">{name}</span>
                <span class="progress-text">{progress}</span>
            </div>

            <div class="score-controls">
                <input
                    type="text"
                    class="score-input"
                    inputmode="numeric"
                    maxlength="2"
                    prop:value=score_text
                    on:input=on_score_input
                    on:blur=move |_| state.ctrl.update(|c| c.on_score_blur())
                />
                <input
                    type="range"
                    class="score-range"
                    min=Score::MIN.to_string()
                    max=Score::MAX.to_string()
                    step="1"
                    prop:value=slider
                    on:input=on_slider
                />
            </div>

            <div class="nav-buttons">
                <button
                    class="btn btn-secondary"
                    disabled=is_first
                    on:click=move |_| state.dispatch(|c| c.on_prev())
                >
                    "이전"
                </button>
                <button
                    class=move || if is_last() { "btn btn-primary finish" } else { "btn btn-primary" }
                    on:click=move |_| state.dispatch(|c| c.on_next())
                >
                    {next_label}
                </button>
            </div>
        </div>
    }
}
