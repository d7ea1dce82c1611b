//! 採点済み割合のプログレスバー

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn ProgressBar(state: AppState) -> impl IntoView {
    let counts = move || {
        state.ctrl.with(|c| {
            let session = c.session();
            (session.len() - session.unscored_count(), session.len())
        })
    };
    let ratio = move || {
        let (scored, total) = counts();
        if total == 0 {
            0.0
        } else {
            scored as f32 / total as f32
        }
    };

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", ratio() * 100.0)
                />
            </div>
            <p class="progress-text">
                {move || {
                    let (scored, total) = counts();
                    format!("채점 {} / {}", scored, total)
                }}
            </p>
        </div>
    }
}
