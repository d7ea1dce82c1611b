//! 一覧・ジャンプモーダル

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn ListModal(state: AppState) -> impl IntoView {
    // 採点のたびに作り直す
    let entries = move || state.ctrl.with(|c| c.session().list());

    view! {
        <Show when=move || state.show_list.get()>
            <div class="modal">
                <div class="modal-content">
                    <h2>"목록"</h2>
                    <div class="list-container">
                        {move || {
                            entries()
                                .into_iter()
                                .map(|entry| {
                                    let index = entry.index;
                                    view! {
                                        <button
                                            class="list-item"
                                            on:click=move |_| {
                                                state.jump(index);
                                                state.show_list.set(false);
                                            }
                                        >
                                            {entry.to_string()}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <button class="btn btn-secondary" on:click=move |_| state.show_list.set(false)>
                        "닫기"
                    </button>
                </div>
            </div>
        </Show>
    }
}
