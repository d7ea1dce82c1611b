//! 利用者名入力モーダル

use crate::app::{alert, AppState};
use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn UsernameModal(state: AppState) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if state.show_identity.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let submit = move || {
        let raw = name.get_untracked();
        match state.ctrl.try_update(|c| c.on_identity_submit(&raw)) {
            Some(Ok(())) => state.show_identity.set(false),
            Some(Err(notice)) => {
                alert(&notice.to_string());
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            None => {}
        }
    };

    view! {
        <Show when=move || state.show_identity.get()>
            <div class="modal">
                <div class="modal-content">
                    <h2>"이름을 입력하세요"</h2>
                    <p class="text-muted">"CSV 파일명에 사용됩니다"</p>
                    <input
                        type="text"
                        node_ref=input_ref
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button class="btn btn-primary" on:click=move |_| submit()>
                        "확인"
                    </button>
                </div>
            </div>
        </Show>
    }
}
