//! メインアプリケーションコンポーネント

use crate::components::{
    export_buttons::ExportButtons,
    header::Header,
    list_modal::ListModal,
    progress_bar::ProgressBar,
    upload_area::UploadArea,
    username_modal::UsernameModal,
    viewer::Viewer,
};
use crate::export::download_csv;
use crate::image_reader::read_as_data_url;
use leptos::prelude::*;
use photo_score_common::keys::is_text_entry;
use photo_score_common::{CsvOptions, LoadStatus, Notice, Outcome, ScoringController, SourceFile};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::File;

/// `File` は `Send` ではないため、ローカルストレージのシグナルに置く
pub type SharedController = RwSignal<ScoringController<File>, LocalStorage>;

/// アプリケーションの状態
#[derive(Clone, Copy)]
pub struct AppState {
    pub ctrl: SharedController,
    pub status: RwSignal<Option<LoadStatus>>,
    pub image_url: RwSignal<Option<String>>,
    pub show_identity: RwSignal<bool>,
    pub show_list: RwSignal<bool>,
}

impl AppState {
    fn new() -> Self {
        Self {
            ctrl: RwSignal::new_local(ScoringController::new(CsvOptions::default())),
            status: RwSignal::new(None),
            image_url: RwSignal::new(None),
            // 起動時に名前を聞く
            show_identity: RwSignal::new(true),
            show_list: RwSignal::new(false),
        }
    }

    pub fn files_selected(&self, files: Vec<SourceFile<File>>) {
        let Some(status) = self.ctrl.try_update(|c| c.on_files_selected(files)) else {
            return;
        };
        self.status.set(Some(status));
        self.image_url.set(None);
        self.refresh_image();
    }

    /// コントローラに1イベント渡し、結果を画面に反映する
    pub fn dispatch<F>(&self, event: F)
    where
        F: FnOnce(&mut ScoringController<File>) -> Outcome,
    {
        let outcome = self.ctrl.try_update(event).unwrap_or(Outcome::Unchanged);
        self.apply(outcome);
    }

    pub fn jump(&self, index: usize) {
        match self.ctrl.try_update(|c| c.on_jump(index)) {
            Some(Ok(outcome)) => self.apply(outcome),
            Some(Err(e)) => web_sys::console::warn_1(&JsValue::from_str(&e.to_string())),
            None => {}
        }
    }

    fn apply(&self, outcome: Outcome) {
        match outcome {
            Outcome::Moved(_) => self.refresh_image(),
            Outcome::Blocked(notice) => alert(&notice.to_string()),
            Outcome::IdentityNeeded => {
                alert(&Notice::NameRequired.to_string());
                self.show_identity.set(true);
            }
            Outcome::Exported(csv) => {
                if let Err(e) = download_csv(&csv) {
                    web_sys::console::error_2(&JsValue::from_str("CSVのダウンロードに失敗"), &e);
                }
            }
            Outcome::Unchanged | Outcome::Staged(_) => {}
        }
    }

    /// 現在の写真を読み込んで表示する
    ///
    /// 読み込み完了までに移動していたら結果を捨てる。
    fn refresh_image(&self) {
        let target = self.ctrl.with_untracked(|c| {
            let session = c.session();
            session
                .refresh_ticket()
                .zip(session.current_item().map(|item| item.handle.clone()))
        });
        let Some((ticket, file)) = target else {
            self.image_url.set(None);
            return;
        };

        let state = *self;
        let result = read_as_data_url(&file, move |data_url| {
            let current = state
                .ctrl
                .try_with_untracked(|c| c.session().accepts(ticket))
                .unwrap_or(false);
            if current {
                state.image_url.set(Some(data_url));
            }
        });
        if let Err(e) = result {
            web_sys::console::warn_2(&JsValue::from_str("画像を読み込めません"), &e);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // 矢印キーで移動、数字キーで点数（0は10点）
    let _keys = window_event_listener(leptos::ev::keydown, move |ev| {
        if state.show_identity.get_untracked() || state.show_list.get_untracked() {
            return;
        }
        // スライダーにフォーカスが残っていてもショートカットは効かせる
        let typing = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .is_some_and(|input| is_text_entry(&input.type_()));
        if typing {
            return;
        }
        let key = ev.key();
        state.dispatch(|c| c.on_key(&key));
    });

    view! {
        <div class="container">
            <Header />

            <UploadArea state=state />

            <Show when=move || state.ctrl.with(|c| !c.session().is_empty())>
                <Viewer state=state />
                <ProgressBar state=state />
            </Show>

            <ExportButtons state=state />

            <ListModal state=state />
            <UsernameModal state=state />
        </div>
    }
}
