//! お知らせポップアップの表示制御
//!
//! 表示状態は起動時に一度だけ設定ストアから決まり、
//! 閉じる操作でのみ `Hidden` に遷移する（同一セッション中は戻らない）。

use crate::config::{POPUP_PREFERENCE_NAME, POPUP_PREFERENCE_TTL_DAYS};
use crate::models::PopupState;
use crate::utils::log_trace::log_info;
use crate::utils::preference::PreferenceStore;

pub struct PopupController<S: PreferenceStore> {
    store: S,
    state: PopupState,
}

impl<S: PreferenceStore> PopupController<S> {
    /// 起動時の初期化（閉じた記録があれば非表示）
    pub fn init(store: S) -> Self {
        let state = match store.read(POPUP_PREFERENCE_NAME) {
            Some(_) => PopupState::Hidden,
            None => PopupState::Visible,
        };
        log_info("popup", &format!("初期状態: {:?}", state));
        PopupController { store, state }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    /// 閉じるボタン・背景・フォームへのリンクすべてがここを通る
    pub fn dismiss(&mut self) {
        self.store.write(POPUP_PREFERENCE_NAME, "true", POPUP_PREFERENCE_TTL_DAYS);
        if self.state == PopupState::Visible {
            log_info("popup", "閉じました");
        }
        self.state = PopupState::Hidden;
    }

    /// 404ページではポップアップを出さない
    pub fn should_render(&self, route_is_valid: bool) -> bool {
        self.state() == PopupState::Visible && route_is_valid
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }
}
