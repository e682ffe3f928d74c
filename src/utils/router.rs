//! URLハッシュによる簡易ルーティング
//!
//! 許可リストにあるフラグメントだけをページ内のセクションとして扱い、
//! それ以外は404として表示する。

use gloo::events::EventListener;
use leptos::*;

use crate::models::PageView;
use crate::utils::log_trace::log_info;

/// 有効なフラグメント（空文字はトップ扱い）
pub const VALID_FRAGMENTS: [&str; 7] = [
    "",
    "#home",
    "#about",
    "#services",
    "#price",
    "#portfolio",
    "#contact",
];

pub fn is_valid(fragment: &str) -> bool {
    VALID_FRAGMENTS.contains(&fragment)
}

/// フラグメントから表示するページを決定
pub fn select_view(fragment: &str) -> PageView {
    if is_valid(fragment) {
        PageView::Main
    } else {
        PageView::NotFound
    }
}

/// 現在のフラグメントを保持するルーター
#[derive(Clone, Copy)]
pub struct HashRouter {
    current: ReadSignal<String>,
}

impl HashRouter {
    pub fn view(&self) -> PageView {
        self.current.with(|f| select_view(f))
    }

    pub fn is_valid_route(&self) -> bool {
        self.current.with(|f| is_valid(f))
    }
}

fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// 初期フラグメントからルーターと更新用シグナルを作る
fn hash_router_from(initial: String) -> (HashRouter, WriteSignal<String>) {
    let (current, set_current) = create_signal(initial);
    (HashRouter { current }, set_current)
}

fn apply_hash(set_current: WriteSignal<String>, hash: String) {
    log_info("router", &format!("hashchange: {:?} ({:?})", hash, select_view(&hash)));
    set_current.set(hash);
}

/// 起動時のハッシュを読み込み、hashchangeを購読する
///
/// リスナーは所有スコープの破棄時に解除される。
pub fn use_hash_router() -> HashRouter {
    let (router, set_current) = hash_router_from(location_hash());

    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "hashchange", move |_| {
            apply_hash(set_current, location_hash());
        });
        on_cleanup(move || drop(listener));
    }

    router
}
