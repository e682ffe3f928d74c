mod components;
mod config;
mod models;
mod popup;
mod utils;
mod views;

use leptos::*;

use components::{FloatingLetterButton, LetterPopup};
use models::{PageView, SiteContent};
use popup::PopupController;
use utils::preference::{default_store, PreferenceStore};
use utils::router::{use_hash_router, HashRouter};
use views::{MainView, NotFoundView};

// ============================================
// サイト共有コンテキスト
// ============================================

#[derive(Clone, Copy)]
pub struct SiteContext {
    pub router: HashRouter,
    pub popup: RwSignal<PopupController<Box<dyn PreferenceStore>>>,
    pub content: StoredValue<SiteContent>,
}

impl SiteContext {
    /// 起動時に一度だけ実行する初期化
    ///
    /// ポップアップの表示可否はここで設定ストアを読んで確定し、
    /// 以降は閉じる操作でのみ変化する。
    fn init() -> Self {
        let content = SiteContent::load();
        let router = use_hash_router();
        let popup = create_rw_signal(PopupController::init(default_store()));
        SiteContext {
            router,
            popup,
            content: store_value(content),
        }
    }
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let ctx = SiteContext::init();
    provide_context(ctx);

    let router = ctx.router;
    let popup = ctx.popup;

    // 同じ種類のページ間の移動では再描画しない
    let page = create_memo(move |_| router.view());
    let route_valid = create_memo(move |_| router.is_valid_route());
    let popup_visible = create_memo(move |_| popup.with(|p| p.should_render(route_valid.get())));

    let on_dismiss = Callback::new(move |_: ()| popup.update(|p| p.dismiss()));

    view! {
        <div class="site">
            {move || match page.get() {
                PageView::Main => view! { <MainView /> }.into_view(),
                PageView::NotFound => view! { <NotFoundView /> }.into_view(),
            }}

            {move || route_valid.get().then(|| view! { <FloatingLetterButton /> })}

            {move || popup_visible.get().then(|| view! { <LetterPopup on_dismiss=on_dismiss /> })}
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
