//! ヘッダー・ナビゲーション
//!
//! スクロールでスタイルが切り替わり、モバイルではバーガーボタンで
//! 右からドロワーが開く。

use gloo::events::EventListener;
use leptos::*;

use crate::config::HEADER_OFFSET;
use crate::utils::scroll::{header_is_scrolled, scroll_to_section};
use crate::SiteContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not found");
    let (menu_open, set_menu_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(false);

    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "scroll", move |_| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_scrolled.set(header_is_scrolled(y));
        });
        on_cleanup(move || drop(listener));
    }

    let nav = ctx.content.with_value(|c| c.nav.clone());

    view! {
        <nav class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <div class="header-inner">
                <button
                    class=move || if menu_open.get() { "burger open" } else { "burger" }
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>

                // モバイル用の背景（クリックで閉じる）
                {move || menu_open.get().then(|| view! {
                    <div class="menu-backdrop" on:click=move |_| set_menu_open.set(false)></div>
                })}

                <div class=move || if menu_open.get() { "menu-panel open" } else { "menu-panel" }>
                    <ul class="menu-links">
                        {nav.into_iter().map(|link| {
                            let href = link.href();
                            let target = link.target.clone();
                            let on_nav = move |ev: ev::MouseEvent| {
                                ev.prevent_default();
                                let offset = if scrolled.get_untracked() { HEADER_OFFSET } else { 0.0 };
                                if scroll_to_section(&target, offset) {
                                    set_menu_open.set(false);
                                }
                            };
                            view! {
                                <li>
                                    <a class="menu-link" href=href on:click=on_nav>{link.label}</a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
