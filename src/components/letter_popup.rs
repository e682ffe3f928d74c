//! 手紙フォームへの案内
//!
//! 初回訪問時のポップアップと、右下のフローティングボタン。

use leptos::*;

use crate::SiteContext;

/// お知らせポップアップ
///
/// 背景クリック・フォームへのリンク・閉じるボタンのどれでも `on_dismiss` を呼ぶ。
#[component]
pub fn LetterPopup(on_dismiss: Callback<()>) -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not found");
    let letter = ctx.content.with_value(|c| c.letter.clone());

    view! {
        <div class="popup-overlay" on:click=move |_| on_dismiss.call(())></div>
        <div class="popup-window" role="dialog">
            <p class="popup-message">{letter.popup_message}</p>
            // 新しいタブでフォームを開きつつ閉じる（preventDefaultしない）
            <a
                class="popup-action"
                href=letter.form_url
                target="_blank"
                rel="noopener noreferrer"
                on:click=move |_| on_dismiss.call(())
            >
                {letter.popup_action}
            </a>
            <button class="popup-close" on:click=move |_| on_dismiss.call(())>
                {letter.popup_close}
            </button>
        </div>
    }
}

#[component]
pub fn FloatingLetterButton() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not found");
    let letter = ctx.content.with_value(|c| c.letter.clone());

    view! {
        <a
            id="email-button"
            class="floating-letter"
            href=letter.form_url
            target="_blank"
            rel="noopener noreferrer"
        >
            {letter.floating_label}
        </a>
    }
}
