//! 404ページ

use leptos::*;

use crate::components::{Footer, Header};

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <Header />
            <section class="not-found">
                <div class="not-found-card">
                    <h1>"404"</h1>
                    <p>"Извините, страница не найдена."</p>
                    // hashchange で通常表示に戻る
                    <a class="home-btn" href="#home">"Вернуться на главную"</a>
                </div>
            </section>
            <Footer />
        </div>
    }
}
