//! ポートフォリオ（モバイルでは横スクロール＋ナビゲーションドット）

use leptos::*;

use crate::config::PORTFOLIO_GAP;
use crate::models::PortfolioItem;
use crate::utils::scroll::{scroll_container_to_slide, slide_index};
use crate::SiteContext;

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <a class="portfolio-card" href=item.link target="_blank" rel="noopener noreferrer">
            <img src=item.image alt=item.alt loading="lazy" />
            <div class="portfolio-caption">
                <h3>{item.title}</h3>
                <p>{item.description}</p>
            </div>
        </a>
    }
}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not found");
    let items = ctx.content.with_value(|c| c.portfolio.clone());
    let count = items.len();

    let strip_ref = create_node_ref::<html::Div>();
    let (current_slide, set_current_slide) = create_signal(0usize);

    let on_scroll = move |_| {
        if let Some(strip) = strip_ref.get_untracked() {
            set_current_slide.set(slide_index(
                strip.scroll_left() as f64,
                strip.scroll_width() as f64,
                count,
                PORTFOLIO_GAP,
            ));
        }
    };

    let go_to = move |index: usize| {
        if let Some(strip) = strip_ref.get_untracked() {
            scroll_container_to_slide(&strip, index, PORTFOLIO_GAP);
            set_current_slide.set(index);
        }
    };

    view! {
        <section id="portfolio" class="portfolio">
            <h2 class="section-title">"Портфолио"</h2>
            <div class="portfolio-strip" node_ref=strip_ref on:scroll=on_scroll>
                {items.into_iter().map(|item| view! {
                    <div class="portfolio-slot">
                        <PortfolioCard item=item />
                    </div>
                }).collect_view()}
            </div>
            <div class="slider-dots">
                {(0..count).map(|index| view! {
                    <button
                        class=move || if current_slide.get() == index { "dot active" } else { "dot" }
                        aria-label=format!("Go to slide {}", index + 1)
                        on:click=move |_| go_to(index)
                    ></button>
                }).collect_view()}
            </div>
        </section>
    }
}
