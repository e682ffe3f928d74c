//! トップページの静的セクション

use leptos::*;

use crate::config::HEADER_OFFSET;
use crate::models::{HeroMedia, PriceItem, ServiceItem};
use crate::utils::scroll::scroll_to_section;
use crate::SiteContext;

fn site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found")
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = site_context();
    let (owner, tagline, hero) = ctx
        .content
        .with_value(|c| (c.owner_name.clone(), c.tagline.clone(), c.hero.clone()));

    view! {
        <section id="home" class="hero">
            <div class="hero-overlay"></div>
            {match hero {
                HeroMedia::Video(src) => view! {
                    <video class="hero-media" autoplay=true loop=true muted=true playsinline=true preload="auto">
                        <source src=src type="video/mp4" />
                        "Ваш браузер не поддерживает тег видео."
                    </video>
                }.into_view(),
                HeroMedia::Image(src) => view! {
                    <img class="hero-media" src=src alt="Hero background" loading="eager" />
                }.into_view(),
            }}
            <div class="hero-content">
                <h1>{owner}</h1>
                <p>{tagline}</p>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let about = site_context().content.with_value(|c| c.about.clone());

    view! {
        <section id="about" class="about">
            <div class="about-card">
                <h3>{about.heading}</h3>
                <ul class="about-points">
                    {about.points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: ServiceItem) -> impl IntoView {
    view! {
        <div class="service-card">
            <img src=service.image alt=service.alt loading="lazy" />
            <div class="service-overlay">
                <h2>{service.title}</h2>
            </div>
        </div>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    let services = site_context().content.with_value(|c| c.services.clone());

    view! {
        <section id="services" class="services">
            <h2 class="section-title">"Услуги"</h2>
            <div class="card-grid">
                {services.into_iter().map(|s| view! { <ServiceCard service=s /> }).collect_view()}
            </div>
        </section>
    }
}

/// 料金カード（予約ボタンで連絡先へスクロール）
#[component]
fn PriceCard(item: PriceItem) -> impl IntoView {
    let href = format!("#{}", item.contact_target);
    let target = item.contact_target.clone();
    let on_order = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        scroll_to_section(&target, HEADER_OFFSET);
    };

    view! {
        <div class="price-card">
            <h3>{item.title}</h3>
            <p class="price-description">{item.description}</p>
            <div class="price-value">{item.price}</div>
            <a class="order-btn" href=href on:click=on_order>"Заказать съёмку"</a>
        </div>
    }
}

#[component]
pub fn PriceSection() -> impl IntoView {
    let prices = site_context().content.with_value(|c| c.prices.clone());

    view! {
        <section id="price" class="prices">
            <h2 class="section-title">"Стоимость"</h2>
            <div class="card-grid">
                {prices.into_iter().map(|p| view! { <PriceCard item=p /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = site_context().content.with_value(|c| c.contact.clone());

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Контакты"</h2>
            <p class="contact-intro">{contact.intro}</p>
            <a class="telegram-btn" href=contact.telegram_url target="_blank" rel="noopener noreferrer">
                "Telegram"
            </a>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let (telegram, copyright) = site_context()
        .content
        .with_value(|c| (c.contact.telegram_url.clone(), c.copyright.clone()));

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <h2>"Контакты"</h2>
                    <a href=telegram.clone() target="_blank" rel="noopener noreferrer">"Telegram"</a>
                </div>
                <div>
                    <h2>"Социальные сети"</h2>
                    <a class="social-link" href=telegram target="_blank" rel="noopener noreferrer" aria-label="Telegram">
                        "✈"
                    </a>
                </div>
            </div>
            <p class="copyright">{copyright}</p>
        </footer>
    }
}
