//! トップページ（全セクション）

use leptos::*;

use crate::components::{
    AboutSection, ContactSection, Footer, Header, HeroSection, PortfolioSection, PriceSection,
    ServicesSection,
};

#[component]
pub fn MainView() -> impl IntoView {
    view! {
        <Header />
        <HeroSection />
        <AboutSection />
        <ServicesSection />
        <PriceSection />
        <PortfolioSection />
        <ContactSection />
        <Footer />
    }
}
