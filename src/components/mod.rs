//! UIコンポーネントモジュール

pub mod header;
pub mod letter_popup;
pub mod portfolio;
pub mod sections;

pub use header::Header;
pub use letter_popup::{FloatingLetterButton, LetterPopup};
pub use portfolio::PortfolioSection;
pub use sections::{AboutSection, ContactSection, Footer, HeroSection, PriceSection, ServicesSection};
