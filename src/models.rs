//! データ構造体モジュール

use serde::Deserialize;

use crate::utils::log_trace::{log_error, log_info};

// ============================================
// 表示状態
// ============================================

/// フラグメントから決まる表示ページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Main,
    NotFound,
}

/// お知らせポップアップの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Visible,
    Hidden,
}

// ============================================
// サイトコンテンツ（data/site_content.json）
// ============================================

const SITE_CONTENT_JSON: &str = include_str!("../data/site_content.json");

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiteContent {
    pub owner_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub hero: HeroMedia,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub about: AboutContent,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    #[serde(default)]
    pub prices: Vec<PriceItem>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub contact: ContactContent,
    #[serde(default)]
    pub letter: LetterContent,
    #[serde(default)]
    pub copyright: String,
}

/// ヒーロー背景
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", content = "src", rename_all = "lowercase")]
pub enum HeroMedia {
    Image(String),
    Video(String),
}

impl Default for HeroMedia {
    fn default() -> Self {
        HeroMedia::Image(String::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    /// セクションID（"#" なし）
    pub target: String,
    pub label: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AboutContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceItem {
    pub image: String,
    #[serde(default)]
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    /// 「撮影を予約」ボタンのスクロール先
    #[serde(default = "default_contact_target")]
    pub contact_target: String,
}

fn default_contact_target() -> String {
    "contact".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioItem {
    pub image: String,
    #[serde(default)]
    pub alt: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_portfolio_link")]
    pub link: String,
}

fn default_portfolio_link() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactContent {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub telegram_url: String,
}

/// 手紙フォームへの案内（ポップアップ・フローティングボタン）
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LetterContent {
    #[serde(default)]
    pub form_url: String,
    #[serde(default)]
    pub popup_message: String,
    #[serde(default)]
    pub popup_action: String,
    #[serde(default)]
    pub popup_close: String,
    #[serde(default)]
    pub floating_label: String,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 埋め込みJSONを読み込む（壊れていれば空のコンテンツ）
    pub fn load() -> Self {
        match Self::parse(SITE_CONTENT_JSON) {
            Ok(content) => {
                log_info("content", &format!("{} セクション分のナビを読み込み", content.nav.len()));
                content
            }
            Err(e) => {
                log_error("content", &format!("site_content.json 解析エラー: {}", e));
                SiteContent::default()
            }
        }
    }
}
