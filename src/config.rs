//! サイト設定（コンパイル時定数）

/// ポップアップを閉じたことを記録する設定名
pub const POPUP_PREFERENCE_NAME: &str = "popupClosed";

/// 閉じた記録の有効日数
pub const POPUP_PREFERENCE_TTL_DAYS: i64 = 30;

/// Cookieのスコープ（サイトルート）
pub const COOKIE_PATH: &str = "/";

/// localStorageバックエンド使用時のキー接頭辞
pub const LOCAL_STORAGE_PREFIX: &str = "prokopenko_site.";

/// 設定の保存先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceBackend {
    Cookie,
    LocalStorage,
    /// 保存しない（セッション中のみ）
    Memory,
}

pub const PREFERENCE_BACKEND: PreferenceBackend = PreferenceBackend::Cookie;

/// ヘッダーをスクロール状態に切り替える位置(px)
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// 固定ヘッダー分のスクロール補正(px)
pub const HEADER_OFFSET: f64 = 60.0;

/// ポートフォリオ項目間の余白(px)
pub const PORTFOLIO_GAP: f64 = 32.0;
