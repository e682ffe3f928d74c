//! 期限付き設定ストア
//!
//! Cookie（既定）/ localStorage / メモリの3種類のバックエンドを
//! `PreferenceStore` で差し替えられるようにしている。
//! 書き込みはベストエフォートで、失敗してもログを残すだけ。

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::config::{PreferenceBackend, COOKIE_PATH, LOCAL_STORAGE_PREFIX, PREFERENCE_BACKEND};
use crate::utils::log_trace::log_warn;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("ストレージが利用できません: {0}")]
    Unavailable(&'static str),
    #[error("書き込みが拒否されました: {0}")]
    WriteRejected(String),
    #[error("シリアライズ失敗: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("有効期限が範囲外です: {0}日")]
    ExpiryOutOfRange(i64),
}

/// 名前付きの期限付き設定の読み書き
///
/// `ttl_days == 0` は期限なし（Cookieならセッション中、他は無期限）。
pub trait PreferenceStore {
    fn try_write(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), PreferenceError>;

    /// 期限切れ・未保存・壊れた値はすべて `None`
    fn read(&self, name: &str) -> Option<String>;

    fn write(&self, name: &str, value: &str, ttl_days: i64) {
        if let Err(e) = self.try_write(name, value, ttl_days) {
            log_warn("preference", &format!("{} の保存に失敗: {}", name, e));
        }
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn try_write(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), PreferenceError> {
        (**self).try_write(name, value, ttl_days)
    }

    fn read(&self, name: &str) -> Option<String> {
        (**self).read(name)
    }
}

/// 設定されたバックエンドのストアを生成
pub fn make_store(backend: PreferenceBackend) -> Box<dyn PreferenceStore> {
    match backend {
        PreferenceBackend::Cookie => Box::new(CookieStore::new()),
        PreferenceBackend::LocalStorage => Box::new(LocalStorageStore),
        PreferenceBackend::Memory => Box::new(MemoryStore::new(Utc::now())),
    }
}

pub fn default_store() -> Box<dyn PreferenceStore> {
    make_store(PREFERENCE_BACKEND)
}

/// 書き込み時点から `ttl_days` 日後の期限（0なら期限なし）
pub fn expiry_after(now: DateTime<Utc>, ttl_days: i64) -> Result<Option<DateTime<Utc>>, PreferenceError> {
    if ttl_days == 0 {
        return Ok(None);
    }
    Duration::try_days(ttl_days)
        .and_then(|d| now.checked_add_signed(d))
        .map(Some)
        .ok_or(PreferenceError::ExpiryOutOfRange(ttl_days))
}

// ============================================
// Cookie
// ============================================

/// `name=value; expires=...; path=/` 形式の1エントリを生成
pub fn format_cookie(name: &str, value: &str, expires: Option<DateTime<Utc>>, path: &str) -> String {
    let expires = expires
        .map(|at| format!("; expires={}", at.format("%a, %d %b %Y %H:%M:%S GMT")))
        .unwrap_or_default();
    format!("{}={}{}; path={}", name, value, expires, path)
}

/// `document.cookie` 形式の文字列から値を取り出す
///
/// 先頭の空白は読み飛ばし、`=` を含まないエントリは無視する。
/// 空の値は未保存として扱う。
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .map(|entry| entry.trim_start())
        .filter_map(|entry| entry.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_end().to_string())
        .filter(|value| !value.is_empty())
}

/// `document.cookie` を使うストア（期限切れの削除はブラウザ任せ）
pub struct CookieStore {
    path: &'static str,
}

impl CookieStore {
    pub fn new() -> Self {
        CookieStore { path: COOKIE_PATH }
    }

    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }
}

impl Default for CookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for CookieStore {
    fn try_write(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), PreferenceError> {
        let document = Self::document().ok_or(PreferenceError::Unavailable("document"))?;
        let cookie = format_cookie(name, value, expiry_after(Utc::now(), ttl_days)?, self.path);
        document
            .set_cookie(&cookie)
            .map_err(|e| PreferenceError::WriteRejected(format!("{:?}", e)))
    }

    fn read(&self, name: &str) -> Option<String> {
        let raw = Self::document()?.cookie().ok()?;
        parse_cookie(&raw, name)
    }
}

// ============================================
// localStorage
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreference {
    pub value: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredPreference {
    pub fn new(value: &str, now: DateTime<Utc>, ttl_days: i64) -> Result<Self, PreferenceError> {
        Ok(StoredPreference {
            value: value.to_string(),
            expires_at: expiry_after(now, ttl_days)?,
        })
    }

    /// 期限内の値のみ返す
    pub fn live_value(self, now: DateTime<Utc>) -> Option<String> {
        let alive = self.expires_at.map_or(true, |at| now < at);
        (alive && !self.value.is_empty()).then_some(self.value)
    }
}

/// localStorageに保存したJSONを読む（壊れたJSON・期限切れ・空値は `None`）
pub fn decode_entry(json: &str, now: DateTime<Utc>) -> Option<String> {
    serde_json::from_str::<StoredPreference>(json)
        .ok()?
        .live_value(now)
}

/// localStorageに期限付きJSONとして保存するストア
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn key(name: &str) -> String {
        format!("{}{}", LOCAL_STORAGE_PREFIX, name)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn try_write(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), PreferenceError> {
        let storage = Self::storage().ok_or(PreferenceError::Unavailable("localStorage"))?;
        let json = serde_json::to_string(&StoredPreference::new(value, Utc::now(), ttl_days)?)?;
        storage
            .set_item(&Self::key(name), &json)
            .map_err(|e| PreferenceError::WriteRejected(format!("{:?}", e)))
    }

    fn read(&self, name: &str) -> Option<String> {
        let json = Self::storage()?.get_item(&Self::key(name)).ok()??;
        decode_entry(&json, Utc::now())
    }
}

// ============================================
// メモリ（テスト・差し替え用）
// ============================================

/// 時計を操作できるメモリ上のストア
pub struct MemoryStore {
    entries: RefCell<HashMap<String, StoredPreference>>,
    now: RefCell<DateTime<Utc>>,
}

impl MemoryStore {
    pub fn new(now: DateTime<Utc>) -> Self {
        MemoryStore {
            entries: RefCell::new(HashMap::new()),
            now: RefCell::new(now),
        }
    }

    #[cfg(test)]
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.borrow_mut();
        *now = *now + by;
    }

    /// 期限を直接指定して書き込む
    #[cfg(test)]
    pub fn insert_raw(&self, name: &str, entry: StoredPreference) {
        self.entries.borrow_mut().insert(name.to_string(), entry);
    }
}

impl PreferenceStore for MemoryStore {
    fn try_write(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), PreferenceError> {
        let entry = StoredPreference::new(value, *self.now.borrow(), ttl_days)?;
        self.entries.borrow_mut().insert(name.to_string(), entry);
        Ok(())
    }

    fn read(&self, name: &str) -> Option<String> {
        let entry = self.entries.borrow().get(name).cloned()?;
        entry.live_value(*self.now.borrow())
    }
}

/// 書き込みが常に失敗するストア（保存できない環境の再現用）
#[cfg(test)]
pub struct FailingStore;

#[cfg(test)]
impl PreferenceStore for FailingStore {
    fn try_write(&self, _name: &str, _value: &str, _ttl_days: i64) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable("test"))
    }

    fn read(&self, _name: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn cookie_string_has_expiry_and_root_path() {
        let expires = expiry_after(t0(), 30).unwrap();
        let cookie = format_cookie("popupClosed", "true", expires, "/");
        assert_eq!(cookie, "popupClosed=true; expires=Mon, 31 Mar 2025 12:00:00 GMT; path=/");
    }

    #[test]
    fn cookie_without_expiry_omits_attribute() {
        assert_eq!(format_cookie("a", "b", None, "/"), "a=b; path=/");
    }

    #[test]
    fn parse_cookie_tolerates_leading_whitespace() {
        let raw = "theme=dark;   popupClosed=true; lang=ru";
        assert_eq!(parse_cookie(raw, "popupClosed").as_deref(), Some("true"));
        assert_eq!(parse_cookie(raw, "lang").as_deref(), Some("ru"));
    }

    #[test]
    fn parse_cookie_requires_exact_name() {
        let raw = "popupClosedOld=true; xpopupClosed=true";
        assert_eq!(parse_cookie(raw, "popupClosed"), None);
    }

    #[test]
    fn malformed_or_empty_entries_read_as_absent() {
        assert_eq!(parse_cookie("popupClosed", "popupClosed"), None);
        assert_eq!(parse_cookie("popupClosed=", "popupClosed"), None);
        assert_eq!(parse_cookie("", "popupClosed"), None);
        assert_eq!(parse_cookie(";;  ; =x", "popupClosed"), None);
    }

    #[test]
    fn write_then_read_returns_value() {
        let store = MemoryStore::new(t0());
        store.write("popupClosed", "true", 30);
        assert_eq!(store.read("popupClosed").as_deref(), Some("true"));
    }

    #[test]
    fn past_expiry_reads_as_absent() {
        let store = MemoryStore::new(t0());
        store.insert_raw(
            "popupClosed",
            StoredPreference { value: "true".into(), expires_at: Some(t0() - Duration::days(1)) },
        );
        assert_eq!(store.read("popupClosed"), None);
    }

    #[test]
    fn entry_expires_after_ttl() {
        let store = MemoryStore::new(t0());
        store.write("popupClosed", "true", 30);
        store.advance(Duration::days(29));
        assert!(store.read("popupClosed").is_some());
        store.advance(Duration::days(1));
        assert_eq!(store.read("popupClosed"), None);
    }

    #[test]
    fn rewrite_refreshes_expiry() {
        let store = MemoryStore::new(t0());
        store.write("popupClosed", "true", 30);
        store.advance(Duration::days(20));
        store.write("popupClosed", "true", 30);
        store.advance(Duration::days(20));
        assert_eq!(store.read("popupClosed").as_deref(), Some("true"));
    }

    #[test]
    fn stored_preference_json_round_trip_keeps_expiry() {
        let entry = StoredPreference::new("true", t0(), 30).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: StoredPreference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
        assert_eq!(parsed.live_value(t0()).as_deref(), Some("true"));
    }

    #[test]
    fn huge_ttl_is_rejected_without_panicking() {
        let store = MemoryStore::new(t0());
        assert!(matches!(
            store.try_write("popupClosed", "true", i64::MAX / 1000),
            Err(PreferenceError::ExpiryOutOfRange(_))
        ));
        assert!(expiry_after(t0(), i64::MIN).is_err());
        store.write("popupClosed", "true", i64::MAX / 1000);
        assert_eq!(store.read("popupClosed"), None);
    }

    #[test]
    fn zero_ttl_means_no_expiry() {
        assert_eq!(expiry_after(t0(), 0).unwrap(), None);
        let store = MemoryStore::new(t0());
        store.write("popupClosed", "true", 0);
        assert_eq!(store.read("popupClosed").as_deref(), Some("true"));
        store.advance(Duration::days(3650));
        assert_eq!(store.read("popupClosed").as_deref(), Some("true"));
    }

    #[test]
    fn zero_ttl_cookie_is_session_only() {
        let expires = expiry_after(t0(), 0).unwrap();
        assert_eq!(format_cookie("popupClosed", "true", expires, "/"), "popupClosed=true; path=/");
    }

    #[test]
    fn decode_entry_reads_live_values_only() {
        let live = r#"{"value":"true","expires_at":"2025-03-31T12:00:00Z"}"#;
        assert_eq!(decode_entry(live, t0()).as_deref(), Some("true"));
        assert_eq!(decode_entry(live, t0() + Duration::days(30)), None);

        let forever = r#"{"value":"true"}"#;
        assert_eq!(decode_entry(forever, t0() + Duration::days(10_000)).as_deref(), Some("true"));
        let explicit_null = r#"{"value":"true","expires_at":null}"#;
        assert_eq!(decode_entry(explicit_null, t0()).as_deref(), Some("true"));
    }

    #[test]
    fn decode_entry_rejects_malformed_and_empty() {
        assert_eq!(decode_entry("", t0()), None);
        assert_eq!(decode_entry("true", t0()), None);
        assert_eq!(decode_entry("{\"value\":", t0()), None);
        assert_eq!(decode_entry(r#"{"expires_at":"2025-03-31T12:00:00Z"}"#, t0()), None);
        assert_eq!(decode_entry(r#"{"value":"","expires_at":null}"#, t0()), None);
        assert_eq!(decode_entry(r#"{"value":"true","expires_at":"not a date"}"#, t0()), None);
    }

    #[test]
    fn local_storage_entry_written_by_store_decodes() {
        let entry = StoredPreference::new("true", t0(), 30).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(decode_entry(&json, t0() + Duration::days(29)).as_deref(), Some("true"));
        assert_eq!(decode_entry(&json, t0() + Duration::days(30)), None);
    }

    #[test]
    fn boxed_memory_backend_keeps_values_for_the_session() {
        let store = make_store(PreferenceBackend::Memory);
        assert_eq!(store.read("popupClosed"), None);
        store.write("popupClosed", "true", 30);
        assert_eq!(store.read("popupClosed").as_deref(), Some("true"));
    }

    #[test]
    fn failing_write_is_swallowed() {
        FailingStore.write("popupClosed", "true", 30);
        assert_eq!(FailingStore.read("popupClosed"), None);
    }
}
