//! 時系列トレースログ
//! 操作とイベントをメモリ上に記録し、ブラウザのコンソールにも出力する

use chrono::Utc;
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String, // "router", "popup", "preference", "content"
    pub message: String,
}

impl LogEntry {
    fn console_line(&self) -> String {
        format!("[{}] {}", self.category, self.message)
    }
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogTrace {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn log(&mut self, level: LogLevel, category: &str, message: &str) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            level,
            category: category.to_string(),
            message: message.to_string(),
        };
        emit_console(&entry);
        self.record(entry);
    }

    fn record(&mut self, entry: LogEntry) {
        if self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    #[cfg(test)]
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn emit_console(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.console_line());
    match entry.level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

// ネイティブ（テスト）ではブラウザのコンソールが存在しない
#[cfg(not(target_arch = "wasm32"))]
fn emit_console(entry: &LogEntry) {
    eprintln!("{}", entry.console_line());
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Info, category, message));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Warn, category, message));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(LogLevel::Error, category, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_dropped_at_capacity() {
        let mut trace = LogTrace::with_capacity(2);
        trace.log(LogLevel::Info, "router", "first");
        trace.log(LogLevel::Warn, "popup", "second");
        trace.log(LogLevel::Error, "preference", "third");

        let logs = trace.get_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "second");
        assert_eq!(logs[1].level, LogLevel::Error);
    }

    #[test]
    fn console_line_is_prefixed_with_category() {
        let mut trace = LogTrace::with_capacity(4);
        trace.log(LogLevel::Warn, "preference", "cookie rejected");
        let logs = trace.get_logs();
        assert_eq!(logs[0].console_line(), "[preference] cookie rejected");
    }

    #[test]
    fn global_helpers_append_to_thread_trace() {
        log_warn("content", "loaded");
        let last = LOG_TRACE.with(|trace| trace.borrow().get_logs().pop());
        let last = last.expect("entry recorded");
        assert_eq!(last.level, LogLevel::Warn);
        assert_eq!(last.message, "loaded");
    }
}
