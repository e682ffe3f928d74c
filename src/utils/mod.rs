//! ユーティリティモジュール

pub mod log_trace;
pub mod preference;
pub mod router;
pub mod scroll;
