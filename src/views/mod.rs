//! ビューモジュール
//!
//! ルーターが選んだ `PageView` ごとのページ全体。

pub mod main_view;
pub mod not_found;

pub use main_view::MainView;
pub use not_found::NotFoundView;
