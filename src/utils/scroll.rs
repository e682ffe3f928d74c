//! ページ内スクロール補助

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::HEADER_SCROLL_THRESHOLD;

/// ヘッダーをスクロール状態にするか
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

pub fn section_scroll_top(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

/// 横スクロール位置から現在のスライド番号を求める
///
/// 項目幅は (全体幅 - 余白合計) / 件数 で近似する。
pub fn slide_index(scroll_left: f64, scroll_width: f64, count: usize, gap: f64) -> usize {
    if count == 0 {
        return 0;
    }
    let avg_width = (scroll_width - (count as f64 - 1.0) * gap) / count as f64;
    if avg_width <= 0.0 {
        return 0;
    }
    let index = (scroll_left / avg_width).round().max(0.0) as usize;
    index.min(count - 1)
}

pub fn slide_offset(index: usize, item_width: f64, gap: f64) -> f64 {
    index as f64 * (item_width + gap)
}

fn smooth_options() -> ScrollToOptions {
    let opts = ScrollToOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts
}

/// IDのセクションまでスムーズスクロール（見つからなければ false）
pub fn scroll_to_section(id: &str, header_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        return false;
    };

    let opts = smooth_options();
    opts.set_top(section_scroll_top(target.offset_top() as f64, header_offset));
    window.scroll_to_with_scroll_to_options(&opts);
    true
}

/// 横スクロールコンテナを指定スライドまで移動
pub fn scroll_container_to_slide(container: &Element, index: usize, gap: f64) {
    let item_width = container
        .first_element_child()
        .and_then(|c| c.dyn_into::<HtmlElement>().ok())
        .map(|c| c.offset_width() as f64)
        .unwrap_or(0.0);

    let opts = smooth_options();
    opts.set_left(slide_offset(index, item_width, gap));
    container.scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_switches_after_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.5));
    }

    #[test]
    fn section_top_subtracts_header_offset() {
        assert_eq!(section_scroll_top(800.0, 60.0), 740.0);
        assert_eq!(section_scroll_top(30.0, 60.0), 0.0);
    }

    #[test]
    fn slide_index_follows_scroll_position() {
        // 幅300pxの項目4件 + 余白32px x 3
        let width = 4.0 * 300.0 + 3.0 * 32.0;
        assert_eq!(slide_index(0.0, width, 4, 32.0), 0);
        assert_eq!(slide_index(140.0, width, 4, 32.0), 0);
        assert_eq!(slide_index(332.0, width, 4, 32.0), 1);
        assert_eq!(slide_index(996.0, width, 4, 32.0), 3);
    }

    #[test]
    fn slide_index_is_clamped() {
        assert_eq!(slide_index(10_000.0, 1296.0, 4, 32.0), 3);
        assert_eq!(slide_index(50.0, 1296.0, 0, 32.0), 0);
        assert_eq!(slide_index(50.0, 0.0, 4, 32.0), 0);
    }

    #[test]
    fn slide_offset_includes_gap() {
        assert_eq!(slide_offset(0, 300.0, 32.0), 0.0);
        assert_eq!(slide_offset(2, 300.0, 32.0), 664.0);
    }
}
