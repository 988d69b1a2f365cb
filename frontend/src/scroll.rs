use web_sys::{window, ScrollBehavior, ScrollToOptions};
use crate::config;

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smooth-scrolls so the section lands just below the fixed header.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::warn!("No section with id {}", id);
        return;
    };
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + page_offset - config::HEADER_OFFSET;
    smooth_scroll_to(top);
}
