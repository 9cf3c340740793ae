//! Global DOM Bindings
//!
//! Window/document listeners that cannot live on a single element:
//! the header hide-on-scroll effect and the close-menu-on-outside-click
//! behavior. Closures are leaked with `forget()`; both bindings are
//! page-lifetime.

use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Scroll offset above which the header may hide
pub const HIDE_THRESHOLD_PX: f64 = 100.0;

/// Header visibility decision: hidden only while scrolling down past the
/// threshold. Pure so the scroll behavior is testable without a window.
pub fn header_hidden(last: f64, current: f64) -> bool {
    current > last && current > HIDE_THRESHOLD_PX
}

/// Bind the window scroll listener driving the header effect
pub fn bind_header_scroll(ctx: AppContext) {
    use wasm_bindgen::closure::Closure;

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        if let Some(win) = web_sys::window() {
            let current = win.page_y_offset().unwrap_or(0.0);
            ctx.on_scroll(current);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}

/// Bind the document click listener that closes the mobile menu when the
/// click lands outside both the nav panel and the menu button
pub fn bind_menu_outside_click(ctx: AppContext) {
    use wasm_bindgen::closure::Closure;

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| {
                el.closest(".nav-links").ok().flatten().is_some()
                    || el.closest(".mobile-menu-btn").ok().flatten().is_some()
            })
            .unwrap_or(false);

        if !inside {
            ctx.close_menu();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

/// Smooth-scroll the first element matching `selector` into view.
/// Silently does nothing when no element matches.
pub fn smooth_scroll_to(selector: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Ok(Some(target)) = doc.query_selector(selector) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_hides_scrolling_down_past_threshold() {
        // Monotonically increasing offsets crossing 100px
        let offsets = [0.0, 40.0, 90.0, 150.0, 400.0];
        let mut last = 0.0;
        let mut hidden = false;
        for current in offsets {
            hidden = header_hidden(last, current);
            last = current;
        }
        assert!(hidden);
    }

    #[test]
    fn test_header_shows_again_scrolling_up() {
        assert!(header_hidden(300.0, 400.0));
        assert!(!header_hidden(400.0, 300.0));
    }

    #[test]
    fn test_header_visible_below_threshold() {
        // Scrolling down but still above the fold
        assert!(!header_hidden(10.0, 80.0));
        assert!(!header_hidden(0.0, 100.0));
    }
}
