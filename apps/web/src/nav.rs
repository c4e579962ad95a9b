use portfolio_core::navbar;
use portfolio_core::page::{classes, ids, selectors};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::{dom, log};

pub fn init_navbar(window: &Window, document: &Document) -> Result<(), JsValue> {
    if let Some(bar) = dom::by_id::<HtmlElement>(document, ids::NAVBAR) {
        let scroll_window = window.clone();
        dom::listen(window, "scroll", move |_| {
            let scroll_y = scroll_window.scroll_y().unwrap_or_default();
            let class_list = bar.class_list();
            let result = if navbar::is_scrolled(scroll_y) {
                class_list.add_1(navbar::SCROLLED_CLASS)
            } else {
                class_list.remove_1(navbar::SCROLLED_CLASS)
            };
            log::report("Failed to update navbar class", result);
        })?;
    }

    for link in dom::query_all(document, selectors::NAV_LINK) {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            if let Some(id) = navbar::anchor_id(&href) {
                scroll_to_section(&window, &document, id);
            }
        })?;
    }

    Ok(())
}

/// Smooth-scrolls so the section clears the fixed navbar. Unknown ids are
/// ignored.
pub fn scroll_to_section(window: &Window, document: &Document, id: &str) {
    let Some(section) = dom::by_id::<HtmlElement>(document, id) else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(navbar::scroll_top_for(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let Some(button) = dom::by_id::<HtmlElement>(document, ids::MOBILE_MENU_BUTTON) else {
        return Ok(());
    };

    let document = document.clone();
    dom::listen(&button, "click", move |_| {
        if let Some(links) = dom::query(&document, selectors::NAV_LINKS) {
            log::report(
                "Failed to toggle mobile menu",
                links.class_list().toggle(classes::MENU_ACTIVE),
            );
        }
    })
}
