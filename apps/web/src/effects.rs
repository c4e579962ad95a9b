use js_sys::Array;
use portfolio_core::page::{classes, selectors};
use portfolio_core::reveal::{self, RevealStyle};
use portfolio_core::ripple::{self, ButtonRect, Ripple};
use portfolio_core::schedule::Scheduler;
use portfolio_core::{hover, parallax};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use crate::timers::BrowserScheduler;
use crate::{dom, log};

fn apply_reveal(element: &HtmlElement, style: &RevealStyle) {
    dom::set_style(element, "opacity", style.opacity);
    dom::set_style(element, "transform", &style.transform);
    if let Some(transition) = &style.transition {
        dom::set_style(element, "transition", transition);
    }
}

/// Hides timeline and tech items, then fades each in the first time it
/// becomes visible.
pub fn init_scroll_reveal(document: &Document) -> Result<(), JsValue> {
    let on_intersect = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(style) = reveal::on_intersection(entry.is_intersecting()) else {
                continue;
            };
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                apply_reveal(&target, &style);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal::THRESHOLD));
    options.set_root_margin(reveal::ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for group in reveal::GROUPS {
        for (index, item) in dom::query_all(document, group.selector).iter().enumerate() {
            apply_reveal(item, &group.hidden_style(index));
            observer.observe(item);
        }
    }

    Ok(())
}

pub fn init_parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    let scroll_window = window.clone();
    let document = document.clone();
    dom::listen(window, "scroll", move |_| {
        let scroll_y = scroll_window.page_y_offset().unwrap_or_default();

        if let Some(lines) = dom::query(&document, selectors::TECH_LINES) {
            let offset = parallax::background_offset(scroll_y);
            dom::set_style(&lines, "transform", &parallax::translate_y(offset));
        }

        for (index, element) in dom::query_all(&document, selectors::CODE_ELEMENT)
            .iter()
            .enumerate()
        {
            let offset = parallax::overlay_offset(index, scroll_y);
            dom::set_style(element, "transform", &parallax::translate_y(offset));
        }
    })
}

/// Marks `<body>` as loaded, right away if the load event already passed.
pub fn init_load_marker(window: &Window, document: &Document) -> Result<(), JsValue> {
    fn mark_loaded(document: &Document) {
        if let Some(body) = document.body() {
            log::report(
                "Failed to mark page loaded",
                body.class_list().add_1(classes::LOADED),
            );
        }
    }

    if dom::has_loaded(&document.ready_state()) {
        mark_loaded(document);
        return Ok(());
    }

    let document = document.clone();
    dom::listen(window, "load", move |_| mark_loaded(&document))
}

pub fn init_social_glow(document: &Document) -> Result<(), JsValue> {
    for icon in dom::query_all(document, selectors::SOCIAL_ICON) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = icon.clone();
            dom::listen(&icon, event, move |_| {
                dom::set_style(&target, "box-shadow", hover::box_shadow(hovered));
            })?;
        }
    }
    Ok(())
}

/// Installs the ripple keyframes and a click ripple on every button.
pub fn init_ripples(window: &Window, document: &Document, lifetime_ms: u32) -> Result<(), JsValue> {
    let keyframes = document.create_element("style")?;
    keyframes.set_text_content(Some(ripple::KEYFRAMES));
    if let Some(head) = document.head() {
        head.append_child(&keyframes)?;
    }

    let scheduler = BrowserScheduler::new(window.clone());
    for button in dom::query_all(document, selectors::BUTTON) {
        let target = button.clone();
        let document = document.clone();
        let scheduler = scheduler.clone();
        dom::listen(&button, "click", move |event| {
            let Some(click) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Ok(span) = document.create_element("span") else {
                return;
            };

            let rect = target.get_bounding_client_rect();
            let ripple = Ripple::at(
                ButtonRect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
                f64::from(click.client_x()),
                f64::from(click.client_y()),
            );

            log::report(
                "Failed to style ripple",
                span.set_attribute("style", &ripple.css_text(lifetime_ms)),
            );
            dom::set_style(&target, "position", "relative");
            dom::set_style(&target, "overflow", "hidden");
            log::report("Failed to attach ripple", target.append_child(&span));

            scheduler.set_timeout(lifetime_ms, Box::new(move || span.remove()));
        })?;
    }
    Ok(())
}
