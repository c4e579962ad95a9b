use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::page::ids;
use portfolio_core::toast::{ToastNotifier, ToastView, SHOW_CLASS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, KeyboardEvent, Window};

use crate::timers::BrowserScheduler;
use crate::{dom, log};

/// Toast nodes as found at startup; any of them may be missing.
pub struct DomToastView {
    container: Option<HtmlElement>,
    title: Option<HtmlElement>,
    message: Option<HtmlElement>,
}

impl DomToastView {
    pub fn find(document: &Document) -> Self {
        Self {
            container: dom::by_id(document, ids::TOAST),
            title: dom::by_id(document, ids::TOAST_TITLE),
            message: dom::by_id(document, ids::TOAST_MESSAGE),
        }
    }
}

impl ToastView for DomToastView {
    fn set_title(&mut self, title: &str) {
        if let Some(node) = &self.title {
            node.set_text_content(Some(title));
        }
    }

    fn set_message(&mut self, message: &str) {
        if let Some(node) = &self.message {
            node.set_text_content(Some(message));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let Some(container) = &self.container else {
            return;
        };
        let class_list = container.class_list();
        let result = if visible {
            class_list.add_1(SHOW_CLASS)
        } else {
            class_list.remove_1(SHOW_CLASS)
        };
        log::report("Failed to toggle toast", result);
    }
}

pub fn init_toast(window: &Window, document: &Document, hide_after_ms: u32) -> ToastNotifier {
    ToastNotifier::new(
        Rc::new(RefCell::new(DomToastView::find(document))),
        Rc::new(BrowserScheduler::new(window.clone())),
        hide_after_ms,
    )
}

/// Escape dismisses the toast.
pub fn init_escape_key(document: &Document, toast: ToastNotifier) -> Result<(), JsValue> {
    dom::listen(document, "keydown", move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            toast.handle_key(&key_event.key());
        }
    })
}
