use std::cell::RefCell;
use std::rc::Rc;

use crate::schedule::Scheduler;

pub const SHOW_CLASS: &str = "show";
pub const DISMISS_KEY: &str = "Escape";

/// What the toast currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub title: String,
    pub message: String,
    pub visible: bool,
}

/// Where toast content ends up. Implementations skip parts that are not
/// present on the page.
pub trait ToastView {
    fn set_title(&mut self, title: &str);
    fn set_message(&mut self, message: &str);
    fn set_visible(&mut self, visible: bool);
}

struct Inner {
    state: RefCell<ToastState>,
    view: Rc<RefCell<dyn ToastView>>,
    scheduler: Rc<dyn Scheduler>,
    hide_after_ms: u32,
}

/// The page's single toast. Cloning shares the same toast.
///
/// Every `show` queues its own auto-hide; earlier timers are left running,
/// so a hide queued by an older `show` can close a newer message early.
#[derive(Clone)]
pub struct ToastNotifier {
    inner: Rc<Inner>,
}

impl ToastNotifier {
    pub fn new(
        view: Rc<RefCell<dyn ToastView>>,
        scheduler: Rc<dyn Scheduler>,
        hide_after_ms: u32,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ToastState::default()),
                view,
                scheduler,
                hide_after_ms,
            }),
        }
    }

    pub fn state(&self) -> ToastState {
        self.inner.state.borrow().clone()
    }

    pub fn show(&self, title: &str, message: &str) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.title = title.to_string();
            state.message = message.to_string();
            state.visible = true;
        }
        {
            let mut view = self.inner.view.borrow_mut();
            view.set_title(title);
            view.set_message(message);
            view.set_visible(true);
        }

        let toast = self.clone();
        self.inner
            .scheduler
            .set_timeout(self.inner.hide_after_ms, Box::new(move || toast.hide()));
    }

    /// Safe to call when already hidden.
    pub fn hide(&self) {
        self.inner.state.borrow_mut().visible = false;
        self.inner.view.borrow_mut().set_visible(false);
    }

    /// Hides on Escape; other keys are ignored.
    pub fn handle_key(&self, key: &str) {
        if key == DISMISS_KEY {
            self.hide();
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub title: String,
    pub message: String,
    pub visible: bool,
    pub hides: usize,
}

#[cfg(test)]
impl ToastView for RecordingView {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        if !visible {
            self.hides += 1;
        }
        self.visible = visible;
    }
}
