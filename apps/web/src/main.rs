mod canvas;
mod contact_form;
mod dom;
mod effects;
mod hero;
mod log;
mod nav;
mod skills;
mod timers;
mod toast_view;

use std::rc::Rc;

use portfolio_core::PortfolioConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

fn main() {
    if let Err(error) = start() {
        log::error("Failed to start portfolio", &error);
    }
}

/// Waits for the document to finish parsing before wiring anything up.
fn start() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    if !dom::is_parsing(&document.ready_state()) {
        return init(&window, &document);
    }

    let ready_document = document.clone();
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Err(error) = init(&window, &ready_document) {
            log::error("Failed to start portfolio", &error);
        }
    })
}

type Step<'a, E> = (&'static str, Box<dyn FnOnce() -> Result<(), E> + 'a>);

fn step<'a, E>(name: &'static str, wire: impl FnOnce() -> Result<(), E> + 'a) -> Step<'a, E> {
    (name, Box::new(wire))
}

/// Runs every step even when earlier ones fail; returns how many failed.
fn run_steps<E>(steps: Vec<Step<'_, E>>, mut on_error: impl FnMut(&'static str, E)) -> usize {
    let mut failures = 0;
    for (name, wire) in steps {
        if let Err(error) = wire() {
            failures += 1;
            on_error(name, error);
        }
    }
    failures
}

fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = PortfolioConfig::embedded()
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    let config = Rc::new(config);
    let toast = toast_view::init_toast(window, document, config.timings.toast_hide_ms);
    let timings = config.timings;

    let steps = vec![
        step("hero text", || hero::init_text_cycle(window, document, &config)),
        step("navbar", || nav::init_navbar(window, document)),
        step("mobile menu", || nav::init_mobile_menu(document)),
        step("skills chart", || {
            skills::init_skills_chart(window, document, Rc::clone(&config))
        }),
        step("contact form", || {
            contact_form::init_contact_form(document, toast.clone())
        }),
        step("escape key", || toast_view::init_escape_key(document, toast.clone())),
        step("scroll reveal", || effects::init_scroll_reveal(document)),
        step("parallax", || effects::init_parallax(window, document)),
        step("load marker", || effects::init_load_marker(window, document)),
        step("social glow", || effects::init_social_glow(document)),
        step("ripples", || {
            effects::init_ripples(window, document, timings.ripple_lifetime_ms)
        }),
    ];

    let failures = run_steps(steps, |name, error| {
        log::error(&format!("Failed to wire {name}"), &error);
    });
    if failures == 0 {
        log::info("Portfolio loaded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{run_steps, step};

    #[test]
    fn failed_step_does_not_stop_later_ones() {
        let ran = RefCell::new(Vec::new());
        let mut errors = Vec::new();

        let steps = vec![
            step("first", || {
                ran.borrow_mut().push("first");
                Ok(())
            }),
            step("second", || {
                ran.borrow_mut().push("second");
                Err("observer unavailable")
            }),
            step("third", || {
                ran.borrow_mut().push("third");
                Ok(())
            }),
        ];
        let failures = run_steps(steps, |name, error| errors.push((name, error)));

        assert_eq!(failures, 1);
        assert_eq!(*ran.borrow(), ["first", "second", "third"]);
        assert_eq!(errors, [("second", "observer unavailable")]);
    }

    #[test]
    fn all_steps_passing_reports_nothing() {
        let steps = vec![step("only", || Ok::<(), &str>(()))];
        let failures = run_steps(steps, |_, _| unreachable!());
        assert_eq!(failures, 0);
    }
}
