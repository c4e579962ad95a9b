use portfolio_core::page::ids;
use portfolio_core::text_cycle::TextCycle;
use portfolio_core::PortfolioConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::{dom, timers};

/// Rotates the hero label through the configured texts.
pub fn init_text_cycle(
    window: &Window,
    document: &Document,
    config: &PortfolioConfig,
) -> Result<(), JsValue> {
    let Some(target) = dom::by_id::<HtmlElement>(document, ids::ANIMATED_TEXT) else {
        return Ok(());
    };
    let Some(mut cycle) = TextCycle::new(config.hero_texts.clone()) else {
        return Ok(());
    };

    timers::set_interval(window, config.timings.text_cycle_ms, move || {
        target.set_text_content(Some(cycle.advance()));
    })
}
