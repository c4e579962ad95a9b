use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use portfolio_core::page::ids;
use portfolio_core::radar::{RadarChart, RadarTrigger};
use portfolio_core::schedule::Scheduler;
use portfolio_core::PortfolioConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry, Window};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::timers::BrowserScheduler;

/// Draws the skills radar shortly after the canvas first scrolls into view.
pub fn init_skills_chart(
    window: &Window,
    document: &Document,
    config: Rc<PortfolioConfig>,
) -> Result<(), JsValue> {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(document, ids::SKILLS_RADAR) else {
        return Ok(());
    };
    let Some(surface) = CanvasSurface::new(canvas.clone()) else {
        return Ok(());
    };

    let surface = Rc::new(RefCell::new(surface));
    let trigger = RefCell::new(RadarTrigger::new());
    let scheduler = BrowserScheduler::new(window.clone());
    let delay_ms = config.timings.radar_delay_ms;

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !trigger.borrow_mut().on_intersection(entry.is_intersecting()) {
                    continue;
                }
                observer.unobserve(&entry.target());

                let surface = Rc::clone(&surface);
                let config = Rc::clone(&config);
                scheduler.set_timeout(
                    delay_ms,
                    Box::new(move || {
                        RadarChart::new(&config.skills).draw(&mut *surface.borrow_mut());
                    }),
                );
            }
        },
    );

    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
    observer.observe(&canvas);
    on_intersect.forget();
    Ok(())
}
