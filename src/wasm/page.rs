use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use super::render;
use crate::countdown::{Countdown, CountdownState};
use crate::field::{ParticleField, Viewport};
use crate::parallax::{pointer_offset, translation, HEADING_SHIFTS};

const CANVAS_ID: &str = "backdrop";

/// DOM slots the countdown digits land in, d/h/m/s order.
const COUNTDOWN_SLOTS: [&str; 4] = ["cd-days", "cd-hours", "cd-minutes", "cd-seconds"];

/// The three hero lines the parallax shifts, matching `HEADING_SHIFTS`.
const HEADING_IDS: [&str; 3] = ["hero-presents", "hero-title", "hero-tagline"];

/// Everything dynamic on the page. Dropping it detaches the countdown
/// interval, the pending animation frame and both window listeners, leaving
/// the static document untouched.
pub(super) struct Page {
    _countdown: Interval,
    _resize: EventListener,
    _pointer: EventListener,
    _animation: Option<render::Animation>,
}

impl Page {
    pub(super) fn mount(window: &Window, document: &Document) -> Result<Page, JsValue> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("backdrop canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        // Size the backing store to the viewport before the first frame.
        let viewport = window_viewport(window);
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);

        let mut rng = fastrand::Rng::new();
        let field = Rc::new(RefCell::new(ParticleField::new(viewport, &mut rng)));

        let animation = render::start(&canvas, field.clone())?;

        let resize = {
            let inner = window.clone();
            let field = field.clone();
            EventListener::new(window, "resize", move |_| {
                let viewport = window_viewport(&inner);
                canvas.set_width(viewport.width as u32);
                canvas.set_height(viewport.height as u32);
                field.borrow_mut().resize(viewport);
            })
        };

        let countdown = start_countdown(document.clone());
        let pointer = start_parallax(window, document);

        Ok(Page {
            _countdown: countdown,
            _resize: resize,
            _pointer: pointer,
            _animation: animation,
        })
    }
}

fn window_viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    Viewport { width, height }
}

/// Publish the remaining time immediately, then once per second until the
/// interval is dropped. After the deadline the digits stay pinned at zero.
fn start_countdown(document: Document) -> Interval {
    let countdown = Countdown::to_registration_deadline();

    let tick = move |document: &Document| {
        let state = countdown.remaining(js_sys::Date::now() as u64);
        publish_countdown(document, state);
    };

    tick(&document);
    Interval::new(1_000, move || tick(&document))
}

fn publish_countdown(document: &Document, state: CountdownState) {
    let fields = [state.days, state.hours, state.minutes, state.seconds];
    for (id, value) in COUNTDOWN_SLOTS.iter().zip(fields) {
        if let Some(slot) = document.get_element_by_id(id) {
            slot.set_text_content(Some(&value.to_string()));
        }
    }
}

/// Shift the hero lines opposite ways as the pointer moves. Headings that
/// are missing from the document are skipped.
fn start_parallax(window: &Window, document: &Document) -> EventListener {
    let headings: Vec<Option<HtmlElement>> = HEADING_IDS
        .iter()
        .map(|id| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        })
        .collect();

    let inner = window.clone();
    EventListener::new(window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let viewport = window_viewport(&inner);
        let offset = pointer_offset(
            event.client_x() as f64,
            event.client_y() as f64,
            viewport.width,
            viewport.height,
        );
        for (heading, shift) in headings.iter().zip(HEADING_SHIFTS) {
            if let Some(heading) = heading {
                let (dx, dy) = translation(offset, shift);
                let _ = heading
                    .style()
                    .set_property("transform", &format!("translate({dx}px, {dy}px)"));
            }
        }
    })
}
