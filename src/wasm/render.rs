use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{ParticleField, Viewport};

/// A running animation loop. Dropping it cancels the pending frame request
/// and releases the frame closure, so no redraw fires afterwards.
pub(super) struct Animation {
    raf_id: Rc<Cell<i32>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
        }
        // The closure captures the Rc holding itself; take it to break the
        // cycle.
        self.frame.borrow_mut().take();
    }
}

/// Start the per-frame advance/redraw loop over `field`.
///
/// Returns `None` when no 2d context is available: the page then degrades to
/// its static styling without the particle backdrop.
pub(super) fn start(
    canvas: &HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) -> Result<Option<Animation>, JsValue> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return Ok(None),
        },
        _ => return Ok(None),
    };

    // `frame` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));

    let frame_handle = frame.clone();
    let raf_handle = raf_id.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut field = field.borrow_mut();
            field.advance();
            paint(&ctx, &field).ok();
        }

        // schedule next
        let next = window()
            .unwrap()
            .request_animation_frame(
                frame_handle.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            )
            .unwrap();
        raf_handle.set(next);
    }) as Box<dyn FnMut()>));

    let first = window()
        .ok_or("no window")?
        .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    raf_id.set(first);

    Ok(Some(Animation { raf_id, frame }))
}

/// One full redraw: gradient backdrop, then every glyph with its glow.
fn paint(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    let Viewport { width, height } = field.viewport();

    ctx.clear_rect(0.0, 0.0, width, height);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
    gradient.add_color_stop(0.0, "#050016")?;
    gradient.add_color_stop(1.0, "#0a0320")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);

    for p in field.particles() {
        ctx.save();
        ctx.set_font(&format!("{}px Inter, ui-sans-serif, system-ui", p.size));
        ctx.set_fill_style_str(&format!("hsla({}, 80%, 70%, 0.9)", p.hue));
        ctx.set_shadow_color(&format!("hsla({}, 100%, 80%, 0.6)", p.hue));
        ctx.set_shadow_blur(10.0);
        ctx.fill_text(p.glyph, p.x, p.y)?;
        ctx.restore();
    }

    Ok(())
}
