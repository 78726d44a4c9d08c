// Core state lives in plain modules compiled on every target so `cargo test`
// exercises it on the host; only the DOM glue is wasm-specific.

pub mod countdown;
pub mod field;
pub mod parallax;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    mod page;
    mod render;

    thread_local! {
        static PAGE: RefCell<Option<page::Page>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        // The page is decorative; a failed mount degrades to the static
        // document instead of aborting module startup.
        if let Err(err) = mount() {
            gloo::console::error!("upgradehour: mount failed", err);
        }
    }

    /// Wire the dynamic layer onto the current document: countdown tick,
    /// particle backdrop and heading parallax. Remounting tears down any
    /// live instance first.
    #[wasm_bindgen]
    pub fn mount() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        PAGE.with(|page| page.borrow_mut().take());
        let mounted = page::Page::mount(&window, &document)?;
        PAGE.with(|page| *page.borrow_mut() = Some(mounted));
        gloo::console::log!("upgradehour: page mounted");
        Ok(())
    }

    /// Tear the dynamic layer down: stops the countdown tick, cancels the
    /// pending animation frame and removes the input listeners. The static
    /// document stays up.
    #[wasm_bindgen]
    pub fn unmount() {
        if PAGE.with(|page| page.borrow_mut().take()).is_some() {
            gloo::console::log!("upgradehour: page unmounted");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount, unmount};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
