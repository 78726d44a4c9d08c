#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

/// Build the DOM nodes the page binds to, so tests run on the bare harness
/// document as well as on the shipped page.
fn install_page_dom(document: &Document) {
    let body = document.body().unwrap();
    let nodes = [
        ("canvas", "backdrop"),
        ("h2", "hero-presents"),
        ("h1", "hero-title"),
        ("h3", "hero-tagline"),
        ("span", "cd-days"),
        ("span", "cd-hours"),
        ("span", "cd-minutes"),
        ("span", "cd-seconds"),
    ];
    for (tag, id) in nodes {
        if document.get_element_by_id(id).is_none() {
            let el = document.create_element(tag).unwrap();
            el.set_id(id);
            body.append_child(&el).unwrap();
        }
    }
}

#[wasm_bindgen_test(async)]
async fn backdrop_canvas_exists() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    install_page_dom(&document);

    let elem = document
        .get_element_by_id("backdrop")
        .expect("backdrop canvas not found");

    let rect = elem
        .dyn_ref::<web_sys::Element>()
        .unwrap()
        .get_bounding_client_rect();

    assert!(rect.width() > 0.0 && rect.height() > 0.0);
}

#[wasm_bindgen_test(async)]
async fn countdown_slots_present() {
    let document = web_sys::window().unwrap().document().unwrap();
    install_page_dom(&document);
    for id in ["cd-days", "cd-hours", "cd-minutes", "cd-seconds"] {
        assert!(
            document.get_element_by_id(id).is_some(),
            "missing countdown slot {id}"
        );
    }
}

#[wasm_bindgen_test(async)]
async fn unmount_stops_every_subsystem() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    install_page_dom(&document);

    upgradehour::mount().unwrap();
    // Let the first interval tick and a few frames land.
    TimeoutFuture::new(100).await;

    upgradehour::unmount();

    let seconds = document.get_element_by_id("cd-seconds").unwrap();
    let digits_after_unmount = seconds.text_content();

    let heading = document
        .get_element_by_id("hero-title")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    heading.style().set_property("transform", "none").unwrap();

    // A live parallax listener would overwrite the transform on this.
    let event = web_sys::MouseEvent::new("mousemove").unwrap();
    window.dispatch_event(&event).unwrap();

    // Longer than the 1 s countdown cadence; a surviving interval would
    // rewrite the seconds digit in this window.
    TimeoutFuture::new(1_200).await;

    assert_eq!(seconds.text_content(), digits_after_unmount);
    assert_eq!(
        heading.style().get_property_value("transform").unwrap(),
        "none"
    );
}
