//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use rect_annotator::{Annotator, MarkerConfig, Region, WebAnnotator, WebHost};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn canvas_count() -> u32 {
    document().query_selector_all("canvas").unwrap().length()
}

fn add_box(id: &str, top: u32, left: u32, width: u32, height: u32) -> HtmlElement {
    let doc = document();
    let el = doc.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    el.set_id(id);
    let style = el.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("top", &format!("{}px", top)).unwrap();
    style.set_property("left", &format!("{}px", left)).unwrap();
    style.set_property("width", &format!("{}px", width)).unwrap();
    style.set_property("height", &format!("{}px", height)).unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn test_regions_resolved_from_document() {
    let a = add_box("ra-a", 100, 100, 50, 20);
    let b = add_box("ra-b", 200, 50, 30, 10);

    let host = WebHost::from_global().unwrap();
    let locators = vec![Some("#ra-a"), Some("#ra-missing"), Some("#ra-b"), Some("not a [selector")];
    let annotator = Annotator::new(host, locators, MarkerConfig::default());

    assert_eq!(
        annotator.regions(),
        &[
            Some(Region::new(100.0, 100.0, 50.0, 20.0)),
            None,
            Some(Region::new(200.0, 50.0, 30.0, 10.0)),
            None,
        ]
    );

    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
fn test_render_attaches_single_canvas_and_dispose_removes_it() {
    let before = canvas_count();
    let locators = js_sys::Array::of1(&JsValue::from_str("body"));
    let mut annotator = WebAnnotator::new(locators.into(), JsValue::UNDEFINED);

    annotator.render();
    annotator.render();
    assert_eq!(canvas_count(), before + 1);

    annotator.dispose();
    assert!(annotator.is_disposed());
    assert_eq!(canvas_count(), before);

    annotator.render();
    assert_eq!(canvas_count(), before);
}

#[wasm_bindgen_test]
fn test_empty_locators_still_attach() {
    let before = canvas_count();
    let mut annotator = WebAnnotator::new(js_sys::Array::new().into(), JsValue::NULL);

    annotator.render();
    assert_eq!(canvas_count(), before + 1);
    annotator.dispose();
}

#[wasm_bindgen_test]
fn test_canvas_covers_viewport() {
    let window = web_sys::window().unwrap();
    let mut annotator = WebAnnotator::new(js_sys::Array::new().into(), JsValue::UNDEFINED);
    annotator.render();

    let canvas = document()
        .query_selector("canvas:last-of-type")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert_eq!(canvas.width() as f64, window.inner_width().unwrap().as_f64().unwrap());
    assert_eq!(canvas.style().get_property_value("position").unwrap(), "fixed");

    annotator.dispose();
}

#[wasm_bindgen_test]
fn test_config_getter_merges_partial() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"color".into(), &"red".into()).unwrap();
    let annotator = WebAnnotator::new(js_sys::Array::new().into(), config.into());

    let resolved: MarkerConfig = serde_wasm_bindgen::from_value(annotator.config()).unwrap();
    assert_eq!(resolved.color, "red");
    assert_eq!(resolved.font_size, 12.0);
}

#[wasm_bindgen_test]
fn test_non_string_entries_keep_their_slot() {
    let a = add_box("ra-mixed-a", 40, 40, 10, 10);
    let b = add_box("ra-mixed-b", 80, 80, 10, 10);
    let before = canvas_count();

    let locators = js_sys::Array::of3(
        &JsValue::from_str("#ra-mixed-a"),
        &JsValue::from_f64(5.0),
        &JsValue::from_str("#ra-mixed-b"),
    );
    let mut annotator = WebAnnotator::new(locators.into(), JsValue::UNDEFINED);

    // `#ra-mixed-b` stays in the third slot and is labelled "3"
    let regions = annotator.annotator().unwrap().regions();
    assert_eq!(
        regions,
        &[
            Some(Region::new(40.0, 40.0, 10.0, 10.0)),
            None,
            Some(Region::new(80.0, 80.0, 10.0, 10.0)),
        ]
    );

    annotator.render();
    assert_eq!(canvas_count(), before + 1);

    annotator.dispose();
    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
fn test_non_array_locators_render_empty_overlay() {
    let before = canvas_count();
    let mut annotator = WebAnnotator::new(JsValue::from_str("#ra-a"), JsValue::UNDEFINED);

    assert!(annotator.annotator().unwrap().regions().is_empty());

    annotator.render();
    assert_eq!(canvas_count(), before + 1);
    annotator.dispose();
    assert_eq!(canvas_count(), before);
}

#[wasm_bindgen_test]
fn test_bad_config_field_keeps_others() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"color".into(), &"red".into()).unwrap();
    js_sys::Reflect::set(&config, &"width".into(), &"5".into()).unwrap();
    js_sys::Reflect::set(&config, &"margin".into(), &JsValue::TRUE).unwrap();
    let annotator = WebAnnotator::new(js_sys::Array::new().into(), config.into());

    let resolved: MarkerConfig = serde_wasm_bindgen::from_value(annotator.config()).unwrap();
    assert_eq!(resolved.color, "red");
    assert_eq!(resolved.width, 5.0);
    assert_eq!(resolved.margin, 4.0);
}

#[wasm_bindgen_test]
fn test_unusable_config_falls_back_to_defaults() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"width".into(), &"thick".into()).unwrap();
    let annotator = WebAnnotator::new(js_sys::Array::new().into(), config.into());

    let resolved: MarkerConfig = serde_wasm_bindgen::from_value(annotator.config()).unwrap();
    assert_eq!(resolved, MarkerConfig::default());

    let annotator = WebAnnotator::new(js_sys::Array::new().into(), JsValue::from_f64(3.0));
    let resolved: MarkerConfig = serde_wasm_bindgen::from_value(annotator.config()).unwrap();
    assert_eq!(resolved, MarkerConfig::default());
}
