use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> anyhow::Result<web::Document> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))
}

/// Look up an element by id and cast it, logging when it is missing.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("missing #{}", id);
    }
    el.and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(el: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

#[inline]
pub fn add_classes(el: &web::Element, classes: &[&str]) {
    let cl = el.class_list();
    for c in classes {
        _ = cl.add_1(c);
    }
}

#[inline]
pub fn remove_classes(el: &web::Element, classes: &[&str]) {
    let cl = el.class_list();
    for c in classes {
        _ = cl.remove_1(c);
    }
}
