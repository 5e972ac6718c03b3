use crate::core::{TextSink, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Element by id, cast to `T`. Missing or mistyped elements are `None`.
pub fn element<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::debug!("[dom] #{} not present", id);
    }
    el.and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_with<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    options: &web::AddEventListenerOptions,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        options,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    listen(el, "click", move |ev: web::MouseEvent| handler(ev));
}

/// Current window size in CSS px plus the device pixel ratio.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        width: dim(window.inner_width()),
        height: dim(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Text content sink for any element.
pub struct ElementText(pub web::Element);

impl TextSink for ElementText {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}
