use crate::dom;
use web_sys as web;

/// Run `on_key` for the first keydown anywhere in the window.
pub fn wire_enter_on_keydown(window: &web::Window, mut on_key: impl FnMut() + 'static) {
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    dom::listen_with(window, "keydown", &options, move |ev: web::KeyboardEvent| {
        log::debug!("[overlay] keydown {:?}", ev.key());
        on_key();
    });
}
