#![cfg(target_arch = "wasm32")]
use crate::core::{Scheduler, SiteConfig};
use crate::overlay::EnterSite;
use crate::scheduler::BrowserScheduler;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod scheduler;
mod visitors;

pub use overlay::enter_site;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

/// Page configuration with `<body data-*>` overrides applied.
fn load_config(document: &web::Document) -> SiteConfig {
    let mut config = SiteConfig::default();
    if let Some(body) = document.body() {
        config.apply_overrides(|attr| body.get_attribute(attr));
    }
    config
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(load_config(&document));
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));

    audio::wire_background_video(&document, &config);
    let bg_audio = audio::wire_player(&document, &config);

    let site = EnterSite::new(document.clone(), bg_audio, scheduler.clone(), config.clone());
    site.wire(&window);

    frame::start_starfield(&window, &document, &config, scheduler.as_ref());
    events::pointer::wire_profile_tilt(&window, &document, &config);
    visitors::count_visit(&window, &document, &config);

    log::info!("page script initialized");
    Ok(())
}
