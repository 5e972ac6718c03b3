use crate::audio;
use crate::core::{self, EnterEffects, EnterSequence, Scheduler, SiteConfig, Typewriter};
use crate::dom;
use crate::events::keyboard;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Window property the enter gesture is published under for the console.
const ENTER_SITE_GLOBAL: &str = "__enterSite";

/// Elements the enter gesture changes.
struct PageEffects {
    document: web::Document,
    overlay: Option<web::Element>,
    audio: Option<web::HtmlMediaElement>,
    scheduler: Rc<dyn Scheduler>,
    config: Rc<SiteConfig>,
}

impl EnterEffects for PageEffects {
    fn hide_overlay(&self) {
        if let Some(body) = self.document.body() {
            _ = body.class_list().remove_1(self.config.overlay_open_class);
        }
        if let Some(overlay) = &self.overlay {
            _ = overlay.class_list().add_1(self.config.hidden_class);
        }
    }

    fn remove_overlay(&self) {
        if let Some(overlay) = &self.overlay {
            overlay.remove();
        }
    }

    fn start_audio(&self) {
        if let Some(a) = &self.audio {
            audio::play(a, "audio");
        }
    }

    fn start_typewriters(&self) {
        start_typewriters(&self.document, self.scheduler.clone(), &self.config);
    }
}

/// DOM wiring for the enter gesture.
pub struct EnterSite {
    document: web::Document,
    overlay: Option<web::Element>,
    config: Rc<SiteConfig>,
    sequence: EnterSequence,
}

thread_local! {
    static ENTER: RefCell<Option<Rc<EnterSite>>> = const { RefCell::new(None) };
}

impl EnterSite {
    pub fn new(
        document: web::Document,
        audio: Option<web::HtmlMediaElement>,
        scheduler: Rc<dyn Scheduler>,
        config: Rc<SiteConfig>,
    ) -> Rc<Self> {
        let overlay = dom::element::<web::Element>(&document, config.enter_overlay_id);
        let effects = Rc::new(PageEffects {
            document: document.clone(),
            overlay: overlay.clone(),
            audio,
            scheduler: scheduler.clone(),
            config: config.clone(),
        });
        Rc::new(Self {
            document,
            overlay,
            config,
            sequence: EnterSequence::new(scheduler, effects),
        })
    }

    pub fn enter(&self) {
        if !self.sequence.enter() {
            log::debug!("[overlay] already entered");
        }
    }

    /// Wire the enter button, clicks on the overlay backdrop and the first
    /// keypress, and expose the gesture as [`enter_site`] and
    /// `window.__enterSite`.
    pub fn wire(self: &Rc<Self>, window: &web::Window) {
        if let Some(button) = dom::element::<web::Element>(&self.document, self.config.enter_button_id) {
            let this = self.clone();
            dom::add_click_listener(&button, move |ev| {
                ev.stop_propagation();
                this.enter();
            });
        }
        if let Some(overlay) = &self.overlay {
            let this = self.clone();
            let backdrop: JsValue = overlay.clone().into();
            dom::add_click_listener(overlay, move |ev| {
                if ev.target().map(JsValue::from).as_ref() == Some(&backdrop) {
                    this.enter();
                }
            });
        }
        if self.overlay.is_some() {
            let this = self.clone();
            keyboard::wire_enter_on_keydown(window, move || this.enter());
        }

        let this = self.clone();
        let global = Closure::wrap(Box::new(move || this.enter()) as Box<dyn FnMut()>);
        if let Err(e) = js_sys::Reflect::set(
            window,
            &JsValue::from_str(ENTER_SITE_GLOBAL),
            global.as_ref(),
        ) {
            log::warn!("[overlay] could not set window.{}: {:?}", ENTER_SITE_GLOBAL, e);
        }
        global.forget();

        ENTER.with(|slot| *slot.borrow_mut() = Some(self.clone()));
    }
}

/// Enter the site from the JS console.
#[wasm_bindgen]
pub fn enter_site() {
    match ENTER.with(|slot| slot.borrow().clone()) {
        Some(site) => site.enter(),
        None => log::warn!("[overlay] enter_site called before startup"),
    }
}

fn start_typewriters(document: &web::Document, scheduler: Rc<dyn Scheduler>, config: &SiteConfig) {
    let doc_title = document.clone();
    core::animate(
        scheduler.clone(),
        Typewriter::new(&config.title.text, config.title.timing),
        Box::new(move |text: &str| doc_title.set_title(text)),
    );

    match document.query_selector(config.name_selector) {
        Ok(Some(name)) => core::animate(
            scheduler,
            Typewriter::new(&config.name.text, config.name.timing),
            Box::new(move |text: &str| name.set_text_content(Some(text))),
        ),
        _ => log::debug!("[overlay] no {} element; name typewriter skipped", config.name_selector),
    }
}
