use crate::core::{self, FingerprintSource, KeyValueStore, MemoryStore, SiteConfig, StoreError};
use crate::dom::{self, ElementText};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `window.localStorage`.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StoreError::Unavailable),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected {
                key: key.to_owned(),
                reason: format!("{:?}", e),
            })
    }
}

/// Read the fingerprint inputs from the browser. Properties the browser
/// refuses to expose read as empty/zero.
pub fn fingerprint_source(window: &web::Window, document: &web::Document) -> FingerprintSource {
    let navigator = window.navigator();
    let (screen_width, screen_height) = window
        .screen()
        .map(|s| (s.width().unwrap_or(0), s.height().unwrap_or(0)))
        .unwrap_or((0, 0));
    FingerprintSource {
        user_agent: navigator.user_agent().unwrap_or_default(),
        language: navigator.language().unwrap_or_default(),
        screen_width,
        screen_height,
        timezone_offset: js_sys::Date::new_0().get_timezone_offset(),
        canvas_data_url: canvas_signature(document).unwrap_or_default(),
    }
}

/// Data URL of a small canvas with fixed text; differs across rendering
/// stacks.
fn canvas_signature(document: &web::Document) -> Option<String> {
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    ctx.set_text_baseline("top");
    ctx.set_font("14px Arial");
    _ = ctx.fill_text("Visitor fingerprint", 2.0, 2.0);
    canvas.to_data_url().ok()
}

/// `Number.prototype.toLocaleString` for a fixed locale.
struct LocaleFormat<'a>(&'a str);

impl core::CountFormat for LocaleFormat<'_> {
    fn format_count(&self, count: u64) -> String {
        js_sys::Number::from(count as f64)
            .to_locale_string(self.0)
            .into()
    }
}

/// Count this visitor once and show the total.
pub fn count_visit(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    let source = fingerprint_source(window, document);
    let fingerprint = source.fingerprint();
    let mut store: Box<dyn KeyValueStore> = match LocalStore::open(window) {
        Ok(s) => Box::new(s),
        Err(e) => {
            log::warn!("[visitors] {}; counting in memory only", e);
            Box::new(MemoryStore::new())
        }
    };
    let count = core::record_view(&mut store, &fingerprint);

    let output = dom::element::<web::Element>(document, config.view_count_id).map(ElementText);
    let locale = if source.language.is_empty() {
        "en-US"
    } else {
        &source.language
    };
    core::display(
        output.as_ref().map(|o| o as &dyn core::TextSink),
        count,
        &LocaleFormat(locale),
    );
}
