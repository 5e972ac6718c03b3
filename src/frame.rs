use crate::canvas::CanvasSurface;
use crate::core::{self, Scheduler, SiteConfig};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Start the starfield on the configured canvas, repaint every frame, drift
/// on its interval and rebuild on window resize. A missing canvas or 2D
/// context leaves the page without a starfield.
pub fn start_starfield(
    window: &web::Window,
    document: &web::Document,
    config: &SiteConfig,
    scheduler: &dyn Scheduler,
) {
    let surface = dom::element::<web::HtmlCanvasElement>(document, config.stars_canvas_id)
        .and_then(CanvasSurface::new);
    let runner = match core::mount(
        surface,
        dom::viewport(window),
        config.starfield.clone(),
        StdRng::from_entropy(),
        scheduler,
    ) {
        Some(r) => r,
        None => return,
    };
    {
        let r = runner.borrow();
        let (w, h) = r.field().extent();
        log::info!(
            "[starfield] running with {} particles on {}x{}",
            r.field().particles().len(),
            w,
            h
        );
    }

    let window_resize = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        runner.borrow_mut().resize(dom::viewport(&window_resize));
    });
}
