use crate::core::tilt::{self, Tilt, TiltMode};
use crate::core::SiteConfig;
use crate::dom;
use glam::DVec2;
use std::rc::Rc;
use web_sys as web;

fn tilt_to(profile: &web::HtmlElement, window: &web::Window, client_x: i32, client_y: i32) {
    let vp = dom::viewport(window);
    let tilt = Tilt::from_pointer(
        DVec2::new(client_x as f64, client_y as f64),
        DVec2::new(vp.width, vp.height),
    );
    dom::set_style(profile, "transform", &tilt.css_transform());
}

fn prefers_reduced_motion(window: &web::Window) -> bool {
    matches!(
        window.match_media(tilt::REDUCED_MOTION_QUERY),
        Ok(Some(mq)) if mq.matches()
    )
}

/// Float the profile image on hover, settle it on leave and, unless the
/// user prefers reduced motion, tilt it towards the pointer.
pub fn wire_profile_tilt(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    let Some(profile) = dom::element::<web::HtmlElement>(document, config.profile_id) else {
        return;
    };
    let profile = Rc::new(profile);

    let p = profile.clone();
    dom::listen(&profile, "mouseenter", move |_: web::MouseEvent| {
        dom::set_style(&p, "transition", tilt::HOVER_TRANSITION);
    });
    let p = profile.clone();
    dom::listen(&profile, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&p, "transition", tilt::RELEASE_TRANSITION);
        dom::set_style(&p, "transform", tilt::REST_TRANSFORM);
    });

    let mode = TiltMode::from_reduced_motion(prefers_reduced_motion(window));
    if let Some(transform) = mode.initial_transform() {
        dom::set_style(&profile, "transform", transform);
    }
    if !mode.follows_pointer() {
        log::info!("[tilt] reduced motion requested; pointer tracking disabled");
        return;
    }

    let (p, w) = (profile.clone(), window.clone());
    dom::listen(window, "mousemove", move |ev: web::MouseEvent| {
        tilt_to(&p, &w, ev.client_x(), ev.client_y());
    });

    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let (p, w) = (profile, window.clone());
    dom::listen_with(window, "touchmove", &options, move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            tilt_to(&p, &w, touch.client_x(), touch.client_y());
        }
    });
}
