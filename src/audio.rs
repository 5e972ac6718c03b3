use crate::core::media;
use crate::core::SiteConfig;
use crate::dom;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Optional widgets around the background track, looked up once.
struct PlayerControls {
    play_button: Option<web::Element>,
    progress: Option<web::HtmlElement>,
    time: Option<web::Element>,
    volume: Option<web::HtmlInputElement>,
}

/// Start playback, logging whether the browser allowed it.
pub fn play(media_el: &web::HtmlMediaElement, label: &'static str) {
    match media_el.play() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("[audio] {} playing", label),
                Err(e) => log::warn!("[audio] {} play blocked: {:?}", label, e),
            }
        }),
        Err(e) => log::warn!("[audio] {} play failed: {:?}", label, e),
    }
}

/// Wire the play button, progress bar, time readout and volume slider to
/// the background audio element. Without the audio element nothing is
/// wired.
pub fn wire_player(document: &web::Document, config: &SiteConfig) -> Option<web::HtmlMediaElement> {
    let audio = dom::element::<web::HtmlMediaElement>(document, config.audio_id)?;
    let controls = PlayerControls {
        play_button: dom::element(document, config.play_button_id),
        progress: dom::element(document, config.progress_id),
        time: dom::element(document, config.time_id),
        volume: dom::element(document, config.volume_id),
    };

    let initial = match &controls.volume {
        Some(slider) => media::parse_volume(Some(&slider.value())),
        None => config.default_volume,
    };
    audio.set_volume(initial);

    if let Some(button) = &controls.play_button {
        let audio_toggle = audio.clone();
        dom::add_click_listener(button, move |_| {
            if audio_toggle.paused() {
                play(&audio_toggle, "audio");
            } else {
                _ = audio_toggle.pause();
            }
        });
    }

    let audio_tick = audio.clone();
    let progress = controls.progress.clone();
    let time = controls.time.clone();
    dom::listen(&audio, "timeupdate", move |_: web::Event| {
        let (current, duration) = (audio_tick.current_time(), audio_tick.duration());
        if let Some(bar) = &progress {
            let pct = media::progress_percent(current, duration);
            dom::set_style(bar, "width", &format!("{}%", pct));
        }
        if let Some(t) = &time {
            t.set_text_content(Some(&media::time_label(current, duration)));
        }
    });

    let audio_meta = audio.clone();
    let time_meta = controls.time.clone();
    dom::listen(&audio, "loadedmetadata", move |_: web::Event| {
        if let Some(t) = &time_meta {
            t.set_text_content(Some(&media::time_label(0.0, audio_meta.duration())));
        }
    });

    for (event, paused) in [("play", false), ("pause", true)] {
        let button = controls.play_button.clone();
        dom::listen(&audio, event, move |_: web::Event| {
            if let Some(b) = &button {
                b.set_text_content(Some(media::play_glyph(paused)));
            }
        });
    }

    if let Some(slider) = controls.volume {
        let audio_volume = audio.clone();
        let slider_read = slider.clone();
        dom::listen(&slider, "input", move |_: web::Event| {
            audio_volume.set_volume(media::parse_volume(Some(&slider_read.value())));
        });
    }

    log::info!("[audio] player wired (volume {:.2})", initial);
    Some(audio)
}

/// Load the background video and play it once data arrives. The starfield
/// stays visible if the video fails.
pub fn wire_background_video(document: &web::Document, config: &SiteConfig) {
    let Some(video) = dom::element::<web::HtmlMediaElement>(document, config.video_id) else {
        return;
    };
    let video_play = video.clone();
    dom::listen(&video, "loadeddata", move |_: web::Event| {
        log::info!("[audio] background video loaded");
        play(&video_play, "background video");
    });
    dom::listen(&video, "error", move |e: web::Event| {
        log::warn!(
            "[audio] background video failed to load: {:?}",
            JsValue::from(e)
        );
    });
    video.load();
}
