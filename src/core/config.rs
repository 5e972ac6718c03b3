use super::constants::DEFAULT_VOLUME;
use super::starfield::StarfieldConfig;
use super::typewriter::TypewriterTiming;

/// `data-*` attribute on `<body>` that replaces the title typewriter text.
pub const TITLE_TEXT_ATTR: &str = "data-title-text";
/// `data-*` attribute on `<body>` that replaces the name typewriter text.
pub const NAME_TEXT_ATTR: &str = "data-name-text";

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterSpec {
    pub text: String,
    pub timing: TypewriterTiming,
}

/// Element ids and effect parameters for the page.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub stars_canvas_id: &'static str,
    pub enter_overlay_id: &'static str,
    pub enter_button_id: &'static str,
    pub audio_id: &'static str,
    pub play_button_id: &'static str,
    pub progress_id: &'static str,
    pub time_id: &'static str,
    pub volume_id: &'static str,
    pub profile_id: &'static str,
    pub video_id: &'static str,
    pub view_count_id: &'static str,
    pub name_selector: &'static str,
    pub overlay_open_class: &'static str,
    pub hidden_class: &'static str,

    pub title: TypewriterSpec,
    pub name: TypewriterSpec,
    pub starfield: StarfieldConfig,
    pub default_volume: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stars_canvas_id: "stars",
            enter_overlay_id: "enter-overlay",
            enter_button_id: "enter-btn",
            audio_id: "bg-audio",
            play_button_id: "play-btn",
            progress_id: "progress",
            time_id: "time",
            volume_id: "volume",
            profile_id: "profile",
            video_id: "bg-video",
            view_count_id: "view-count",
            name_selector: ".name",
            overlay_open_class: "overlay-open",
            hidden_class: "hidden",

            title: TypewriterSpec {
                text: "King CK".to_string(),
                timing: TypewriterTiming::from_millis(120, 60, 2500, 1000),
            },
            name: TypewriterSpec {
                text: "RealCk".to_string(),
                timing: TypewriterTiming::from_millis(150, 75, 2000, 500),
            },
            starfield: StarfieldConfig::default(),
            default_volume: DEFAULT_VOLUME,
        }
    }
}

impl SiteConfig {
    /// Replace the typewriter texts with page-supplied values. `lookup` maps
    /// an attribute name to its value; blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let pick = |attr: &str| lookup(attr).filter(|v| !v.trim().is_empty());
        if let Some(text) = pick(TITLE_TEXT_ATTR) {
            log::debug!("[config] title text overridden: {:?}", text);
            self.title.text = text;
        }
        if let Some(text) = pick(NAME_TEXT_ATTR) {
            log::debug!("[config] name text overridden: {:?}", text);
            self.name.text = text;
        }
    }
}
