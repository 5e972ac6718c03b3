use super::constants::TILT_MAX_DEG;
use glam::DVec2;

pub const HOVER_TRANSITION: &str = "transform 0.08s ease-out";
pub const RELEASE_TRANSITION: &str = "transform 0.28s cubic-bezier(.2,.9,.3,1)";
pub const REST_TRANSFORM: &str = "translate3d(0,0,0)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Rotation in degrees for the profile image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `pointer` (client px) in a window of `viewport`
    /// (CSS px). Pointer below centre tips the top away; pointer right of
    /// centre turns the image left.
    pub fn from_pointer(pointer: DVec2, viewport: DVec2) -> Self {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Self::default();
        }
        let offset = pointer - viewport * 0.5;
        Self {
            rotate_x: offset.y / viewport.y * TILT_MAX_DEG,
            rotate_y: offset.x / viewport.x * -TILT_MAX_DEG,
        }
    }

    /// CSS `transform` value; the image also shifts by the rotation amounts
    /// in px.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px,{}px,0) rotateX({}deg) rotateY({}deg)",
            self.rotate_y, -self.rotate_x, self.rotate_x, self.rotate_y
        )
    }
}

/// How the profile image reacts to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltMode {
    /// Follow the pointer and float on hover.
    Follow,
    /// Reduced motion: hover transitions only, no pointer tracking.
    HoverOnly,
}

impl TiltMode {
    pub fn from_reduced_motion(reduced: bool) -> Self {
        if reduced {
            Self::HoverOnly
        } else {
            Self::Follow
        }
    }

    /// Whether mousemove/touchmove listeners are attached.
    pub fn follows_pointer(self) -> bool {
        self == Self::Follow
    }

    /// Transform to apply before any pointer event arrives.
    pub fn initial_transform(self) -> Option<&'static str> {
        match self {
            Self::Follow => None,
            Self::HoverOnly => Some("none"),
        }
    }
}
