// Scroll- and pointer-driven touches: the hero image grows slightly over
// the first part of the page, the navbar gains a shadow once scrolled, and
// the cursor glow follows the pointer in dark theme only.

use crate::theme::Theme;

pub const HERO_SCALE_RANGE_PX: f64 = 600.0;
pub const HERO_SCALE_RATE: f64 = 0.0003;
pub const HERO_SCALE_MAX: f64 = 1.15;
pub const NAVBAR_SHADOW_AFTER_PX: f64 = 50.0;

// None past the range: the image keeps whatever scale it last had
pub fn hero_scale(scroll_y: f64) -> Option<f64> {
    if scroll_y < HERO_SCALE_RANGE_PX {
        Some((1.0 + scroll_y * HERO_SCALE_RATE).min(HERO_SCALE_MAX))
    } else {
        None
    }
}

pub fn hero_scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SHADOW_AFTER_PX {
        "var(--card-shadow)"
    } else {
        "none"
    }
}

/// CSS `left`/`top` for the cursor glow, or `None` when it should stay put.
pub fn cursor_glow_position(theme: Theme, client: [i32; 2]) -> Option<(String, String)> {
    match theme {
        Theme::Dark => Some((format!("{}px", client[0]), format!("{}px", client[1]))),
        Theme::Light => None,
    }
}
