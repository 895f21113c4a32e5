use serde::Deserialize;
use web_sys::window;

use crate::error::{Result, SiteError};

pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// Tuning knobs for the decorative effects.
///
/// Every field is optional in the embedded JSON; anything missing keeps its
/// default. Values are sanitized after parsing so the animations never see a
/// zero-sized pool or a negative duration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particle_count: usize,
    pub particle_speed: f64,
    pub particle_spread: f64,
    pub pointer_damping: f64,
    pub tilt_max_deg: f64,
    pub tilt_lift_px: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub counter_duration_ms: f64,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub nav_scrolled_px: f64,
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particle_count: 160,
            particle_speed: 4.0,
            particle_spread: 1000.0,
            pointer_damping: 0.05,
            tilt_max_deg: 8.0,
            tilt_lift_px: 12.0,
            spring_stiffness: 100.0,
            spring_damping: 30.0,
            counter_duration_ms: 1800.0,
            counter_threshold: 0.4,
            reveal_threshold: 0.1,
            nav_scrolled_px: 50.0,
            debug: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: SiteConfig = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    /// Reads `<script id="site-config" type="application/json">` from the page.
    /// Falls back to the defaults when it is absent, and warns on the console
    /// when it is malformed.
    pub fn load_embedded() -> Self {
        match read_embedded_json(CONFIG_SCRIPT_ID).and_then(|raw| Self::from_json(&raw)) {
            Ok(cfg) => cfg,
            Err(SiteError::MissingElement(_)) => Self::default(),
            Err(e) => {
                gloo::console::warn!(format!("{e}; using default site config"));
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        let d = Self::default();
        if self.particle_count == 0 {
            self.particle_count = d.particle_count;
        }
        self.particle_speed = positive_or(self.particle_speed, d.particle_speed);
        self.particle_spread = positive_or(self.particle_spread, d.particle_spread);
        self.pointer_damping = self.pointer_damping.clamp(0.0, 1.0);
        self.tilt_max_deg = self.tilt_max_deg.abs().min(45.0);
        self.spring_stiffness = positive_or(self.spring_stiffness, d.spring_stiffness);
        self.spring_damping = self.spring_damping.max(0.0);
        self.counter_duration_ms = positive_or(self.counter_duration_ms, d.counter_duration_ms);
        self.counter_threshold = self.counter_threshold.clamp(0.0, 1.0);
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);
        self
    }
}

fn positive_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        fallback
    }
}

fn read_embedded_json(script_id: &str) -> Result<String> {
    let doc = window()
        .ok_or(SiteError::MissingWindow)?
        .document()
        .ok_or(SiteError::MissingWindow)?;
    let el = doc
        .get_element_by_id(script_id)
        .ok_or_else(|| SiteError::missing_element(script_id))?;
    Ok(el.text_content().unwrap_or_default())
}
