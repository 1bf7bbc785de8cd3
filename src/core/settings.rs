// Runtime-tunable settings.
//
// Defaults come from `constants.rs`; the web layer feeds `data-*` attribute
// pairs from the page wrapper through [`Settings::apply`].

use super::constants::{
    MAX_PIXEL_RATIO, PARTICLE_COUNT, PARTICLE_OPACITY, PARTICLE_SIZE, PARTICLE_SPREAD,
    SWIPE_THRESHOLD_PX, TRANSITION_LOCK_MS,
};

pub const MAX_PARTICLE_COUNT: usize = 100_000;
pub const MAX_PARTICLE_SPREAD: f32 = 10_000.0;
pub const MAX_LOCK_MS: u32 = 10_000;

/// Attribute keys understood by [`Settings::apply`], without the `data-` prefix.
pub const SETTING_KEYS: [&str; 7] = [
    "particle-count",
    "particle-spread",
    "particle-size",
    "particle-opacity",
    "max-pixel-ratio",
    "lock-ms",
    "swipe-threshold",
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("`{key}`: cannot parse `{value}`")]
    Parse { key: &'static str, value: String },
    #[error("`{key}`: {value} is outside {range}")]
    OutOfRange {
        key: &'static str,
        value: String,
        range: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub particle_count: usize,
    pub particle_spread: f32,
    pub particle_size: f32,
    pub particle_opacity: f32,
    pub max_pixel_ratio: f64,
    pub lock_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            particle_size: PARTICLE_SIZE,
            particle_opacity: PARTICLE_OPACITY,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            lock_ms: TRANSITION_LOCK_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

impl Settings {
    /// Apply one override. On error the current value is left untouched.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let value = value.trim();
        match key {
            "particle-count" => {
                let v: usize = parse("particle-count", value)?;
                check("particle-count", v, (1..=MAX_PARTICLE_COUNT).contains(&v), "1..=100000")?;
                self.particle_count = v;
            }
            "particle-spread" => {
                let v: f32 = parse("particle-spread", value)?;
                check(
                    "particle-spread",
                    v,
                    v > 0.0 && v <= MAX_PARTICLE_SPREAD,
                    "(0, 10000]",
                )?;
                self.particle_spread = v;
            }
            "particle-size" => {
                let v: f32 = parse("particle-size", value)?;
                check("particle-size", v, v.is_finite() && v > 0.0, "(0, inf)")?;
                self.particle_size = v;
            }
            "particle-opacity" => {
                let v: f32 = parse("particle-opacity", value)?;
                check("particle-opacity", v, (0.0..=1.0).contains(&v), "0..=1")?;
                self.particle_opacity = v;
            }
            "max-pixel-ratio" => {
                let v: f64 = parse("max-pixel-ratio", value)?;
                check("max-pixel-ratio", v, v.is_finite() && v >= 1.0, "[1, inf)")?;
                self.max_pixel_ratio = v;
            }
            "lock-ms" => {
                let v: u32 = parse("lock-ms", value)?;
                check("lock-ms", v, v <= MAX_LOCK_MS, "0..=10000")?;
                self.lock_ms = v;
            }
            "swipe-threshold" => {
                let v: f64 = parse("swipe-threshold", value)?;
                check("swipe-threshold", v, v.is_finite() && v >= 0.0, "[0, inf)")?;
                self.swipe_threshold_px = v;
            }
            other => return Err(SettingsError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Build settings from `(key, value)` pairs, collecting the rejected ones.
    pub fn from_pairs<'a, I>(pairs: I) -> (Self, Vec<SettingsError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        let errors = pairs
            .into_iter()
            .filter_map(|(k, v)| settings.apply(k, v).err())
            .collect();
        (settings, errors)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, SettingsError> {
    value.parse().map_err(|_| SettingsError::Parse {
        key,
        value: value.to_string(),
    })
}

fn check<T: std::fmt::Display>(
    key: &'static str,
    value: T,
    ok: bool,
    range: &'static str,
) -> Result<(), SettingsError> {
    if ok {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            key,
            value: value.to_string(),
            range,
        })
    }
}
