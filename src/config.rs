//! Game constants and runtime configuration.
//!
//! Everything has a default; a few values can be overridden from the
//! environment:
//! - `FRAZZER_ASSET_DIR`: directory holding `car.png` and `mapTiles.png`
//! - `FRAZZER_PIXEL_SCALE`: integer window scale, default 2
//! - `FRAZZER_TARGET_FPS`: frame cap, default 60
use crate::core::car::CarTuning;
use crate::error::ConfigError;

pub const TITLE: &str = "Frazzer Racing";

// Logical screen, in pixels before scaling
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 400;
pub const PIXEL_SCALE: i32 = 2;

/// Tile size in pixels (w, h).
pub const BLOCK: (i32, i32) = (10, 10);

/// Car footprint (w, h), matches the car sprite.
pub const CAR_SIZE: (f32, f32) = (10.0, 20.0);
pub const CAR_START: (f32, f32) = (130.0, 200.0);

pub const TARGET_FPS: u32 = 60;
pub const ASSET_DIR: &str = "./gfx";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub pixel_scale: i32,
    pub block: (i32, i32),
    pub car_size: (f32, f32),
    pub car_start: (f32, f32),
    pub target_fps: u32,
    pub asset_dir: String,
    pub tuning: CarTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            pixel_scale: PIXEL_SCALE,
            block: BLOCK,
            car_size: CAR_SIZE,
            car_start: CAR_START,
            target_fps: TARGET_FPS,
            asset_dir: ASSET_DIR.to_string(),
            tuning: CarTuning::default(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(dir) = lookup("FRAZZER_ASSET_DIR") {
            let dir = dir.trim();
            if !dir.is_empty() {
                cfg.asset_dir = dir.to_string();
            }
        }
        if let Some(raw) = lookup("FRAZZER_PIXEL_SCALE") {
            let scale = parse_positive("FRAZZER_PIXEL_SCALE", &raw)? as i32;
            // the scaled window must fit in raylib's i32 sizes
            let fits = cfg.screen_width.checked_mul(scale).is_some()
                && cfg.screen_height.checked_mul(scale).is_some();
            if !fits {
                return Err(ConfigError::Invalid {
                    var: "FRAZZER_PIXEL_SCALE".to_string(),
                    value: raw,
                    reason: "window too large".to_string(),
                });
            }
            cfg.pixel_scale = scale;
        }
        if let Some(raw) = lookup("FRAZZER_TARGET_FPS") {
            cfg.target_fps = parse_positive("FRAZZER_TARGET_FPS", &raw)?;
        }

        Ok(cfg)
    }

    pub fn window_size(&self) -> (i32, i32) {
        (self.screen_width * self.pixel_scale, self.screen_height * self.pixel_scale)
    }

    pub fn asset_path(&self, file: &str) -> String {
        format!("{}/{}", self.asset_dir.trim_end_matches('/'), file)
    }
}

fn parse_positive(var: &str, raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: var.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let n: u32 = raw.trim().parse().map_err(|_| invalid("not an integer"))?;
    // i32 cast for the pixel scale must stay lossless
    if n == 0 || n > i32::MAX as u32 {
        return Err(invalid("must be between 1 and i32::MAX"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.window_size(), (1600, 800));
        assert_eq!(cfg.asset_path("car.png"), "./gfx/car.png");
    }

    #[test]
    fn env_overrides_are_applied() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("FRAZZER_ASSET_DIR", "/tmp/assets/"),
            ("FRAZZER_PIXEL_SCALE", "3"),
            ("FRAZZER_TARGET_FPS", " 144 "),
        ]))
        .unwrap();
        assert_eq!(cfg.pixel_scale, 3);
        assert_eq!(cfg.target_fps, 144);
        assert_eq!(cfg.window_size(), (2400, 1200));
        assert_eq!(cfg.asset_path("mapTiles.png"), "/tmp/assets/mapTiles.png");
    }

    #[test]
    fn blank_asset_dir_keeps_default() {
        let cfg = GameConfig::from_lookup(lookup_from(&[("FRAZZER_ASSET_DIR", "  ")])).unwrap();
        assert_eq!(cfg.asset_dir, ASSET_DIR);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        let err = GameConfig::from_lookup(lookup_from(&[("FRAZZER_PIXEL_SCALE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "FRAZZER_PIXEL_SCALE"));

        let err = GameConfig::from_lookup(lookup_from(&[("FRAZZER_TARGET_FPS", "fast")])).unwrap_err();
        assert!(err.to_string().contains("FRAZZER_TARGET_FPS"));
    }

    #[test]
    fn rejects_scale_that_overflows_window() {
        let err = GameConfig::from_lookup(lookup_from(&[("FRAZZER_PIXEL_SCALE", "3000000")])).unwrap_err();
        assert!(err.to_string().contains("window too large"));

        // largest scale that still fits the 800 px width
        let max = (i32::MAX / SCREEN_WIDTH).to_string();
        let cfg = GameConfig::from_lookup(lookup_from(&[("FRAZZER_PIXEL_SCALE", max.as_str())])).unwrap();
        assert_eq!(cfg.window_size().0, SCREEN_WIDTH * (i32::MAX / SCREEN_WIDTH));
    }
}
