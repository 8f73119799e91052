//! Construction constants and their persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/sheet-drag/config.toml` (default
//! `~/.config/sheet-drag/config.toml`).

use std::path::PathBuf;

use crate::core::gesture::Bounds;
use crate::core::projection::{check_deceleration_rate, DEFAULT_DECELERATION_RATE};
use crate::core::rubber_band::{RubberBand, DEFAULT_EXTENT, DEFAULT_RESISTANCE};
use crate::core::settle::{SettleParams, DEFAULT_CONVERGENCE, DEFAULT_EPSILON};
use crate::error::ConfigError;

// ───────────────────────────────────────── sheet ─────────────

/// Constants fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    pub content_extent: f64,
    pub container_extent: f64,
    /// Rubber-band `d`.
    pub extent_constant: f64,
    /// Rubber-band `c`, strictly inside `(0, 1)`.
    pub resistance_constant: f64,
    pub convergence: f64,
    pub settle_epsilon: f64,
    /// Only feeds the informational release projection.
    pub deceleration_rate: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            content_extent: 400.0,
            container_extent: 200.0,
            extent_constant: DEFAULT_EXTENT,
            resistance_constant: DEFAULT_RESISTANCE,
            convergence: DEFAULT_CONVERGENCE,
            settle_epsilon: DEFAULT_EPSILON,
            deceleration_rate: DEFAULT_DECELERATION_RATE,
        }
    }
}

impl SheetConfig {
    pub fn new(content_extent: f64, container_extent: f64) -> Self {
        Self {
            content_extent,
            container_extent,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("content_extent", self.content_extent),
            ("container_extent", self.container_extent),
            ("extent_constant", self.extent_constant),
            ("resistance_constant", self.resistance_constant),
            ("convergence", self.convergence),
            ("settle_epsilon", self.settle_epsilon),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        if self.resistance_constant <= 0.0 || self.resistance_constant >= 1.0 {
            return Err(ConfigError::ResistanceOutOfRange(self.resistance_constant));
        }
        if self.content_extent < self.container_extent {
            return Err(ConfigError::NegativeRange {
                content: self.content_extent,
                container: self.container_extent,
            });
        }
        if self.extent_constant <= 0.0 {
            return Err(ConfigError::InvalidExtentConstant(self.extent_constant));
        }
        if self.convergence <= 0.0 || self.convergence > 1.0 {
            return Err(ConfigError::InvalidConvergence(self.convergence));
        }
        if self.settle_epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.settle_epsilon));
        }
        check_deceleration_rate(self.deceleration_rate)?;
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.content_extent, self.container_extent)
    }

    pub fn rubber_band(&self) -> RubberBand {
        RubberBand::new(self.extent_constant, self.resistance_constant)
    }

    pub fn settle_params(&self) -> SettleParams {
        SettleParams {
            convergence: self.convergence,
            epsilon: self.settle_epsilon,
        }
    }
}

// ───────────────────────────────────────── playground ────────

/// Everything the terminal playground reads from disk: the sheet constants
/// plus how to drive and draw them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    pub sheet: SheetConfig,
    /// Frames per second while the sheet is moving.
    pub frame_rate: u32,
    /// Offset units covered by one terminal row.
    pub units_per_row: f64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            frame_rate: 60,
            units_per_row: 10.0,
        }
    }
}

impl PlaygroundConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                tracing::debug!("loaded config from {}", path.display());
                return Self::parse(&contents);
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Unknown keys and unparsable values keep their defaults.  Range checks
    /// on the sheet constants are left to [`SheetConfig::validate`].
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if key == "frame_rate" {
                if let Ok(v) = value.parse::<u32>() {
                    config.frame_rate = v.clamp(10, 240);
                }
                continue;
            }

            let Ok(v) = value.parse::<f64>() else {
                continue;
            };
            let sheet = &mut config.sheet;
            let slot = match key {
                "content_extent" => &mut sheet.content_extent,
                "container_extent" => &mut sheet.container_extent,
                "extent_constant" => &mut sheet.extent_constant,
                "resistance_constant" => &mut sheet.resistance_constant,
                "convergence" => &mut sheet.convergence,
                "settle_epsilon" => &mut sheet.settle_epsilon,
                "deceleration_rate" => &mut sheet.deceleration_rate,
                "units_per_row" => {
                    if v.is_finite() {
                        config.units_per_row = v.clamp(1.0, 100.0);
                    }
                    continue;
                }
                _ => continue,
            };
            *slot = v;
        }

        config
    }

    pub fn serialise(&self) -> String {
        let s = &self.sheet;
        let lines = [
            "# sheet-drag configuration".to_string(),
            String::new(),
            "# Legal offset range is [0, content_extent - container_extent]".to_string(),
            format!("content_extent = {}", s.content_extent),
            format!("container_extent = {}", s.container_extent),
            String::new(),
            "# Rubber band: y = x*d*c / (d + c*x)".to_string(),
            format!("extent_constant = {}", s.extent_constant),
            format!("resistance_constant = {}", s.resistance_constant),
            String::new(),
            "# Settling".to_string(),
            format!("convergence = {}", s.convergence),
            format!("settle_epsilon = {}", s.settle_epsilon),
            format!("deceleration_rate = {}", s.deceleration_rate),
            String::new(),
            "# Playground".to_string(),
            format!("frame_rate = {}", self.frame_rate),
            format!("units_per_row = {}", self.units_per_row),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/sheet-drag/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("sheet-drag").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SheetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn resistance_must_be_inside_unit_interval() {
        for c in [0.0, -0.1, 1.0, 2.0] {
            let config = SheetConfig {
                resistance_constant: c,
                ..SheetConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::ResistanceOutOfRange(c)));
        }
    }

    #[test]
    fn content_smaller_than_container_is_rejected() {
        let err = SheetConfig::new(100.0, 200.0).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeRange {
                content: 100.0,
                container: 200.0
            }
        );
    }

    #[test]
    fn equal_extents_are_a_zero_length_range() {
        let config = SheetConfig::new(200.0, 200.0);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.bounds().upper(), 0.0);
    }

    #[test]
    fn non_finite_values_are_named() {
        let config = SheetConfig {
            settle_epsilon: f64::INFINITY,
            ..SheetConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonFinite("settle_epsilon")));
    }

    #[test]
    fn other_constants_are_checked() {
        let base = SheetConfig::default();
        assert!(matches!(
            SheetConfig { extent_constant: 0.0, ..base }.validate(),
            Err(ConfigError::InvalidExtentConstant(_))
        ));
        assert!(matches!(
            SheetConfig { convergence: 1.5, ..base }.validate(),
            Err(ConfigError::InvalidConvergence(_))
        ));
        assert!(matches!(
            SheetConfig { settle_epsilon: 0.0, ..base }.validate(),
            Err(ConfigError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            SheetConfig { deceleration_rate: 1.0, ..base }.validate(),
            Err(ConfigError::DecelerationOutOfRange(_))
        ));
    }

    #[test]
    fn parse_reads_known_keys_and_skips_noise() {
        let text = "\
# comment
[sheet]
content_extent = 800
container_extent = \"300\"
resistance_constant = 0.4
frame_rate = 1000
units_per_row = 0.2
bogus = 12
convergence = not-a-number
";
        let config = PlaygroundConfig::parse(text);
        assert_eq!(config.sheet.content_extent, 800.0);
        assert_eq!(config.sheet.container_extent, 300.0);
        assert_eq!(config.sheet.resistance_constant, 0.4);
        assert_eq!(config.sheet.convergence, DEFAULT_CONVERGENCE);
        assert_eq!(config.frame_rate, 240);
        assert_eq!(config.units_per_row, 1.0);
    }

    #[test]
    fn serialised_form_parses_back() {
        let mut config = PlaygroundConfig::default();
        config.sheet.content_extent = 640.0;
        config.sheet.settle_epsilon = 0.25;
        config.frame_rate = 30;
        assert_eq!(PlaygroundConfig::parse(&config.serialise()), config);
    }
}
