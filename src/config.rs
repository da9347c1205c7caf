//! Widget configuration.
//!
//! Every value defaults to the behavior of the published site, so an empty
//! TOML document (or no file at all) yields the stock configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    pub autoplay_interval_ms: u64,
    /// Space between two slides; added to the slide extent to get the stride.
    pub gap: f32,
    pub swipe_threshold: f32,
    /// Follow free scrolling of the strip by recomputing the current index.
    pub scroll_sync: bool,
}

impl SliderConfig {
    pub fn screenshots() -> Self {
        Self {
            autoplay_interval_ms: SCREENSHOT_INTERVAL_MS,
            gap: SCREENSHOT_GAP,
            swipe_threshold: SWIPE_THRESHOLD,
            scroll_sync: true,
        }
    }

    pub fn testimonials() -> Self {
        Self {
            autoplay_interval_ms: TESTIMONIAL_INTERVAL_MS,
            gap: TESTIMONIAL_GAP,
            swipe_threshold: SWIPE_THRESHOLD,
            scroll_sync: true,
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::Invalid(format!(
                "{section}.autoplay_interval_ms must be greater than zero"
            )));
        }
        if self.gap < 0.0 || self.swipe_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{section}.gap and {section}.swipe_threshold must not be negative"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    pub compact_after: f32,
    pub mobile_breakpoint: f32,
    pub anchor_margin: f32,
    pub hash_update_delay_ms: u64,
    pub scroll_spy_margin: f32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            compact_after: NAVBAR_COMPACT_AFTER,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            anchor_margin: ANCHOR_MARGIN,
            hash_update_delay_ms: HASH_UPDATE_DELAY_MS,
            scroll_spy_margin: SCROLL_SPY_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LazyLoadConfig {
    /// Use intersection notifications. When false the polling fallback runs.
    pub observer: bool,
    pub debounce_ms: u64,
}

impl Default for LazyLoadConfig {
    fn default() -> Self {
        Self {
            observer: true,
            debounce_ms: LAZY_LOAD_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    pub visibility_threshold: f32,
    pub animation_ms: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: STAT_VISIBILITY_THRESHOLD,
            animation_ms: STAT_ANIMATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default = "SliderConfig::screenshots")]
    pub screenshots: SliderConfig,
    #[serde(default = "SliderConfig::testimonials")]
    pub testimonials: SliderConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub lazy_load: LazyLoadConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            screenshots: SliderConfig::screenshots(),
            testimonials: SliderConfig::testimonials(),
            navbar: NavbarConfig::default(),
            lazy_load: LazyLoadConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a TOML document. `origin` only labels errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.screenshots.validate("screenshots")?;
        config.testimonials.validate("testimonials")?;
        if !(0.0..=1.0).contains(&config.stats.visibility_threshold) {
            return Err(ConfigError::Invalid(
                "stats.visibility_threshold must be within 0.0..=1.0".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }
}
