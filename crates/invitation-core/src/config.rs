use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACKWARD_RATIO, DEFAULT_DEAD_ZONE, DEFAULT_FORWARD_RATIO, DEFAULT_INDICATOR_PITCH,
    DEFAULT_REOPEN_DELAY_MS, DEFAULT_SWIPE_THRESHOLD, DEFAULT_TRANSITION_MS,
    DEFAULT_ZOOM_TOLERANCE,
};
use crate::error::{InvitationError, Result};
use crate::image_set::ImageSet;

/// Full gallery configuration, usually read from a TOML file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Ordered photo paths shown by the carousel and viewer.
    #[serde(default)]
    pub photos: Vec<PathBuf>,
    /// Background track toggled by the music button.
    #[serde(default)]
    pub music: Option<PathBuf>,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub all_photos: AllPhotosConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub dead_zone: f32,
    pub zoom_tolerance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            zoom_tolerance: DEFAULT_ZOOM_TOLERANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub transition_ms: u64,
    pub forward_ratio: f32,
    pub backward_ratio: f32,
}

impl CarouselConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            forward_ratio: DEFAULT_FORWARD_RATIO,
            backward_ratio: DEFAULT_BACKWARD_RATIO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub swipe_threshold: f32,
    pub indicator_pitch: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            indicator_pitch: DEFAULT_INDICATOR_PITCH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllPhotosConfig {
    pub reopen_delay_ms: u64,
}

impl AllPhotosConfig {
    pub fn reopen_delay(&self) -> Duration {
        Duration::from_millis(self.reopen_delay_ms)
    }
}

impl Default for AllPhotosConfig {
    fn default() -> Self {
        Self {
            reopen_delay_ms: DEFAULT_REOPEN_DELAY_MS,
        }
    }
}

impl GalleryConfig {
    /// Read and validate a config file.
    ///
    /// Relative photo and music paths are resolved against the directory
    /// containing the config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn image_set(&self) -> ImageSet {
        ImageSet::new(self.photos.clone())
    }

    /// Check thresholds and ratios for values the gesture engine cannot use.
    pub fn validate(&self) -> Result<()> {
        positive("gesture.dead_zone", self.gesture.dead_zone)?;
        positive("viewer.swipe_threshold", self.viewer.swipe_threshold)?;
        positive("viewer.indicator_pitch", self.viewer.indicator_pitch)?;

        if !self.gesture.zoom_tolerance.is_finite() || self.gesture.zoom_tolerance < 1.0 {
            return Err(InvitationError::InvalidConfig {
                field: "gesture.zoom_tolerance",
                reason: format!("must be >= 1.0, got {}", self.gesture.zoom_tolerance),
            });
        }

        let c = &self.carousel;
        if !(c.backward_ratio > 0.0 && c.backward_ratio < 1.0) {
            return Err(InvitationError::InvalidConfig {
                field: "carousel.backward_ratio",
                reason: format!("must lie in (0, 1), got {}", c.backward_ratio),
            });
        }
        if !(c.forward_ratio > 1.0 && c.forward_ratio.is_finite()) {
            return Err(InvitationError::InvalidConfig {
                field: "carousel.forward_ratio",
                reason: format!("must be > 1, got {}", c.forward_ratio),
            });
        }
        if c.transition_ms == 0 {
            return Err(InvitationError::InvalidConfig {
                field: "carousel.transition_ms",
                reason: "must be > 0".into(),
            });
        }

        Ok(())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for photo in &mut self.photos {
            if photo.is_relative() {
                *photo = base.join(&*photo);
            }
        }
        if let Some(music) = self.music.as_mut() {
            if music.is_relative() {
                *music = base.join(&*music);
            }
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvitationError::InvalidConfig {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}
