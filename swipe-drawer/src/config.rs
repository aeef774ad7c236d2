use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, SETTLE_DURATION};
use crate::error::{DrawerError, Result};
use crate::gesture::DRAG_THRESHOLD;

/// Default margin of content left visible when the panel is open.
pub const EXPANDED_OFFSET: f32 = 60.0;

/// Tunables for the drawer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub expanded_offset: f32,
    pub settle_duration_ms: u64,
    pub easing: Easing,
    pub drag_threshold: f32,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            expanded_offset: EXPANDED_OFFSET,
            settle_duration_ms: SETTLE_DURATION.as_millis() as u64,
            easing: Easing::default(),
            drag_threshold: DRAG_THRESHOLD,
        }
    }
}

impl DrawerConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.expanded_offset.is_finite() || self.expanded_offset < 0.0 {
            return Err(DrawerError::InvalidConfig {
                field: "expanded_offset",
                reason: "must be a finite, non-negative number",
            });
        }
        if self.settle_duration_ms == 0 {
            return Err(DrawerError::InvalidConfig {
                field: "settle_duration_ms",
                reason: "must be greater than zero",
            });
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(DrawerError::InvalidConfig {
                field: "drag_threshold",
                reason: "must be a finite, non-negative number",
            });
        }
        Ok(())
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }
}
