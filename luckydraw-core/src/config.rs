use crate::{DrawError, Result};
use serde::{Deserialize, Serialize};

/// Random fallback window for draws after the fixed winner is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    pub random_min: u32,
    pub random_max: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            random_min: 2000,
            random_max: 2500,
        }
    }
}

impl DrawConfig {
    /// Window bounds are inclusive on both ends.
    pub fn new(random_min: u32, random_max: u32) -> Result<Self> {
        if random_min > random_max {
            return Err(DrawError::config(format!(
                "random window is empty: [{}, {}]",
                random_min, random_max
            )));
        }
        Ok(Self {
            random_min,
            random_max,
        })
    }
}
