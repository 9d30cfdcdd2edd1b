use std::time::Duration;
use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ExitAnimationConfig {
    pub frames: u32,
    pub frame_delay_ms: u64,
}

impl ExitAnimationConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

impl Validate for ExitAnimationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.frames < 1 || self.frames > 10 {
            return Err("exit animation frames must be between 1 and 10".to_string());
        }
        if self.frame_delay_ms > 5000 {
            return Err("exit animation frame_delay_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

impl Default for ExitAnimationConfig {
    fn default() -> Self {
        Self {
            frames: 3,
            frame_delay_ms: 500,
        }
    }
}
