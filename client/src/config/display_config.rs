use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub clear_screen: bool,
    pub show_instructions: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_instructions: true,
        }
    }
}
