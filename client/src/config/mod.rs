mod config;
mod display_config;
mod exit_animation_config;
mod first_player_config;

pub use config::{Config, get_config_manager};
pub use display_config::DisplayConfig;
pub use exit_animation_config::ExitAnimationConfig;
pub use first_player_config::FirstPlayerConfig;
