use clap::ValueEnum;
use common::games::tictactoe::{FirstPlayerMode, Mark};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum FirstPlayerConfig {
    #[default]
    Random,
    X,
    O,
}

impl From<FirstPlayerConfig> for FirstPlayerMode {
    fn from(config: FirstPlayerConfig) -> Self {
        match config {
            FirstPlayerConfig::Random => FirstPlayerMode::Random,
            FirstPlayerConfig::X => FirstPlayerMode::Fixed(Mark::X),
            FirstPlayerConfig::O => FirstPlayerMode::Fixed(Mark::O),
        }
    }
}
