pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command, SourceFormat};

pub use config::SexagesimalConfig;
pub use core::comparison::{Operand, Relation};
pub use core::source::AngleSource;
pub use domain::model::{
    Angle, Components, Direction, Sexagesimal, MAX_DEGREES, MAX_MINUTES, MAX_RADIANS, MAX_SECONDS,
};
pub use domain::ports::AngleBuilder;
pub use utils::error::{AngleError, Result};
