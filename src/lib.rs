pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::FunctionClient;
pub use config::{toml_config::TomlConfig, ServiceConfig};
pub use core::{
    coordinate::is_valid_coordinate,
    geometry::{parse_geometry, parse_geometry_str},
    location::extract_location,
    locator::FaultLocator,
};
pub use domain::model::{Geometry, LocatedFault, Location, PinCoordinates, Position};
pub use utils::error::{GeoError, Result};
