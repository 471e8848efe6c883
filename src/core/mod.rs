pub mod coordinate;
pub mod geometry;
pub mod location;
pub mod locator;
pub mod strategy;
pub mod wkt;

pub use crate::domain::model::{Geometry, LocatedFault, Location, PinCoordinates, Position};
pub use crate::domain::ports::{ConfigProvider, LocationService};
pub use crate::utils::error::Result;
