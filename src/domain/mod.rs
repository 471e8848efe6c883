// Domain layer: canonical geometry values and the port to the location service.

pub mod model;
pub mod ports;
