// Domain layer: value types and the seams (clock, configuration) the engine depends on.

pub mod model;
pub mod ports;
