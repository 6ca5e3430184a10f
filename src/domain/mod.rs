// Domain layer: run records, upstream response shapes and ports (interfaces).

pub mod model;
pub mod places;
pub mod ports;
