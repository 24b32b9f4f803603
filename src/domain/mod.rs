// Domain layer: the container, the driver-native value and the boundary ports.

pub mod model;
pub mod nullable;
pub mod ports;
