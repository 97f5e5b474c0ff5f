// Domain layer: models and ports. Adapters live under config/ and core/.

pub mod model;
pub mod ports;
