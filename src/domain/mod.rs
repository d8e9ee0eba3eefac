// Domain layer: models and ports. Adapters and widgets depend on this, never the other way.

pub mod model;
pub mod ports;
