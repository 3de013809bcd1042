// Domain layer: poem model, search request and the ports the core talks through.

pub mod model;
pub mod ports;
