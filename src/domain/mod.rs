// Domain layer: the canonical angle and the builder port. No dependency on the builders themselves.

pub mod model;
pub mod ports;
