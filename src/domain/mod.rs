// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde/rand where needed.

pub mod model;
pub mod ports;
