// Domain layer: the post record and the repository ports. No storage details here.

pub mod model;
pub mod ports;
