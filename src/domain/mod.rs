// Domain layer: request model and the two collaborator ports. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
