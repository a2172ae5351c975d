pub mod rng;
pub mod surface;
