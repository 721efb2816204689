pub mod gate;
pub mod sampler;
pub mod variance;
