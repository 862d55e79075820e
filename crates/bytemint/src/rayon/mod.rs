//! # Rayon Utilities
//!
//! ``rayon`` powered wrappers for batch-parallel encoders and decoders.
//!
//! Parallelism is across batch items only; a single text is always
//! merged on one thread.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
